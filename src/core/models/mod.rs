//! # Demonstration Models
//!
//! The enums the screens teach with. Pure data and pure functions; nothing
//! here knows about navigation or rendering.
//!
//! - [`basic`]: raw-value enums (`DayOfWeek`, `Priority`, `ConnectionStatus`)
//! - [`associated`]: enums with payloads (`Measurement`, `NotificationKind`,
//!   `OperationResult<T>`, `HttpStatusCode`)
//! - [`codes`]: enums as identifiers (`CountryCode`, `Currency`, `ApiEndpoint`)
//! - [`patterns`]: `match`, `if let` and guard examples
//! - [`exercises`]: the practice exercise catalog

pub mod associated;
pub mod basic;
pub mod codes;
pub mod exercises;
pub mod patterns;

pub use associated::{
    AlertLevel, HttpStatusCode, Measurement, NotificationKind, OperationError, OperationResult,
    StatusCategory,
};
pub use basic::{ConnectionStatus, DayOfWeek, Priority};
pub use codes::{ApiEndpoint, CountryCode, Currency, HttpMethod};
pub use exercises::{Difficulty, Exercise};
