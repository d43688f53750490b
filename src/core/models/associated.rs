//! Enums whose variants carry data.

use chrono::NaiveDate;

/// A quantity tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Distance { meters: f64 },
    Weight { kilograms: f64 },
    Temperature { celsius: f64 },
    Time { seconds: u32 },
}

pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;

impl Measurement {
    /// One sample of each variant, as shown on the demo screens.
    pub fn samples() -> [Measurement; 4] {
        [
            Measurement::Distance { meters: 1000.0 },
            Measurement::Weight { kilograms: 70.5 },
            Measurement::Temperature { celsius: 25.0 },
            Measurement::Time { seconds: 3600 },
        ]
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Measurement::Distance { .. } => "distance",
            Measurement::Weight { .. } => "weight",
            Measurement::Temperature { .. } => "temperature",
            Measurement::Time { .. } => "time",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Measurement::Distance { meters } => format!("{meters} m"),
            Measurement::Weight { kilograms } => format!("{kilograms} kg"),
            Measurement::Temperature { celsius } => format!("{celsius}°C"),
            Measurement::Time { seconds } => format!("{seconds} s"),
        }
    }

    /// The same quantity in a second unit. Time is truncated to whole minutes.
    pub fn alternative_unit(&self) -> String {
        match self {
            Measurement::Distance { meters } => format!("{} km", meters / 1000.0),
            Measurement::Weight { kilograms } => {
                format!("{:.2} lbs", kilograms * POUNDS_PER_KILOGRAM)
            }
            Measurement::Temperature { celsius } => {
                format!("{}°F", celsius * 9.0 / 5.0 + 32.0)
            }
            Measurement::Time { seconds } => format!("{} min", seconds / 60),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

impl AlertLevel {
    pub fn emoji(&self) -> &'static str {
        match self {
            AlertLevel::Info => "ℹ️",
            AlertLevel::Warning => "⚠️",
            AlertLevel::Error => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    Message { from: String, content: String },
    Reminder { title: String, date: NaiveDate },
    Alert { level: AlertLevel, message: String },
    System { code: u32, info: String },
}

impl NotificationKind {
    pub fn samples() -> Vec<NotificationKind> {
        vec![
            NotificationKind::Message {
                from: "Ana".to_string(),
                content: "Hi! How are you?".to_string(),
            },
            NotificationKind::Reminder {
                title: "Team meeting".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap_or(NaiveDate::MIN),
            },
            NotificationKind::Alert {
                level: AlertLevel::Warning,
                message: "Battery low".to_string(),
            },
            NotificationKind::System {
                code: 1001,
                info: "Update available".to_string(),
            },
        ]
    }

    pub fn summary(&self) -> String {
        match self {
            NotificationKind::Message { from, content } => {
                format!("Message from {from}: {content}")
            }
            NotificationKind::Reminder { title, date } => {
                format!("Reminder: {title} ({})", date.format("%b %d, %Y"))
            }
            NotificationKind::Alert { level, message } => {
                format!("{} {message}", level.emoji())
            }
            NotificationKind::System { code, info } => format!("System [{code}]: {info}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    Network(String),
    Validation { field: String, message: String },
    Unknown,
}

impl OperationError {
    pub fn description(&self) -> String {
        match self {
            OperationError::Network(message) => format!("Network error: {message}"),
            OperationError::Validation { field, message } => {
                format!("Error in {field}: {message}")
            }
            OperationError::Unknown => "Unknown error".to_string(),
        }
    }
}

/// A generic enum with a payload on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult<T> {
    Success(T),
    Failure(OperationError),
}

impl<T> OperationResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationResult::Success(_))
    }

    /// Converts into the standard library's `Result`.
    pub fn into_result(self) -> Result<T, OperationError> {
        match self {
            OperationResult::Success(value) => Ok(value),
            OperationResult::Failure(error) => Err(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpStatusCode {
    Ok = 200,
    Created = 201,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    InternalServerError = 500,
}

impl HttpStatusCode {
    pub const ALL: [HttpStatusCode; 7] = [
        HttpStatusCode::Ok,
        HttpStatusCode::Created,
        HttpStatusCode::BadRequest,
        HttpStatusCode::Unauthorized,
        HttpStatusCode::Forbidden,
        HttpStatusCode::NotFound,
        HttpStatusCode::InternalServerError,
    ];

    pub fn code(&self) -> u16 {
        *self as u16
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn reason(&self) -> &'static str {
        match self {
            HttpStatusCode::Ok => "OK",
            HttpStatusCode::Created => "Created",
            HttpStatusCode::BadRequest => "Bad Request",
            HttpStatusCode::Unauthorized => "Unauthorized",
            HttpStatusCode::Forbidden => "Forbidden",
            HttpStatusCode::NotFound => "Not Found",
            HttpStatusCode::InternalServerError => "Internal Server Error",
        }
    }

    pub fn category(&self) -> StatusCategory {
        StatusCategory::for_code(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Success,
    Redirection,
    ClientError,
    ServerError,
    Unknown,
}

impl StatusCategory {
    pub fn for_code(code: u16) -> Self {
        match code {
            200..=299 => StatusCategory::Success,
            300..=399 => StatusCategory::Redirection,
            400..=499 => StatusCategory::ClientError,
            500..=599 => StatusCategory::ServerError,
            _ => StatusCategory::Unknown,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StatusCategory::Success => "Success",
            StatusCategory::Redirection => "Redirection",
            StatusCategory::ClientError => "Client error",
            StatusCategory::ServerError => "Server error",
            StatusCategory::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_conversions() {
        assert_eq!(
            Measurement::Distance { meters: 1500.0 }.alternative_unit(),
            "1.5 km"
        );
        assert_eq!(
            Measurement::Temperature { celsius: 100.0 }.alternative_unit(),
            "212°F"
        );
        assert_eq!(
            Measurement::Weight { kilograms: 10.0 }.alternative_unit(),
            "22.05 lbs"
        );
        // Whole minutes only
        assert_eq!(Measurement::Time { seconds: 119 }.alternative_unit(), "1 min");
    }

    #[test]
    fn test_measurement_description() {
        assert_eq!(Measurement::Distance { meters: 1000.0 }.description(), "1000 m");
        assert_eq!(Measurement::Weight { kilograms: 70.5 }.description(), "70.5 kg");
        assert_eq!(Measurement::Time { seconds: 30 }.description(), "30 s");
    }

    #[test]
    fn test_notification_summaries() {
        let alert = NotificationKind::Alert {
            level: AlertLevel::Error,
            message: "Disk full".to_string(),
        };
        assert_eq!(alert.summary(), "❌ Disk full");

        let reminder = NotificationKind::Reminder {
            title: "Dentist".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
        };
        assert_eq!(reminder.summary(), "Reminder: Dentist (Mar 07, 2025)");
        assert_eq!(NotificationKind::samples().len(), 4);
    }

    #[test]
    fn test_operation_result_into_result() {
        let ok: OperationResult<u32> = OperationResult::Success(7);
        assert!(ok.is_success());
        assert_eq!(ok.into_result(), Ok(7));

        let failed: OperationResult<u32> = OperationResult::Failure(OperationError::Validation {
            field: "email".to_string(),
            message: "missing @".to_string(),
        });
        assert!(!failed.is_success());
        assert_eq!(
            failed.into_result().unwrap_err().description(),
            "Error in email: missing @"
        );
    }

    #[test]
    fn test_http_status_categories() {
        assert_eq!(HttpStatusCode::Created.category(), StatusCategory::Success);
        assert_eq!(HttpStatusCode::NotFound.category(), StatusCategory::ClientError);
        assert_eq!(
            HttpStatusCode::InternalServerError.category(),
            StatusCategory::ServerError
        );
        assert_eq!(StatusCategory::for_code(302), StatusCategory::Redirection);
        assert_eq!(StatusCategory::for_code(99), StatusCategory::Unknown);
    }

    #[test]
    fn test_http_status_from_code() {
        assert_eq!(HttpStatusCode::from_code(403), Some(HttpStatusCode::Forbidden));
        assert_eq!(HttpStatusCode::from_code(418), None);
        assert_eq!(HttpStatusCode::Ok.code(), 200);
    }
}
