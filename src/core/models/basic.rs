//! Enums with raw values and no payloads.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Raw string value.
    pub fn raw_value(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    pub fn from_raw(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.raw_value() == raw)
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
    Urgent = 4,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn raw_value(&self) -> u8 {
        *self as u8
    }

    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Priority::Low),
            2 => Some(Priority::Medium),
            3 => Some(Priority::High),
            4 => Some(Priority::Urgent),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn color_name(&self) -> &'static str {
        match self {
            Priority::Low => "green",
            Priority::Medium => "yellow",
            Priority::High => "orange",
            Priority::Urgent => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionStatus {
    Disconnected,
    Connecting,
    Connected,
    Error,
}

impl ConnectionStatus {
    pub const ALL: [ConnectionStatus; 4] = [
        ConnectionStatus::Disconnected,
        ConnectionStatus::Connecting,
        ConnectionStatus::Connected,
        ConnectionStatus::Error,
    ];

    pub fn display_text(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Error => "Error",
        }
    }

    /// The state a simulated connection moves to next.
    pub fn next(&self) -> Self {
        match self {
            ConnectionStatus::Disconnected => ConnectionStatus::Connecting,
            ConnectionStatus::Connecting => ConnectionStatus::Connected,
            ConnectionStatus::Connected => ConnectionStatus::Error,
            ConnectionStatus::Error => ConnectionStatus::Disconnected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_days() {
        let weekend: Vec<_> = DayOfWeek::ALL.iter().filter(|d| d.is_weekend()).collect();
        assert_eq!(weekend, vec![&DayOfWeek::Saturday, &DayOfWeek::Sunday]);
    }

    #[test]
    fn test_day_from_raw() {
        assert_eq!(DayOfWeek::from_raw("Friday"), Some(DayOfWeek::Friday));
        assert_eq!(DayOfWeek::from_raw("friday"), None);
    }

    #[test]
    fn test_priority_raw_values() {
        assert_eq!(Priority::Low.raw_value(), 1);
        assert_eq!(Priority::Urgent.raw_value(), 4);
        assert_eq!(Priority::from_raw(3), Some(Priority::High));
        assert_eq!(Priority::from_raw(0), None);
        assert_eq!(Priority::from_raw(5), None);
        assert!(Priority::Urgent > Priority::Low);
    }

    #[test]
    fn test_connection_cycle_returns_to_start() {
        let mut status = ConnectionStatus::Disconnected;
        for _ in 0..ConnectionStatus::ALL.len() {
            status = status.next();
        }
        assert_eq!(status, ConnectionStatus::Disconnected);
        assert_eq!(ConnectionStatus::Connecting.display_text(), "Connecting...");
    }
}
