//! Pattern-matching helpers shown on the switch examples screen: exhaustive
//! `match`, `if let`, and match guards.

use crate::core::models::associated::{
    HttpStatusCode, Measurement, NotificationKind, StatusCategory,
};

pub fn analyze_http_status(status: HttpStatusCode) -> &'static str {
    match status {
        HttpStatusCode::Ok => "✅ Request succeeded",
        HttpStatusCode::Created => "✅ Resource created",
        HttpStatusCode::BadRequest => "❌ Malformed request",
        HttpStatusCode::Unauthorized => "🔒 Authentication required",
        HttpStatusCode::Forbidden => "🚫 Access forbidden",
        HttpStatusCode::NotFound => "📭 Resource not found",
        HttpStatusCode::InternalServerError => "💥 Internal server error",
    }
}

pub fn categorize_http_response(status: HttpStatusCode) -> String {
    let label = match status.category() {
        StatusCategory::Success => "Success",
        StatusCategory::ClientError => "Client error",
        StatusCategory::ServerError => "Server error",
        _ => "Other",
    };
    format!("Category: {label} ({})", status.code())
}

/// Destructures a measurement the way a `match` arm binds its payload.
pub fn extract_measurement(measurement: &Measurement) -> String {
    match measurement {
        Measurement::Distance { meters } => {
            format!("Distance {{ meters }}: meters = {meters}, in km: {}", meters / 1000.0)
        }
        Measurement::Weight { kilograms } => format!(
            "Weight {{ kilograms }}: kilograms = {kilograms}, in lbs: {}",
            measurement.alternative_unit()
        ),
        Measurement::Temperature { celsius } => format!(
            "Temperature {{ celsius }}: celsius = {celsius}, in °F: {}",
            celsius * 9.0 / 5.0 + 32.0
        ),
        Measurement::Time { seconds } => {
            format!("Time {{ seconds }}: seconds = {seconds}, in minutes: {}", seconds / 60)
        }
    }
}

pub fn classify_temperature(measurement: &Measurement) -> String {
    match measurement {
        Measurement::Temperature { celsius } if *celsius < 0.0 => {
            format!("Below zero ({celsius}°C)")
        }
        Measurement::Temperature { celsius } if *celsius > 30.0 => format!("Hot ({celsius}°C)"),
        Measurement::Temperature { celsius } => format!("Mild ({celsius}°C)"),
        _ => "Not a temperature".to_string(),
    }
}

/// Guards are checked top to bottom, so a long sender name wins over a
/// question.
pub fn filter_message(notification: &NotificationKind) -> String {
    match notification {
        NotificationKind::Message { from, .. } if from.chars().count() > 4 => {
            format!("Message from a long name: {from}")
        }
        NotificationKind::Message { from, content } if content.contains('?') => {
            format!("Question from {from}")
        }
        NotificationKind::Message { from, .. } => format!("Simple message from {from}"),
        _ => "Not a message".to_string(),
    }
}

pub fn check_if_message(notification: &NotificationKind) -> String {
    if let NotificationKind::Message { from, content } = notification {
        format!("✅ Message from {from}: '{content}'")
    } else {
        "❌ Not a message".to_string()
    }
}

pub fn check_if_alert(notification: &NotificationKind) -> String {
    if let NotificationKind::Alert { level, message } = notification {
        format!("⚠️ Alert {}: '{message}'", level.emoji())
    } else {
        "❌ Not an alert".to_string()
    }
}

pub fn check_if_system(notification: &NotificationKind) -> String {
    if let NotificationKind::System { code, .. } = notification {
        format!("⚙️ System notification (code: {code})")
    } else {
        "❌ Not a system notification".to_string()
    }
}
