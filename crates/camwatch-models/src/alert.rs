//! Alert payloads and message rendering.
//!
//! An [`Alert`] is created for a detection that cleared the cooldown
//! gate. Rendering produces two text forms: a short console line and a
//! longer notification body for remote channels.

use crate::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Timestamp format used in rendered alert text.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Unique alert identifier, carried in logs and delivery reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(pub String);

impl AlertId {
    /// Generate a new random alert ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An alert derived from a gate-admitted detection.
///
/// Immutable once created; consumed by the dispatcher and the local
/// actuator, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert ID
    pub id: AlertId,

    /// Category that triggered the alert
    pub category: Category,

    /// Name of the representative detected object
    pub object_name: String,

    /// Wall-clock time the alert fired
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    /// Create a new alert for a detected object.
    pub fn new(
        category: Category,
        object_name: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AlertId::new(),
            category,
            object_name: object_name.into(),
            timestamp,
        }
    }

    /// Threat priority of the alert's category.
    pub fn priority(&self) -> u8 {
        self.category.priority()
    }

    /// Renders both message forms for this alert.
    pub fn render(&self) -> AlertMessage {
        let ts = self.timestamp.format(TIMESTAMP_FORMAT).to_string();

        let console = format!(
            "{} SECURITY ALERT [{ts}]\n{}: {} detected!",
            priority_emoji(self.priority()),
            self.category.label(),
            self.object_name,
        );

        let notification = match self.category {
            Category::Person => format!(
                "🚨 SECURITY BREACH!\n{ts}\nPerson detected: {}\nLocation: Security Camera\nPriority: HIGH ALERT",
                self.object_name,
            ),
            Category::Animal => format!(
                "⚠️ ANIMAL INTRUSION!\n{ts}\n{} detected in security zone!\nLocation: Security Camera\nPriority: MEDIUM ALERT",
                title_case(&self.object_name),
            ),
            Category::Vehicle => format!(
                "🚙 VEHICLE DETECTED!\n{ts}\n{} spotted in monitored area!\nLocation: Security Camera\nPriority: LOW ALERT",
                title_case(&self.object_name),
            ),
        };

        AlertMessage {
            console,
            notification,
        }
    }
}

/// Rendered alert text in both verbosity forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertMessage {
    /// Short form for terminal output
    pub console: String,

    /// Long form for notification channels
    pub notification: String,
}

/// Emoji for the console alert header, keyed by priority rank.
fn priority_emoji(priority: u8) -> &'static str {
    match priority {
        3 => "🚨",
        2 => "⚠️",
        1 => "📢",
        _ => "🔔",
    }
}

/// Capitalizes each word, lowercasing the rest ("stray dog" -> "Stray Dog").
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap()
    }

    #[test]
    fn test_person_messages() {
        let alert = Alert::new(Category::Person, "person", fixed_time());
        let msg = alert.render();

        assert_eq!(
            msg.console,
            "🚨 SECURITY ALERT [2024-01-15 12:30:45]\nPERSON: person detected!"
        );
        assert_eq!(
            msg.notification,
            "🚨 SECURITY BREACH!\n2024-01-15 12:30:45\nPerson detected: person\n\
             Location: Security Camera\nPriority: HIGH ALERT"
        );
    }

    #[test]
    fn test_animal_messages_title_cased() {
        let alert = Alert::new(Category::Animal, "dog", fixed_time());
        let msg = alert.render();

        assert_eq!(
            msg.console,
            "⚠️ SECURITY ALERT [2024-01-15 12:30:45]\nANIMAL: dog detected!"
        );
        assert_eq!(
            msg.notification,
            "⚠️ ANIMAL INTRUSION!\n2024-01-15 12:30:45\nDog detected in security zone!\n\
             Location: Security Camera\nPriority: MEDIUM ALERT"
        );
    }

    #[test]
    fn test_vehicle_messages() {
        let alert = Alert::new(Category::Vehicle, "truck", fixed_time());
        let msg = alert.render();

        assert_eq!(
            msg.console,
            "📢 SECURITY ALERT [2024-01-15 12:30:45]\nVEHICLE: truck detected!"
        );
        assert_eq!(
            msg.notification,
            "🚙 VEHICLE DETECTED!\n2024-01-15 12:30:45\nTruck spotted in monitored area!\n\
             Location: Security Camera\nPriority: LOW ALERT"
        );
    }

    #[test]
    fn test_title_case_multi_word() {
        assert_eq!(title_case("sports ball"), "Sports Ball");
        assert_eq!(title_case("DOG"), "Dog");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_alert_ids_unique() {
        let a = Alert::new(Category::Person, "person", fixed_time());
        let b = Alert::new(Category::Person, "person", fixed_time());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_alert_id_serde_transparent() {
        let id = AlertId("abc-123".to_string());
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");
    }

    #[test]
    fn test_alert_serializes() {
        let alert = Alert::new(Category::Vehicle, "car", fixed_time());
        let json = serde_json::to_string(&alert).unwrap();
        assert!(json.contains("\"category\":\"vehicle\""));
        assert!(json.contains("\"object_name\":\"car\""));
    }
}
