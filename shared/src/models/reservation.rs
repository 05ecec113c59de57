//! Reservation Model

use super::MenuItem;
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable reservation identifier, assigned by the ledger and never reused
/// within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub u64);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reservation status
///
/// `Active -> CheckedOut` is the only transition; it never reverts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Active,
    CheckedOut,
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    /// Guest name (unique within the ledger, case-sensitive)
    pub name: String,
    /// Contact phone, freeform
    pub phone: String,
    pub guest_count: u32,
    /// Check-in time (captured at creation)
    pub check_in_time: Timestamp,
    /// Check-out time, set exactly once
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<Timestamp>,
    pub status: ReservationStatus,
    /// Menu items selected before submission, copied by value
    #[serde(default)]
    pub ordered_items: Vec<MenuItem>,
}

impl Reservation {
    pub fn is_checked_out(&self) -> bool {
        self.status == ReservationStatus::CheckedOut
    }

    /// Active reservations hold seats
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reservation {
        Reservation {
            id: ReservationId(7),
            name: "Alice".to_string(),
            phone: "111-1111".to_string(),
            guest_count: 4,
            check_in_time: 1_700_000_000_000,
            check_out_time: None,
            status: ReservationStatus::Active,
            ordered_items: vec![MenuItem::new(1, "Burger", 10)],
        }
    }

    #[test]
    fn test_status_helpers() {
        let mut r = sample();
        assert!(r.is_active());
        assert!(!r.is_checked_out());

        r.status = ReservationStatus::CheckedOut;
        assert!(!r.is_active());
        assert!(r.is_checked_out());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ReservationId(42).to_string(), "#42");
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "ACTIVE");
        assert_eq!(json["guest_count"], 4);
        assert!(json.get("check_out_time").is_none());
        assert_eq!(json["ordered_items"][0]["name"], "Burger");
    }

    #[test]
    fn test_deserialize_without_items() {
        let json = r#"{
            "id": 3,
            "name": "Bob",
            "phone": "222",
            "guest_count": 2,
            "check_in_time": 1,
            "check_out_time": 5,
            "status": "CHECKED_OUT"
        }"#;
        let r: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, ReservationId(3));
        assert_eq!(r.check_out_time, Some(5));
        assert!(r.is_checked_out());
        assert!(r.ordered_items.is_empty());
    }
}
