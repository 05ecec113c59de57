//! Reservation search
//!
//! Name matches case-insensitively, phone matches as a case-sensitive
//! substring; either is enough. An empty query matches everything.

use shared::models::Reservation;

/// Current search query with its lowercase form cached for name matching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let lowered = raw.to_lowercase();
        Self { raw, lowered }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn matches(&self, reservation: &Reservation) -> bool {
        reservation.name.to_lowercase().contains(&self.lowered)
            || reservation.phone.contains(&self.raw)
    }
}

/// Lazily filter `reservations` by `query`, preserving order
pub fn filter_reservations<'a>(
    reservations: &'a [Reservation],
    query: &'a SearchQuery,
) -> impl Iterator<Item = &'a Reservation> + Clone + 'a {
    reservations.iter().filter(move |r| query.matches(r))
}
