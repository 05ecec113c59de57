//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Reservations hold copies of these, so later catalog edits never reach
/// already submitted orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Non-negative unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl MenuItem {
    pub fn new(id: i64, name: impl Into<String>, price: impl Into<Decimal>) -> Self {
        Self {
            id,
            name: name.into(),
            price: price.into(),
        }
    }

    /// Display label, e.g. `Burger - $10`
    pub fn label(&self) -> String {
        format!("{} - ${}", self.name, self.price.normalize())
    }
}
