//! Static menu catalog

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::MenuItem;
use std::collections::HashSet;

/// Read-only menu for the session
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Build a catalog, rejecting duplicate ids and negative prices
    pub fn new(items: Vec<MenuItem>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(AppError::validation(format!(
                    "Duplicate menu item id {}",
                    item.id
                ))
                .with_detail("menu_item_id", item.id));
            }
            if item.price < Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "Menu item '{}' has a negative price",
                    item.name
                ))
                .with_detail("menu_item_id", item.id));
            }
        }
        Ok(Self { items })
    }

    /// The house menu
    pub fn seeded() -> Self {
        Self {
            items: vec![
                MenuItem::new(1, "Burger", 10),
                MenuItem::new(2, "Pizza", 12),
                MenuItem::new(3, "Pasta", 8),
                MenuItem::new(4, "Salad", 5),
                MenuItem::new(5, "Soda", 2),
            ],
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}
