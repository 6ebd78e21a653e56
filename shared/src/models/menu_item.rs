//! Menu Item Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu item entity (bilingual, en/th)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name_en: String,
    pub name_th: String,
    pub description_en: String,
    pub description_th: String,
    /// Price in currency unit
    pub price: f64,
    pub category: String,
    pub icon: String,
    pub is_vegetarian: bool,
    pub is_spicy: bool,
    pub is_popular: bool,
    /// Cleared instead of deleting the row; unavailable items stay
    /// referenced by past order items.
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name_en: Option<String>,
    pub name_th: Option<String>,
    pub description_en: Option<String>,
    pub description_th: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub is_spicy: Option<bool>,
    pub is_popular: Option<bool>,
}

impl MenuItemCreate {
    /// Required fields present and non-empty, price present and non-zero
    pub fn is_valid(&self) -> bool {
        let has = |s: &Option<String>| s.as_deref().is_some_and(|v| !v.is_empty());
        has(&self.name_en)
            && has(&self.name_th)
            && has(&self.category)
            && self.price.is_some_and(|p| p != 0.0)
    }
}

/// Update menu item payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name_en: Option<String>,
    pub name_th: Option<String>,
    pub description_en: Option<String>,
    pub description_th: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub is_spicy: Option<bool>,
    pub is_popular: Option<bool>,
    pub is_available: Option<bool>,
}

impl MenuItemUpdate {
    /// At least one field present
    pub fn has_changes(&self) -> bool {
        self.name_en.is_some()
            || self.name_th.is_some()
            || self.description_en.is_some()
            || self.description_th.is_some()
            || self.price.is_some()
            || self.category.is_some()
            || self.icon.is_some()
            || self.is_vegetarian.is_some()
            || self.is_spicy.is_some()
            || self.is_popular.is_some()
            || self.is_available.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> MenuItemCreate {
        MenuItemCreate {
            name_en: Some("Pad Thai".to_string()),
            name_th: Some("ผัดไทย".to_string()),
            description_en: None,
            description_th: None,
            price: Some(120.0),
            category: Some("mains".to_string()),
            icon: None,
            is_vegetarian: None,
            is_spicy: None,
            is_popular: None,
        }
    }

    #[test]
    fn test_create_valid() {
        assert!(valid_create().is_valid());
    }

    #[test]
    fn test_create_rejects_missing_name() {
        let mut create = valid_create();
        create.name_th = None;
        assert!(!create.is_valid());

        let mut create = valid_create();
        create.name_en = Some(String::new());
        assert!(!create.is_valid());
    }

    #[test]
    fn test_create_rejects_zero_price() {
        let mut create = valid_create();
        create.price = Some(0.0);
        assert!(!create.is_valid());
        create.price = None;
        assert!(!create.is_valid());
    }

    #[test]
    fn test_update_has_changes() {
        let update = MenuItemUpdate::default();
        assert!(!update.has_changes());

        let update = MenuItemUpdate {
            price: Some(99.0),
            ..Default::default()
        };
        assert!(update.has_changes());
    }
}
