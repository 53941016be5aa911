//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// `price` is in integer minor currency units (cents). Division to major
/// units only ever happens at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Option<String>,
    /// Owning category; may dangle after that category is deleted
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    pub image_url: Option<String>,
    /// Can currently be ordered (shown greyed-out when false)
    #[serde(default = "default_true")]
    pub is_available: bool,
    /// Excluded from the customer-facing listing regardless of availability
    #[serde(default)]
    pub is_hidden: bool,
}

fn default_true() -> bool {
    true
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub category_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: i64,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
    pub is_hidden: Option<bool>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}
