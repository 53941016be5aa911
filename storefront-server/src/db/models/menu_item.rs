//! Menu Item Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

pub type MenuItemId = Thing;

/// Menu item row
///
/// `category` is a record link; it is intentionally allowed to dangle after
/// the category is deleted (items keep their assignment until re-edited).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<MenuItemId>,
    #[serde(with = "serde_thing")]
    pub category: Thing,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Minor currency units (cents), never floating point
    pub price: i64,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_hidden: bool,
}

fn default_true() -> bool {
    true
}
