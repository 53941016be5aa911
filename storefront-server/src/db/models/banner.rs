//! Banner Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

pub type BannerId = Thing;

/// Promotional banner row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<BannerId>,
    pub image_url: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
