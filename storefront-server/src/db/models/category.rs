//! Category Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

pub type CategoryId = Thing;

/// Category row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<CategoryId>,
    pub name: String,
    /// Display position, contiguous from 0 within the collection
    #[serde(default)]
    pub sort_order: i32,
}

impl Category {
    pub fn new(name: String, sort_order: i32) -> Self {
        Self {
            id: None,
            name,
            sort_order,
        }
    }
}
