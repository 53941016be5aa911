//! Cart Item Model

use serde::{Deserialize, Serialize};

use super::MenuItem;

/// One cart line (client-only, never persisted server-side)
///
/// Holds a snapshot of the menu item at add time; later admin edits do not
/// rewrite lines already in a customer's cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub menu_item: MenuItem,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CartItem {
    /// Line total in minor currency units
    pub fn line_total(&self) -> i64 {
        self.menu_item.price * self.quantity as i64
    }
}
