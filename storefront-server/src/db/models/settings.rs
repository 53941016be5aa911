//! Settings Model

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use super::serde_thing;

/// Restaurant settings row (singleton, stored as `settings:main`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, with = "serde_thing::option")]
    pub id: Option<Thing>,
    #[serde(default)]
    pub whatsapp_number: String,
    pub restaurant_name: String,
    pub currency: String,
    pub logo_url: Option<String>,
    pub footer_text: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub address_link: Option<String>,
}
