//! Settings Model

use serde::{Deserialize, Serialize};

/// Fallback restaurant name when no settings row has been saved yet
pub const DEFAULT_RESTAURANT_NAME: &str = "Mini's & Twennies";

/// Fallback currency symbol
pub const DEFAULT_CURRENCY: &str = "$";

/// Restaurant settings (singleton)
///
/// At most one row exists. The read path substitutes [`Settings::fallback`]
/// when nothing has been persisted, so callers never see an absent record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: Option<String>,
    /// E.164-ish phone number with country code, e.g. "+1234567890"
    #[serde(default)]
    pub whatsapp_number: String,
    pub restaurant_name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub logo_url: Option<String>,
    pub footer_text: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub address_link: Option<String>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Settings {
    /// The hardcoded defaults served when no settings row exists
    pub fn fallback() -> Self {
        Self {
            id: None,
            whatsapp_number: String::new(),
            restaurant_name: DEFAULT_RESTAURANT_NAME.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            logo_url: None,
            footer_text: None,
            phone: None,
            email: None,
            address: None,
            address_link: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Partial settings update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_link: Option<String>,
}
