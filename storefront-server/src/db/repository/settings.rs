//! Settings Repository
//!
//! The settings table holds at most one row, keyed `settings:main`.
//! Reads return `None` when nothing has been saved yet (the API layer
//! substitutes defaults); the first update creates the row.

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, make_thing};
use crate::db::models::Settings;
use shared::SettingsUpdate;
use shared::models::settings::{DEFAULT_CURRENCY, DEFAULT_RESTAURANT_NAME};

const TABLE: &str = "settings";
const SINGLETON_ID: &str = "main";

#[derive(Clone)]
pub struct SettingsRepository {
    base: BaseRepository,
}

impl SettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Fetch the singleton row, if one has been saved
    pub async fn get(&self) -> RepoResult<Option<Settings>> {
        let settings: Option<Settings> = self.base.db().select((TABLE, SINGLETON_ID)).await?;
        Ok(settings)
    }

    /// Merge a partial update into the singleton, creating it on first write
    pub async fn update(&self, data: SettingsUpdate) -> RepoResult<Settings> {
        match self.get().await? {
            Some(_) => self.merge_existing(data).await,
            None => self.create_from(data).await,
        }
    }

    async fn merge_existing(&self, data: SettingsUpdate) -> RepoResult<Settings> {
        #[derive(Serialize)]
        struct SettingsUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            whatsapp_number: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            restaurant_name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            logo_url: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            footer_text: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            phone: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            address: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            address_link: Option<String>,
        }

        let update_data = SettingsUpdateDb {
            whatsapp_number: data.whatsapp_number,
            restaurant_name: data.restaurant_name,
            currency: data.currency,
            logo_url: data.logo_url,
            footer_text: data.footer_text,
            phone: data.phone,
            email: data.email,
            address: data.address,
            address_link: data.address_link,
        };

        let thing = make_thing(TABLE, SINGLETON_ID);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", update_data))
            .await?;

        self.get()
            .await?
            .ok_or_else(|| RepoError::Database("Settings row vanished during update".to_string()))
    }

    async fn create_from(&self, data: SettingsUpdate) -> RepoResult<Settings> {
        let settings = Settings {
            id: None,
            whatsapp_number: data.whatsapp_number.unwrap_or_default(),
            restaurant_name: data
                .restaurant_name
                .unwrap_or_else(|| DEFAULT_RESTAURANT_NAME.to_string()),
            currency: data.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            logo_url: data.logo_url,
            footer_text: data.footer_text,
            phone: data.phone,
            email: data.email,
            address: data.address,
            address_link: data.address_link,
        };

        let created: Option<Settings> = self
            .base
            .db()
            .create((TABLE, SINGLETON_ID))
            .content(settings)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create settings".to_string()))
    }
}
