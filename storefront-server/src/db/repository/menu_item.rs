//! Menu Item Repository

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::MenuItem;
use shared::{MenuItemCreate, MenuItemUpdate};

const TABLE: &str = "menu_item";
const CATEGORY_TABLE: &str = "category";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items (admin view, hidden included)
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self.base.db().query("SELECT * FROM menu_item").await?.take(0)?;
        Ok(items)
    }

    /// Find the customer-facing listing: hidden items never leave the
    /// database layer
    pub async fn find_visible(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE is_hidden = false")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Customer-facing listing for one category
    pub async fn find_visible_by_category(&self, category_id: &str) -> RepoResult<Vec<MenuItem>> {
        let category = make_thing(CATEGORY_TABLE, category_id);
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE category = $category AND is_hidden = false")
            .bind(("category", category))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let item: Option<MenuItem> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(item)
    }

    /// Create a new menu item
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        let item = MenuItem {
            id: None,
            category: make_thing(CATEGORY_TABLE, &data.category_id),
            name: data.name,
            description: data.description,
            price: data.price,
            image_url: data.image_url,
            is_available: data.is_available.unwrap_or(true),
            is_hidden: data.is_hidden.unwrap_or(false),
        };

        let created: Option<MenuItem> = self.base.db().create(TABLE).content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Update a menu item
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))?;

        #[derive(Serialize)]
        struct MenuItemUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<Thing>,
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            price: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            image_url: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_available: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_hidden: Option<bool>,
        }

        let update_data = MenuItemUpdateDb {
            category: data
                .category_id
                .map(|id| make_thing(CATEGORY_TABLE, &id)),
            name: data.name,
            description: data.description,
            price: data.price,
            image_url: data.image_url,
            is_available: data.is_available,
            is_hidden: data.is_hidden,
        };

        let pure_id = strip_table_prefix(TABLE, id);
        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", update_data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Delete a menu item
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let thing = make_thing(TABLE, id);
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    /// Flip whether the item can be ordered
    pub async fn set_availability(&self, id: &str, is_available: bool) -> RepoResult<MenuItem> {
        self.update(
            id,
            MenuItemUpdate {
                is_available: Some(is_available),
                ..Default::default()
            },
        )
        .await
    }

    /// Flip whether the item appears in customer listings at all
    pub async fn set_hidden(&self, id: &str, is_hidden: bool) -> RepoResult<MenuItem> {
        self.update(
            id,
            MenuItemUpdate {
                is_hidden: Some(is_hidden),
                ..Default::default()
            },
        )
        .await
    }
}
