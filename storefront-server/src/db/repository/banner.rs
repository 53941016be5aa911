//! Banner Repository

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::category::validate_reorder_ids;
use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::Banner;
use shared::{BannerCreate, BannerUpdate};

const TABLE: &str = "banner";

#[derive(Clone)]
pub struct BannerRepository {
    base: BaseRepository,
}

impl BannerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all banners ordered by sort_order (admin view)
    pub async fn find_all(&self) -> RepoResult<Vec<Banner>> {
        let banners: Vec<Banner> = self
            .base
            .db()
            .query("SELECT * FROM banner ORDER BY sort_order")
            .await?
            .take(0)?;
        Ok(banners)
    }

    /// Find active banners ordered by sort_order (customer carousel)
    pub async fn find_active(&self) -> RepoResult<Vec<Banner>> {
        let banners: Vec<Banner> = self
            .base
            .db()
            .query("SELECT * FROM banner WHERE is_active = true ORDER BY sort_order")
            .await?
            .take(0)?;
        Ok(banners)
    }

    /// Find banner by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Banner>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let banner: Option<Banner> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(banner)
    }

    /// Create a new banner
    pub async fn create(&self, data: BannerCreate) -> RepoResult<Banner> {
        let banner = Banner {
            id: None,
            image_url: data.image_url,
            sort_order: data.order.unwrap_or(0),
            is_active: data.is_active.unwrap_or(true),
        };

        let created: Option<Banner> = self.base.db().create(TABLE).content(banner).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create banner".to_string()))
    }

    /// Update a banner
    pub async fn update(&self, id: &str, data: BannerUpdate) -> RepoResult<Banner> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Banner {} not found", id)))?;

        #[derive(Serialize)]
        struct BannerUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            image_url: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            sort_order: Option<i32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_active: Option<bool>,
        }

        let update_data = BannerUpdateDb {
            image_url: data.image_url,
            sort_order: data.order,
            is_active: data.is_active,
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
            .ok_or_else(|| RepoError::NotFound(format!("Banner {} not found", id)))
    }

    /// Delete a banner
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

    /// Flip carousel visibility
    pub async fn set_active(&self, id: &str, is_active: bool) -> RepoResult<Banner> {
        self.update(
            id,
            BannerUpdate {
                is_active: Some(is_active),
                ..Default::default()
            },
        )
        .await
    }

    /// Rewrite sort_order from a full id permutation, same contract as
    /// [`super::CategoryRepository::reorder`]
    pub async fn reorder(&self, ids: &[String]) -> RepoResult<()> {
        validate_reorder_ids(TABLE, ids, &self.find_all().await?, |b| &b.id)?;

        for (position, id) in ids.iter().enumerate() {
            let thing = make_thing(TABLE, id);
            self.base
                .db()
                .query("UPDATE $thing SET sort_order = $position")
                .bind(("thing", thing))
                .bind(("position", position as i32))
                .await?;
        }

        Ok(())
    }
}
