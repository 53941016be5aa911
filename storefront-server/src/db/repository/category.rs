//! Category Repository

use std::collections::HashSet;

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::Category;
use shared::{CategoryCreate, CategoryUpdate};

const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all categories ordered by sort_order
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY sort_order")
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Find category by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let category: Option<Category> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(category)
    }

    /// Find category by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM category WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let categories: Vec<Category> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    /// Create a new category
    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        // Check duplicate name
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                data.name
            )));
        }

        let category = Category::new(data.name, data.order.unwrap_or(0));

        let created: Option<Category> = self.base.db().create(TABLE).content(category).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    /// Update a category
    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<Category> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))?;

        // Check duplicate name if changing
        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                new_name
            )));
        }

        #[derive(Serialize)]
        struct CategoryUpdateDb {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            sort_order: Option<i32>,
        }

        let update_data = CategoryUpdateDb {
            name: data.name,
            sort_order: data.order,
        };

        let pure_id = strip_table_prefix(TABLE, id);
        let thing = make_thing(TABLE, pure_id);

        // Update using raw query to avoid deserialization issues with null fields
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", update_data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }

    /// Delete a category
    ///
    /// Menu items keep their (now dangling) category link; this is the
    /// documented behavior, not a cascade bug.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let existing = self.find_by_id(id).await?;
        if existing.is_none() {
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

    /// Rewrite sort_order from a full id permutation
    ///
    /// `ids` must contain every category id exactly once; the new
    /// sort_order of each row is its 0-based position in `ids`.
    pub async fn reorder(&self, ids: &[String]) -> RepoResult<()> {
        validate_reorder_ids(TABLE, ids, &self.find_all().await?, |c| &c.id)?;

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

/// Shared reorder-list validation: no duplicates, and the submitted ids are
/// exactly the existing collection.
pub(super) fn validate_reorder_ids<T>(
    table: &str,
    ids: &[String],
    existing: &[T],
    id_of: impl Fn(&T) -> &Option<surrealdb::sql::Thing>,
) -> RepoResult<()> {
    let mut seen: HashSet<String> = HashSet::with_capacity(ids.len());
    for id in ids {
        let normalized = make_thing(table, id).to_string();
        if !seen.insert(normalized) {
            return Err(RepoError::Validation(format!("Duplicate id in reorder list: {id}")));
        }
    }

    if existing.len() != ids.len() {
        return Err(RepoError::Validation(format!(
            "Reorder list must contain all {} entries (got {})",
            existing.len(),
            ids.len()
        )));
    }

    for row in existing {
        let row_id = id_of(row)
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_default();
        if !seen.contains(&row_id) {
            return Err(RepoError::Validation(format!(
                "Reorder list is missing id: {row_id}"
            )));
        }
    }

    Ok(())
}
