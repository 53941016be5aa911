//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables.

pub mod admin_user;
pub mod banner;
pub mod category;
pub mod menu_item;
pub mod settings;

// Re-exports
pub use admin_user::AdminUserRepository;
pub use banner::BannerRepository;
pub use category::CategoryRepository;
pub use menu_item::MenuItemRepository;
pub use settings::SettingsRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// ID convention: the API exposes ids as "table:key" strings. Incoming ids
// may or may not carry the table prefix; these helpers normalize both.

/// Extract the bare key if `id` carries this table's prefix
/// (e.g. "category:xxx" -> "xxx")
pub fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    match id.split_once(':') {
        Some((tb, key)) if tb == table => key,
        _ => id,
    }
}

/// Build a Thing for `table` from a bare or prefixed id string
pub fn make_thing(table: &str, id: &str) -> Thing {
    Thing::from((table.to_string(), strip_table_prefix(table, id).to_string()))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_table_prefix() {
        assert_eq!(strip_table_prefix("category", "category:abc"), "abc");
        assert_eq!(strip_table_prefix("category", "abc"), "abc");
        // Foreign prefix is left alone rather than mangled
        assert_eq!(strip_table_prefix("category", "banner:abc"), "banner:abc");
    }

    #[test]
    fn test_make_thing() {
        assert_eq!(make_thing("category", "abc").to_string(), "category:abc");
        assert_eq!(
            make_thing("category", "category:abc").to_string(),
            "category:abc"
        );
    }
}
