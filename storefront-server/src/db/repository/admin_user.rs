//! Admin User Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::AdminUser;

const TABLE: &str = "admin_user";

#[derive(Clone)]
pub struct AdminUserRepository {
    base: BaseRepository,
}

impl AdminUserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find account by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<AdminUser>> {
        let username_owned = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM admin_user WHERE username = $username LIMIT 1")
            .bind(("username", username_owned))
            .await?;
        let users: Vec<AdminUser> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create an account with an argon2-hashed password
    pub async fn create(&self, username: &str, password: &str) -> RepoResult<AdminUser> {
        if self.find_by_username(username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "User '{}' already exists",
                username
            )));
        }

        let hash_pass = AdminUser::hash_password(password)
            .map_err(|e| RepoError::Database(format!("Password hashing failed: {e}")))?;

        let user = AdminUser {
            id: None,
            username: username.to_string(),
            hash_pass,
            created_at: Some(chrono::Utc::now().timestamp()),
        };

        let created: Option<AdminUser> = self.base.db().create(TABLE).content(user).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create admin user".to_string()))
    }

    /// Seed the bootstrap admin account on first start
    pub async fn ensure_admin(&self, username: &str, password: &str) -> RepoResult<AdminUser> {
        if let Some(existing) = self.find_by_username(username).await? {
            return Ok(existing);
        }

        let user = self.create(username, password).await?;
        tracing::info!(username = %username, "Seeded admin account");
        Ok(user)
    }
}
