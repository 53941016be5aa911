use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db;
use crate::db::repository::AdminUserRepository;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 每个请求克隆一份；`Surreal<Db>` 和 `Arc<JwtService>` 都是浅拷贝。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | db | 嵌入式数据库 (SurrealDB) |
/// | jwt_service | JWT 认证服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库
    pub db: Surreal<Db>,
    /// JWT 认证服务
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 1. 确保工作目录结构存在
    /// 2. 打开数据库 (work_dir/database)
    /// 3. 写入初始管理员账号 (如不存在)
    ///
    /// # Panics
    ///
    /// 目录创建或数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db = db::connect(&config.database_dir())
            .await
            .expect("Failed to initialize database");

        Self::with_db(config.clone(), db).await
    }

    /// 基于已打开的数据库构造状态 (测试用内存数据库走这里)
    pub async fn with_db(config: Config, db: Surreal<Db>) -> Self {
        AdminUserRepository::new(db.clone())
            .ensure_admin(&config.admin_username, &config.admin_password)
            .await
            .expect("Failed to seed admin account");

        if config.is_production() && config.admin_password == "admin123" {
            tracing::warn!("ADMIN_PASSWORD is still the default in production");
        }

        Self {
            config,
            db,
            jwt_service: Arc::new(JwtService::default()),
        }
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// 上传图片目录
    pub fn images_dir(&self) -> PathBuf {
        self.config.images_dir()
    }
}
