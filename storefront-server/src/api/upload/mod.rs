//! Upload API 模块

mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/upload", post(handler::upload))
        // 默认 2MB 的 body 限制容不下 5MB 的图片
        .layer(DefaultBodyLimit::max(handler::MAX_FILE_SIZE + 1024 * 1024))
        .route("/uploads/{filename}", get(handler::serve))
}
