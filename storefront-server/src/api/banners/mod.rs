//! Banner API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/banners", public_routes())
        .nest("/api/admin/banners", admin_routes())
}

fn public_routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list_active))
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_all).post(handler::create))
        // Literal routes must come before /{id} to avoid path conflicts
        .route("/reorder", post(handler::reorder))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .route("/{id}/toggle-active", post(handler::toggle_active))
}
