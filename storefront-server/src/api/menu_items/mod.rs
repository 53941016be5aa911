//! Menu Item API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/menu-items", public_routes())
        .nest("/api/admin/menu-items", admin_routes())
}

fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_visible))
        .route("/category/{category_id}", get(handler::list_visible_by_category))
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_all).post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .route("/{id}/toggle-availability", post(handler::toggle_availability))
        .route("/{id}/toggle-visibility", post(handler::toggle_visibility))
}
