//! Menu Item API Handlers
//!
//! Customer routes only ever see the visible subset; `is_hidden` filtering
//! happens in the repository query, not ad hoc in the UI.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::MenuItemRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_TEXT_LEN, MAX_URL_LEN, validate_optional_text, validate_price,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::MenuItem as ApiMenuItem;
use shared::{MenuItemCreate, MenuItemUpdate, SuccessResponse};

/// GET /api/menu-items - 顾客端菜品列表 (隐藏项已过滤)
pub async fn list_visible(State(state): State<ServerState>) -> AppResult<Json<Vec<ApiMenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_visible().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// GET /api/menu-items/category/:category_id - 按分类的顾客端列表
pub async fn list_visible_by_category(
    State(state): State<ServerState>,
    Path(category_id): Path<String>,
) -> AppResult<Json<Vec<ApiMenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_visible_by_category(&category_id).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// GET /api/admin/menu-items - 后台菜品列表 (含隐藏项)
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<ApiMenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_all().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

fn validate_create(payload: &MenuItemCreate) -> AppResult<()> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.category_id, "categoryId", MAX_NAME_LEN)?;
    if payload.description.len() > MAX_TEXT_LEN {
        return Err(AppError::validation("description is too long"));
    }
    validate_optional_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;
    validate_price(payload.price)
}

/// POST /api/admin/menu-items - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<ApiMenuItem>> {
    validate_create(&payload)?;

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.create(payload).await?;
    Ok(Json(item.into()))
}

/// PUT /api/admin/menu-items/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<ApiMenuItem>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_TEXT_LEN)?;
    validate_optional_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;
    if let Some(price) = payload.price {
        validate_price(price)?;
    }

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.update(&id, payload).await?;
    Ok(Json(item.into()))
}

/// DELETE /api/admin/menu-items/:id - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let repo = MenuItemRepository::new(state.get_db());
    repo.delete(&id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/admin/menu-items/:id/toggle-availability - 切换可点状态
pub async fn toggle_availability(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiMenuItem>> {
    let repo = MenuItemRepository::new(state.get_db());
    let current = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;

    let item = repo.set_availability(&id, !current.is_available).await?;
    Ok(Json(item.into()))
}

/// POST /api/admin/menu-items/:id/toggle-visibility - 切换隐藏状态
pub async fn toggle_visibility(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiMenuItem>> {
    let repo = MenuItemRepository::new(state.get_db());
    let current = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;

    let item = repo.set_hidden(&id, !current.is_hidden).await?;
    Ok(Json(item.into()))
}
