//! Banner API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::BannerRepository;
use crate::utils::validation::{MAX_URL_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::Banner as ApiBanner;
use shared::{BannerCreate, BannerUpdate, ReorderBannersRequest, SuccessResponse};

/// GET /api/banners - 顾客端轮播图 (仅启用项，按显示顺序)
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<ApiBanner>>> {
    let repo = BannerRepository::new(state.get_db());
    let banners = repo.find_active().await?;
    Ok(Json(banners.into_iter().map(Into::into).collect()))
}

/// GET /api/admin/banners - 后台轮播图列表 (含停用项)
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<ApiBanner>>> {
    let repo = BannerRepository::new(state.get_db());
    let banners = repo.find_all().await?;
    Ok(Json(banners.into_iter().map(Into::into).collect()))
}

/// POST /api/admin/banners - 创建轮播图
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BannerCreate>,
) -> AppResult<Json<ApiBanner>> {
    validate_required_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;

    let repo = BannerRepository::new(state.get_db());
    let banner = repo.create(payload).await?;
    Ok(Json(banner.into()))
}

/// PUT /api/admin/banners/:id - 更新轮播图
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BannerUpdate>,
) -> AppResult<Json<ApiBanner>> {
    validate_optional_text(&payload.image_url, "imageUrl", MAX_URL_LEN)?;

    let repo = BannerRepository::new(state.get_db());
    let banner = repo.update(&id, payload).await?;
    Ok(Json(banner.into()))
}

/// DELETE /api/admin/banners/:id - 删除轮播图
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let repo = BannerRepository::new(state.get_db());
    repo.delete(&id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/admin/banners/:id/toggle-active - 切换启用状态
pub async fn toggle_active(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiBanner>> {
    let repo = BannerRepository::new(state.get_db());
    let current = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Banner {} not found", id)))?;

    let banner = repo.set_active(&id, !current.is_active).await?;
    Ok(Json(banner.into()))
}

/// POST /api/admin/banners/reorder - 全量重排，同分类接口的契约
pub async fn reorder(
    State(state): State<ServerState>,
    Json(payload): Json<ReorderBannersRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let repo = BannerRepository::new(state.get_db());
    repo.reorder(&payload.banner_ids).await?;
    Ok(Json(SuccessResponse::ok()))
}
