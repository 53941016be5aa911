//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::CategoryRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::AppResult;
use shared::models::Category as ApiCategory;
use shared::{CategoryCreate, CategoryUpdate, ReorderCategoriesRequest, SuccessResponse};

/// GET /api/categories - 获取所有分类 (按显示顺序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ApiCategory>>> {
    let repo = CategoryRepository::new(state.get_db());
    let categories = repo.find_all().await?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// POST /api/admin/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<ApiCategory>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let repo = CategoryRepository::new(state.get_db());
    let category = repo.create(payload).await?;
    Ok(Json(category.into()))
}

/// PUT /api/admin/categories/:id - 更新分类
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<ApiCategory>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }

    let repo = CategoryRepository::new(state.get_db());
    let category = repo.update(&id, payload).await?;
    Ok(Json(category.into()))
}

/// DELETE /api/admin/categories/:id - 删除分类
///
/// 不级联删除该分类下的菜品 (菜品保留悬挂的 categoryId)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let repo = CategoryRepository::new(state.get_db());
    repo.delete(&id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/admin/categories/reorder - 全量重排
///
/// 请求体携带全部分类 id 的目标顺序；`order` 重写为 id 在序列中的
/// 0 基位置。重复或缺失的 id 会被拒绝。
pub async fn reorder(
    State(state): State<ServerState>,
    Json(payload): Json<ReorderCategoriesRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let repo = CategoryRepository::new(state.get_db());
    repo.reorder(&payload.category_ids).await?;
    Ok(Json(SuccessResponse::ok()))
}
