//! Settings API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::SettingsRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, MAX_URL_LEN, validate_optional_text,
};
use crate::utils::AppResult;
use shared::models::Settings as ApiSettings;
use shared::SettingsUpdate;

/// GET /api/settings - 餐厅设置
///
/// 尚未保存过设置时返回固定默认值，而不是 404
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<ApiSettings>> {
    let repo = SettingsRepository::new(state.get_db());
    let settings = match repo.get().await? {
        Some(s) => s.into(),
        None => ApiSettings::fallback(),
    };
    Ok(Json(settings))
}

/// PUT /api/admin/settings - 合并更新单例设置 (首次写入时创建)
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<SettingsUpdate>,
) -> AppResult<Json<ApiSettings>> {
    validate_optional_text(&payload.restaurant_name, "restaurantName", MAX_NAME_LEN)?;
    validate_optional_text(&payload.whatsapp_number, "whatsappNumber", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.currency, "currency", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.logo_url, "logoUrl", MAX_URL_LEN)?;
    validate_optional_text(&payload.footer_text, "footerText", MAX_TEXT_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_TEXT_LEN)?;
    validate_optional_text(&payload.address_link, "addressLink", MAX_URL_LEN)?;

    let repo = SettingsRepository::new(state.get_db());
    let settings = repo.update(payload).await?;
    Ok(Json(settings.into()))
}
