//! Request/response DTOs shared by the API and its clients

use serde::{Deserialize, Serialize};

// ========== Auth ==========

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of the authenticated admin user (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
}

/// Login response: bearer token plus the user it identifies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

// ========== Reorder ==========

/// Full-list category reorder request
///
/// Carries every category id in the desired display order; the server
/// rewrites `order` as the 0-based position in this sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderCategoriesRequest {
    pub category_ids: Vec<String>,
}

/// Full-list banner reorder request, same contract as categories
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderBannersRequest {
    pub banner_ids: Vec<String>,
}

// ========== Envelopes ==========

/// `{"success": true}` acknowledgement used by mutation endpoints that
/// return no entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `{"error": "..."}` body carried by every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
