//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::{ClientConfig, ClientError, ClientResult};
use shared::models::{
    Banner, BannerCreate, BannerUpdate, Category, CategoryCreate, CategoryUpdate, MenuItem,
    MenuItemCreate, MenuItemUpdate, Settings, SettingsUpdate,
};
use shared::{
    ErrorResponse, LoginRequest, LoginResponse, ReorderBannersRequest, ReorderCategoriesRequest,
    SuccessResponse, UserInfo,
};

/// HTTP client for making network requests to the storefront server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.delete(self.url(path));
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Error bodies carry `{"error": "..."}`; fall back to the raw text
    /// when the body is not JSON.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
                    Err(ClientError::Validation(message))
                }
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/api/auth/login", &request).await
    }

    /// Logout (server side is stateless; callers should also drop the token)
    pub async fn logout(&self) -> ClientResult<SuccessResponse> {
        self.post_empty("/api/auth/logout").await
    }

    /// Fetch the currently authenticated user
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.get("/api/auth/me").await
    }

    // ========== Customer API ==========

    /// Categories in display order
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.get("/api/categories").await
    }

    /// Customer menu listing (hidden items already filtered out)
    pub async fn menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("/api/menu-items").await
    }

    /// Customer menu listing for one category
    pub async fn menu_items_by_category(&self, category_id: &str) -> ClientResult<Vec<MenuItem>> {
        self.get(&format!("/api/menu-items/category/{}", encode(category_id)))
            .await
    }

    /// Active banners in display order
    pub async fn banners(&self) -> ClientResult<Vec<Banner>> {
        self.get("/api/banners").await
    }

    /// Restaurant settings (server substitutes defaults when unset)
    pub async fn settings(&self) -> ClientResult<Settings> {
        self.get("/api/settings").await
    }

    // ========== Admin API: categories ==========

    pub async fn admin_categories(&self) -> ClientResult<Vec<Category>> {
        self.get("/api/admin/categories").await
    }

    pub async fn create_category(&self, data: &CategoryCreate) -> ClientResult<Category> {
        self.post("/api/admin/categories", data).await
    }

    pub async fn update_category(
        &self,
        id: &str,
        data: &CategoryUpdate,
    ) -> ClientResult<Category> {
        self.put(&format!("/api/admin/categories/{}", encode(id)), data)
            .await
    }

    pub async fn delete_category(&self, id: &str) -> ClientResult<SuccessResponse> {
        self.delete(&format!("/api/admin/categories/{}", encode(id)))
            .await
    }

    /// Submit the full category id list in the desired order
    pub async fn reorder_categories(&self, category_ids: Vec<String>) -> ClientResult<SuccessResponse> {
        let request = ReorderCategoriesRequest { category_ids };
        self.post("/api/admin/categories/reorder", &request).await
    }

    // ========== Admin API: menu items ==========

    pub async fn admin_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("/api/admin/menu-items").await
    }

    pub async fn create_menu_item(&self, data: &MenuItemCreate) -> ClientResult<MenuItem> {
        self.post("/api/admin/menu-items", data).await
    }

    pub async fn update_menu_item(
        &self,
        id: &str,
        data: &MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        self.put(&format!("/api/admin/menu-items/{}", encode(id)), data)
            .await
    }

    pub async fn delete_menu_item(&self, id: &str) -> ClientResult<SuccessResponse> {
        self.delete(&format!("/api/admin/menu-items/{}", encode(id)))
            .await
    }

    pub async fn toggle_menu_item_availability(&self, id: &str) -> ClientResult<MenuItem> {
        self.post_empty(&format!(
            "/api/admin/menu-items/{}/toggle-availability",
            encode(id)
        ))
        .await
    }

    pub async fn toggle_menu_item_visibility(&self, id: &str) -> ClientResult<MenuItem> {
        self.post_empty(&format!(
            "/api/admin/menu-items/{}/toggle-visibility",
            encode(id)
        ))
        .await
    }

    // ========== Admin API: banners ==========

    pub async fn admin_banners(&self) -> ClientResult<Vec<Banner>> {
        self.get("/api/admin/banners").await
    }

    pub async fn create_banner(&self, data: &BannerCreate) -> ClientResult<Banner> {
        self.post("/api/admin/banners", data).await
    }

    pub async fn update_banner(&self, id: &str, data: &BannerUpdate) -> ClientResult<Banner> {
        self.put(&format!("/api/admin/banners/{}", encode(id)), data)
            .await
    }

    pub async fn delete_banner(&self, id: &str) -> ClientResult<SuccessResponse> {
        self.delete(&format!("/api/admin/banners/{}", encode(id)))
            .await
    }

    pub async fn toggle_banner_active(&self, id: &str) -> ClientResult<Banner> {
        self.post_empty(&format!("/api/admin/banners/{}/toggle-active", encode(id)))
            .await
    }

    /// Submit the full banner id list in the desired order
    pub async fn reorder_banners(&self, banner_ids: Vec<String>) -> ClientResult<SuccessResponse> {
        let request = ReorderBannersRequest { banner_ids };
        self.post("/api/admin/banners/reorder", &request).await
    }

    // ========== Admin API: settings ==========

    pub async fn update_settings(&self, data: &SettingsUpdate) -> ClientResult<Settings> {
        self.put("/api/admin/settings", data).await
    }
}
