//! Router-level integration tests against an in-memory database.
//!
//! Each test builds the full production router (auth middleware included)
//! and drives it with `tower::ServiceExt::oneshot`, so the wire shapes
//! asserted here are exactly what a browser would see.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tower::ServiceExt;

use shared::{Banner, Category, LoginResponse, MenuItem, Settings, UserInfo};
use storefront_server::{Config, ServerState, build_router};

async fn test_app() -> Router {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    let db = storefront_server::db::connect_memory().await.unwrap();
    let state = ServerState::with_db(config, db).await;
    build_router(state)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn request(method: &str, path: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn get_json<T: DeserializeOwned>(app: &Router, path: &str) -> T {
    let (status, value) = send(app, request("GET", path, None, None)).await;
    assert_eq!(status, StatusCode::OK, "GET {path} failed: {value}");
    serde_json::from_value(value).unwrap()
}

async fn login(app: &Router) -> String {
    let body = json!({"username": "admin", "password": "admin123"});
    let (status, value) = send(app, request("POST", "/api/auth/login", Some(body), None)).await;
    assert_eq!(status, StatusCode::OK, "login failed: {value}");
    let response: LoginResponse = serde_json::from_value(value).unwrap();
    response.token
}

async fn create_category(app: &Router, token: &str, name: &str, order: i32) -> Category {
    let body = json!({"name": name, "order": order});
    let (status, value) = send(
        app,
        request("POST", "/api/admin/categories", Some(body), Some(token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create category failed: {value}");
    serde_json::from_value(value).unwrap()
}

async fn create_menu_item(app: &Router, token: &str, body: Value) -> MenuItem {
    let (status, value) = send(
        app,
        request("POST", "/api/admin/menu-items", Some(body), Some(token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create menu item failed: {value}");
    serde_json::from_value(value).unwrap()
}

async fn create_banner(app: &Router, token: &str, body: Value) -> Banner {
    let (status, value) = send(
        app,
        request("POST", "/api/admin/banners", Some(body), Some(token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create banner failed: {value}");
    serde_json::from_value(value).unwrap()
}

// ── Auth ────────────────────────────────────────────────────────────

#[tokio::test]
async fn admin_routes_reject_anonymous_and_bad_tokens() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/admin/categories",
            Some(json!({"name": "X"})),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/admin/categories",
            Some(json!({"name": "X"})),
            Some("not-a-jwt"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_bad_credentials_with_unified_message() {
    let app = test_app().await;

    let body = json!({"username": "admin", "password": "wrong"});
    let (status, value) = send(&app, request("POST", "/api/auth/login", Some(body), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], "Invalid username or password");

    // Unknown username yields the same message, so usernames cannot be probed
    let body = json!({"username": "nobody", "password": "wrong"});
    let (_, value2) = send(&app, request("POST", "/api/auth/login", Some(body), None)).await;
    assert_eq!(value["error"], value2["error"]);
}

#[tokio::test]
async fn me_returns_current_user() {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, value) = send(&app, request("GET", "/api/auth/me", None, Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let user: UserInfo = serde_json::from_value(value).unwrap();
    assert_eq!(user.username, "admin");

    let (status, _) = send(&app, request("GET", "/api/auth/me", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ── Categories ──────────────────────────────────────────────────────

#[tokio::test]
async fn category_crud_and_public_ordering() {
    let app = test_app().await;
    let token = login(&app).await;

    create_category(&app, &token, "Desserts", 1).await;
    create_category(&app, &token, "Burgers", 0).await;
    let drinks = create_category(&app, &token, "Drinks", 2).await;

    let listed: Vec<Category> = get_json(&app, "/api/categories").await;
    let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Burgers", "Desserts", "Drinks"]);

    // Rename via admin PUT
    let id = drinks.id.clone().unwrap();
    let (status, value) = send(
        &app,
        request(
            "PUT",
            &format!("/api/admin/categories/{id}"),
            Some(json!({"name": "Beverages"})),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["name"], "Beverages");

    // Delete
    let (status, value) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/admin/categories/{id}"),
            None,
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["success"], true);

    let listed: Vec<Category> = get_json(&app, "/api/categories").await;
    assert_eq!(listed.len(), 2);
}

#[tokio::test]
async fn reorder_rewrites_positions_contiguously() {
    let app = test_app().await;
    let token = login(&app).await;

    let a = create_category(&app, &token, "A", 0).await;
    let b = create_category(&app, &token, "B", 1).await;
    let c = create_category(&app, &token, "C", 2).await;

    let ids = [c.id.unwrap(), a.id.unwrap(), b.id.unwrap()];
    let (status, value) = send(
        &app,
        request(
            "POST",
            "/api/admin/categories/reorder",
            Some(json!({"categoryIds": ids})),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "reorder failed: {value}");
    assert_eq!(value["success"], true);

    // Persisted order values equal the 0-based submitted positions
    let listed: Vec<Category> = get_json(&app, "/api/categories").await;
    let names: Vec<&str> = listed.iter().map(|cat| cat.name.as_str()).collect();
    assert_eq!(names, ["C", "A", "B"]);
    let orders: Vec<i32> = listed.iter().map(|cat| cat.order).collect();
    assert_eq!(orders, [0, 1, 2]);
}

#[tokio::test]
async fn reorder_rejects_duplicate_missing_and_unknown_ids() {
    let app = test_app().await;
    let token = login(&app).await;

    let a = create_category(&app, &token, "A", 0).await.id.unwrap();
    create_category(&app, &token, "B", 1).await;

    // Duplicate id
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/admin/categories/reorder",
            Some(json!({"categoryIds": [a, a]})),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Missing id (partial list)
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/admin/categories/reorder",
            Some(json!({"categoryIds": [a]})),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown id
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/admin/categories/reorder",
            Some(json!({"categoryIds": [a, "category:doesnotexist"]})),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Order unchanged after all the rejected submissions
    let listed: Vec<Category> = get_json(&app, "/api/categories").await;
    let names: Vec<&str> = listed.iter().map(|cat| cat.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
}

#[tokio::test]
async fn deleting_category_keeps_its_menu_items() {
    let app = test_app().await;
    let token = login(&app).await;

    let cat = create_category(&app, &token, "Sides", 0).await;
    let cat_id = cat.id.unwrap();
    create_menu_item(
        &app,
        &token,
        json!({"categoryId": cat_id, "name": "Golden Fries", "description": "", "price": 399}),
    )
    .await;

    let (status, _) = send(
        &app,
        request(
            "DELETE",
            &format!("/api/admin/categories/{cat_id}"),
            None,
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The item survives with its now-dangling category reference
    let (_, value) = send(
        &app,
        request("GET", "/api/admin/menu-items", None, Some(&token)),
    )
    .await;
    let items: Vec<MenuItem> = serde_json::from_value(value).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category_id, cat_id);
}

// ── Menu items ──────────────────────────────────────────────────────

#[tokio::test]
async fn hidden_items_never_reach_customer_listings() {
    let app = test_app().await;
    let token = login(&app).await;

    let cat = create_category(&app, &token, "Burgers", 0).await;
    let cat_id = cat.id.unwrap();

    create_menu_item(
        &app,
        &token,
        json!({"categoryId": cat_id, "name": "Classic Mini Burger", "description": "", "price": 899}),
    )
    .await;
    // Unavailable but visible: stays in the listing (UI greys it out)
    create_menu_item(
        &app,
        &token,
        json!({"categoryId": cat_id, "name": "Twennie Deluxe", "description": "", "price": 1499, "isAvailable": false}),
    )
    .await;
    create_menu_item(
        &app,
        &token,
        json!({"categoryId": cat_id, "name": "Secret Special", "description": "", "price": 999, "isHidden": true}),
    )
    .await;

    let visible: Vec<MenuItem> = get_json(&app, "/api/menu-items").await;
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|i| !i.is_hidden));
    assert!(visible.iter().any(|i| !i.is_available));

    let by_category: Vec<MenuItem> =
        get_json(&app, &format!("/api/menu-items/category/{cat_id}")).await;
    assert_eq!(by_category.len(), 2);

    // Admin sees everything
    let (_, value) = send(
        &app,
        request("GET", "/api/admin/menu-items", None, Some(&token)),
    )
    .await;
    let all: Vec<MenuItem> = serde_json::from_value(value).unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn visibility_and_availability_toggles_flip_state() {
    let app = test_app().await;
    let token = login(&app).await;

    let cat = create_category(&app, &token, "Drinks", 0).await;
    let item = create_menu_item(
        &app,
        &token,
        json!({"categoryId": cat.id.unwrap(), "name": "Fresh Lemonade", "description": "", "price": 299}),
    )
    .await;
    let id = item.id.unwrap();

    let (status, value) = send(
        &app,
        request(
            "POST",
            &format!("/api/admin/menu-items/{id}/toggle-visibility"),
            None,
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["isHidden"], true);

    let visible: Vec<MenuItem> = get_json(&app, "/api/menu-items").await;
    assert!(visible.is_empty());

    let (_, value) = send(
        &app,
        request(
            "POST",
            &format!("/api/admin/menu-items/{id}/toggle-availability"),
            None,
            Some(&token),
        ),
    )
    .await;
    assert_eq!(value["isAvailable"], false);
}

#[tokio::test]
async fn menu_item_create_rejects_negative_price() {
    let app = test_app().await;
    let token = login(&app).await;

    let cat = create_category(&app, &token, "Burgers", 0).await;
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/admin/menu-items",
            Some(json!({"categoryId": cat.id.unwrap(), "name": "Bad", "description": "", "price": -1})),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Banners ─────────────────────────────────────────────────────────

#[tokio::test]
async fn customer_carousel_only_contains_active_banners_in_order() {
    let app = test_app().await;
    let token = login(&app).await;

    let b1 = create_banner(
        &app,
        &token,
        json!({"imageUrl": "/uploads/one.jpg", "order": 1}),
    )
    .await;
    let b0 = create_banner(
        &app,
        &token,
        json!({"imageUrl": "/uploads/zero.jpg", "order": 0}),
    )
    .await;
    create_banner(
        &app,
        &token,
        json!({"imageUrl": "/uploads/off.jpg", "order": 2, "isActive": false}),
    )
    .await;

    let active: Vec<Banner> = get_json(&app, "/api/banners").await;
    let urls: Vec<&str> = active.iter().map(|b| b.image_url.as_str()).collect();
    assert_eq!(urls, ["/uploads/zero.jpg", "/uploads/one.jpg"]);

    // Reorder the full set (inactive banners included in the id list)
    let (_, value) = send(
        &app,
        request("GET", "/api/admin/banners", None, Some(&token)),
    )
    .await;
    let all: Vec<Banner> = serde_json::from_value(value).unwrap();
    assert_eq!(all.len(), 3);

    let ids = [
        b1.id.clone().unwrap(),
        all[2].id.clone().unwrap(),
        b0.id.clone().unwrap(),
    ];
    let (status, _) = send(
        &app,
        request(
            "POST",
            "/api/admin/banners/reorder",
            Some(json!({"bannerIds": ids})),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let active: Vec<Banner> = get_json(&app, "/api/banners").await;
    let urls: Vec<&str> = active.iter().map(|b| b.image_url.as_str()).collect();
    assert_eq!(urls, ["/uploads/one.jpg", "/uploads/zero.jpg"]);

    // Toggle-active removes a banner from the carousel
    let (status, value) = send(
        &app,
        request(
            "POST",
            &format!("/api/admin/banners/{}/toggle-active", b1.id.unwrap()),
            None,
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["isActive"], false);

    let active: Vec<Banner> = get_json(&app, "/api/banners").await;
    assert_eq!(active.len(), 1);
}

// ── Settings ────────────────────────────────────────────────────────

#[tokio::test]
async fn settings_fall_back_to_defaults_until_first_write() {
    let app = test_app().await;
    let token = login(&app).await;

    let settings: Settings = get_json(&app, "/api/settings").await;
    assert_eq!(settings.restaurant_name, "Mini's & Twennies");
    assert_eq!(settings.currency, "$");
    assert_eq!(settings.whatsapp_number, "");
    assert!(settings.id.is_none());

    // First write creates the singleton, merging defaults for the rest
    let (status, value) = send(
        &app,
        request(
            "PUT",
            "/api/admin/settings",
            Some(json!({"whatsappNumber": "+1234567890"})),
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "settings update failed: {value}");
    let updated: Settings = serde_json::from_value(value).unwrap();
    assert_eq!(updated.whatsapp_number, "+1234567890");
    assert_eq!(updated.restaurant_name, "Mini's & Twennies");

    // Second partial write only touches the named field
    let (_, value) = send(
        &app,
        request(
            "PUT",
            "/api/admin/settings",
            Some(json!({"restaurantName": "Twennies Express"})),
            Some(&token),
        ),
    )
    .await;
    let updated: Settings = serde_json::from_value(value).unwrap();
    assert_eq!(updated.restaurant_name, "Twennies Express");
    assert_eq!(updated.whatsapp_number, "+1234567890");

    let settings: Settings = get_json(&app, "/api/settings").await;
    assert_eq!(settings.restaurant_name, "Twennies Express");
}
