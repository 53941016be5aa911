//! 认证中间件
//!
//! 为 JWT 认证提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// 该路径是否需要登录
///
/// 顾客端全部匿名；只有后台接口和 `/api/auth/me` 需要令牌。
fn requires_auth(path: &str) -> bool {
    path.starts_with("/api/admin/") || path == "/api/auth/me"
}

/// 认证中间件
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT。
/// 验证成功后将 [`CurrentUser`] 注入请求扩展。
///
/// # 跳过认证的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 所有顾客端路由 (`/api/categories`, `/api/menu-items`, `/api/banners`,
///   `/api/settings`, `/uploads/*`, `/health`)
/// - `/api/auth/login` / `/api/auth/logout`
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 允许 CORS 预检的 OPTIONS 请求 (跳过认证)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let path = req.uri().path();
    if !requires_auth(path) {
        return Ok(next.run(req).await);
    }

    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
            return Err(AppError::unauthorized());
        }
    };

    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );

            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes_skip_auth() {
        assert!(!requires_auth("/api/categories"));
        assert!(!requires_auth("/api/menu-items"));
        assert!(!requires_auth("/api/menu-items/category/category:x"));
        assert!(!requires_auth("/api/banners"));
        assert!(!requires_auth("/api/settings"));
        assert!(!requires_auth("/api/auth/login"));
        assert!(!requires_auth("/uploads/abc.jpg"));
        assert!(!requires_auth("/health"));
    }

    #[test]
    fn test_admin_routes_require_auth() {
        assert!(requires_auth("/api/admin/categories"));
        assert!(requires_auth("/api/admin/categories/reorder"));
        assert!(requires_auth("/api/admin/menu-items"));
        assert!(requires_auth("/api/admin/settings"));
        assert!(requires_auth("/api/admin/upload"));
        assert!(requires_auth("/api/auth/me"));
    }
}
