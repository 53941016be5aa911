//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`upload`] - 图片上传和下载
//! - [`categories`] - 分类接口 (顾客端 + 后台)
//! - [`menu_items`] - 菜品接口 (顾客端 + 后台)
//! - [`banners`] - 轮播图接口 (顾客端 + 后台)
//! - [`settings`] - 餐厅设置接口

pub mod convert;

pub mod auth;
pub mod health;
pub mod upload;

// Catalog API
pub mod banners;
pub mod categories;
pub mod menu_items;
pub mod settings;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
