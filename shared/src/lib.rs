//! Shared types for the storefront workspace.
//!
//! Everything that crosses the HTTP boundary lives here so the server and
//! the client crate agree on one wire format:
//!
//! - [`models`] - catalog entities (Category, MenuItem, Banner, Settings)
//!   and the client-side CartItem
//! - [`client`] - request/response DTOs (auth, reorder, success/error
//!   envelopes)
//!
//! Wire format is camelCase JSON; prices are integer minor currency units.

pub mod client;
pub mod models;

// Re-export the common types at the crate root
pub use client::{
    ErrorResponse, LoginRequest, LoginResponse, ReorderBannersRequest, ReorderCategoriesRequest,
    SuccessResponse, UserInfo,
};
pub use models::{
    Banner, BannerCreate, BannerUpdate, CartItem, Category, CategoryCreate, CategoryUpdate,
    MenuItem, MenuItemCreate, MenuItemUpdate, Settings, SettingsUpdate,
};
