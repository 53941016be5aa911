//! Storefront Client - ordering client library for the storefront server
//!
//! Owns everything the customer-facing and back-office UIs need beyond
//! rendering:
//!
//! - [`cart`] - the shopping cart engine with durable persistence
//! - [`checkout`] - WhatsApp order-message composition and deep links
//! - [`reorder`] - admin list reordering (categories/banners)
//! - [`http`] - typed HTTP client for the REST API

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod reorder;
pub mod store;

pub use cart::{CART_STORAGE_KEY, CartError, CartManager};
pub use checkout::{CheckoutMessage, compose, compose_order_message, order_link};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use reorder::{
    BannerReorder, CategoryReorder, MoveDirection, ReorderApi, ReorderEngine, ReorderOutcome,
    moved_ids,
};
pub use store::{CartStore, MemoryStore, RedbStore, StoreError};

// Re-export shared types for convenience
pub use shared::models::{Banner, CartItem, Category, MenuItem, Settings};
