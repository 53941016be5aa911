//! Server-level error type
//!
//! Errors that can escape [`crate::core::Server::run`]; request-level
//! failures stay inside [`crate::utils::AppError`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
