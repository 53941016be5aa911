//! 工具模块 - 通用工具函数和类型
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型
//! - [`logger`] - tracing 日志初始化
//! - [`validation`] - 输入校验

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;

/// Process-level environment setup: `.env`, then logging.
///
/// Call once at the top of `main` before anything emits a tracing event.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    logger::init_logger();
}
