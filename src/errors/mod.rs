//! Error types shared across the crate.

pub mod app_error;

pub use app_error::{AppError, AppResult};
