//! Shared errors and configuration for lumenrate binaries.
//!
//! This crate provides:
//! - Application-wide error type with exit and error codes
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
