//! Core types and shared functionality for newsdesk.
//!
//! This crate provides:
//! - Layered application configuration
//! - Unified error types
//! - The article view model
//! - Search result pagination

pub mod article;
pub mod config;
pub mod error;
pub mod pagination;

pub use article::Article;
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use pagination::{MAX_SEARCH_OFFSET, PageControl, PageLabel, PaginationInfo, PaginationView, compute_pagination};
