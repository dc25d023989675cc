//! # retroboard-core
//!
//! Core crate for the Retroboard client state layer. Contains the typed
//! presence token identifier, application configuration schema, logging
//! setup, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Retroboard crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
