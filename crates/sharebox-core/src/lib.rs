//! # sharebox-core
//!
//! Core crate for ShareBox. Contains configuration schemas, audit events,
//! tracing setup, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ShareBox crates.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
