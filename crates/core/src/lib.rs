//! Core types and shared functionality for aggra.
//!
//! This crate provides:
//! - In-memory TTL cache
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;

pub use cache::TtlCache;
pub use config::AppConfig;
pub use error::Error;
