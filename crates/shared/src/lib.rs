//! Shared types, errors, and configuration for finstat.
//!
//! This crate provides common types used across all other crates:
//! - Typed keys for customers, products, and orders
//! - Decimal helpers for rounding, guarded division, and materiality
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, ReportingConfig};
pub use error::{AppError, AppResult, ErrorBody};
