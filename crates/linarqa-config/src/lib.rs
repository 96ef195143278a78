//! # Linarqa Config
//!
//! Configuration types for the Linarqa tools.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`report`]: Data directory, currency and history length of printed reports
//!
//! # Example
//!
//! ```ignore
//! use linarqa_config::ReportConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = ReportConfig::from_env();
//! let path = config.resolve("payments.json");
//! ```

pub mod report;

// Re-export commonly used types at crate root
pub use report::ReportConfig;
