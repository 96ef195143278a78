//! # Linarqa CLI
//!
//! Reports over collections exported from the school backend, and a sample
//! data generator to try them on.
//!
//! This library crate provides the pieces used by the `linarqa-cli` binary:
//!
//! - [`loader`]: Reading exported JSON bodies (bare array or paging envelope)
//! - [`render`]: Text and JSON rendering of derived views
//! - [`generator`]: Fake kindergarten and academy datasets
//!
//! ## Usage
//!
//! ```ignore
//! use linarqa_cli::loader::load_collection;
//! use linarqa_config::ReportConfig;
//!
//! let config = ReportConfig::from_env();
//! let courses: Vec<Course> = load_collection(&config, "courses.json")?;
//! ```

pub mod generator;
pub mod loader;
pub mod render;
