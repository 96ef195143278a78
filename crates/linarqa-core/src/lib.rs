//! # Linarqa Core
//!
//! Core types, errors, and utilities for the Linarqa query layer.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Error type shared by the library crates
//! - [`envelope`]: Normalization of backend list responses (bare array or paging envelope)
//! - [`money`]: Decimal-safe summation and amount formatting
//! - [`month`]: `YYYY-MM` month keys used for grouping and balances
//! - [`search`]: Case-insensitive search term matching
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use linarqa_core::envelope::normalize;
//! use linarqa_core::month::MonthKey;
//!
//! let items = normalize(&serde_json::json!({ "content": [{ "id": "x" }] }));
//! assert_eq!(items.len(), 1);
//!
//! let key: MonthKey = "2024-03".parse()?;
//! assert_eq!(key.to_string(), "2024-03");
//! ```

pub mod envelope;
pub mod errors;
pub mod money;
pub mod month;
pub mod search;
pub mod serde;

// Re-export commonly used types at crate root
pub use envelope::{PageEnvelope, decode_collection, normalize};
pub use errors::{CoreError, CoreResult};
pub use money::{format_amount, sum_amounts};
pub use month::MonthKey;
pub use search::{SearchTerm, Searchable};
