//! Utility modules shared by the feature modules.
//!
//! - [`filter`]: Generic search + predicate filtering

pub mod filter;
