//! Linarqa Observability
//!
//! Console logging for the Linarqa binaries. The library crates only emit
//! `tracing` events and spans; a binary calls
//! [`init_basic_console_logging`] once at startup to print them.
//!
//! # Examples
//!
//! ```no_run
//! use linarqa_observability::init_basic_console_logging;
//!
//! fn main() {
//!     init_basic_console_logging().ok();
//!     tracing::info!("ready");
//! }
//! ```

pub mod basic_logging;

pub use basic_logging::{default_directives, init_basic_console_logging};
