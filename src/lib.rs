//! # Linarqa
//!
//! Collection query and aggregation layer of the Linarqa school-administration
//! application (kindergarten and extra-curricular academy).
//!
//! ## Overview
//!
//! The REST backend owns every entity. This crate works on collections that
//! were already fetched and derives what the pages display:
//!
//! - **Filtering**: search box and status dropdowns over any entity list
//! - **Occupancy**: active enrollments per course, fill ratio and seat availability
//! - **Statistics**: summary cards for courses, payments, students and staff
//! - **History**: payments grouped into `YYYY-MM` month buckets
//! - **Balance**: monthly and yearly income, salaries and net result
//!
//! Every operation is a pure function of its inputs. Inputs are borrowed and
//! never mutated; filtered views borrow from the input slice.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── modules/          # Feature modules
//! │   ├── balance/     # Monthly and yearly balance
//! │   ├── courses/     # Course filter, occupancy, statistics
//! │   ├── enrollments/ # Enrollment filter
//! │   ├── payments/    # Payment filter, statistics, month grouping
//! │   ├── staff/       # Staff filter and salary statistics
//! │   └── students/    # Student filter and head counts
//! ├── utils/           # Generic filtering
//! └── validator.rs     # Filter parameter validation
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `service.rs`: Query operations
//! - `model.rs`: Derived values returned by the service
//!
//! Entities and filter parameters live in `linarqa-models`; response
//! normalization, money and month keys in `linarqa-core`.
//!
//! ## Example
//!
//! ```ignore
//! use linarqa::modules::courses::CourseService;
//! use linarqa_core::decode_collection;
//!
//! let courses: Vec<Course> = decode_collection(courses_body)?;
//! let enrollments: Vec<Enrollment> = decode_collection(enrollments_body)?;
//! let stats = CourseService::summarize_courses(&courses, &enrollments);
//! ```
//!
//! ## Modules
//!
//! - [`modules`]: Feature modules (courses, payments, balance, etc.)
//! - [`utils`]: Shared utilities (generic filtering)
//! - [`validator`]: Filter parameter validation

pub mod modules;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use linarqa_core;
pub use linarqa_models;
