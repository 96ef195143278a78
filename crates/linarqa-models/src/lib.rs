//! # Linarqa Models
//!
//! Domain models and filter parameters for the Linarqa query layer.
//!
//! The structs mirror the JSON bodies returned by the school backend
//! (camelCase keys). The query layer only reads them.
//!
//! # Modules
//!
//! - [`courses`]: Extra-curricular courses and the course status filter
//! - [`enrollments`]: Course enrollments
//! - [`ids`]: Strongly-typed string identifiers
//! - [`payments`]: Payment bills and payment filters
//! - [`staff`]: Personnel and salaries
//! - [`students`]: Kindergarten and academy students
//!
//! # Example
//!
//! ```ignore
//! use linarqa_core::decode_collection;
//! use linarqa_models::{Course, Enrollment};
//!
//! let courses: Vec<Course> = decode_collection(courses_body)?;
//! let enrollments: Vec<Enrollment> = decode_collection(enrollments_body)?;
//! ```

pub mod courses;
pub mod enrollments;
pub mod ids;
pub mod payments;
pub mod staff;
pub mod students;

// Re-export commonly used types at crate root for convenience
pub use courses::{Course, CourseFilterParams, CourseStatusFilter};
pub use enrollments::{Enrollment, EnrollmentFilterParams, EnrollmentStatus};
pub use ids::{CourseId, EnrollmentId, PaymentId, StaffId, StudentId};
pub use payments::{Payment, PaymentFilterParams, PaymentStatus};
pub use staff::{StaffFilterParams, StaffMember, StaffType};
pub use students::{Student, StudentFilterParams, StudentStatus};
