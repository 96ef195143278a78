//! Feature modules, one per entity list of the application.
//!
//! Each module holds a `service.rs` with the query operations and a
//! `model.rs` with the derived values they return.

pub mod balance;
pub mod courses;
pub mod enrollments;
pub mod payments;
pub mod staff;
pub mod students;

pub use self::balance::BalanceService;
pub use self::courses::CourseService;
pub use self::enrollments::EnrollmentService;
pub use self::payments::PaymentService;
pub use self::staff::StaffService;
pub use self::students::StudentService;
