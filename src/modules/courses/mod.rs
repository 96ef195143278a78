pub mod model;
pub mod occupancy;
pub mod service;

pub use model::*;
pub use occupancy::{EnrollmentIndex, active_enrollment_count, classify, occupancy_ratio};
pub use service::CourseService;
