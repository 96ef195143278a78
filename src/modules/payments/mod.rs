pub mod grouping;
pub mod model;
pub mod service;

pub use grouping::{MonthBucket, MonthBuckets, group_by_month, group_by_month_with};
pub use model::*;
pub use service::PaymentService;
