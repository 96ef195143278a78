use rust_decimal::Decimal;
use serde::Serialize;

use linarqa_models::Course;

/// Active enrollments divided by capacity.
///
/// A course with capacity 0 (or a negative capacity from bad data) has no
/// finite ratio; it is reported as `Unbounded` instead of NaN or infinity.
/// Serializes as a number, or `null` for `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OccupancyRatio {
    Finite(f64),
    Unbounded,
}

impl OccupancyRatio {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Finite(ratio) => Some(*ratio),
            Self::Unbounded => None,
        }
    }

    /// Fill rate in percent, for progress bars.
    pub fn percent(&self) -> Option<f64> {
        self.as_f64().map(|ratio| ratio * 100.0)
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

/// Seat availability of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatAvailability {
    /// Active, with fewer active enrollments than capacity
    Available,
    /// Active enrollments reached capacity
    Full,
    /// Inactive course with free seats; never offered as available
    Closed,
}

/// Occupancy figures of one course.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupancy {
    pub active_enrollments: usize,
    pub capacity: i32,
    pub ratio: OccupancyRatio,
    pub availability: SeatAvailability,
}

impl Occupancy {
    /// Seats left before the course is full; 0 once full.
    pub fn remaining_seats(&self) -> usize {
        usize::try_from(self.capacity)
            .unwrap_or(0)
            .saturating_sub(self.active_enrollments)
    }
}

/// A course with its derived occupancy, as shown on course cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOverview<'a> {
    #[serde(flatten)]
    pub course: &'a Course,
    pub occupancy: Occupancy,
}

/// Summary cards of the course page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStatistics {
    pub total_courses: usize,
    pub active_courses: usize,
    pub total_active_enrollments: usize,
    pub total_expected_revenue: Decimal,
}
