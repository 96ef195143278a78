//! Active-enrollment counting and seat classification.
//!
//! Only enrollments with status `ACTIVE` occupy a seat. Enrollments whose
//! course id matches no course are simply never looked up, so orphaned
//! records drop out of every course's count without an error.

use std::collections::HashMap;

use linarqa_models::{Course, CourseId, Enrollment};

use super::model::{Occupancy, OccupancyRatio, SeatAvailability};

/// Number of ACTIVE enrollments of `course_id`.
pub fn active_enrollment_count(course_id: &CourseId, enrollments: &[Enrollment]) -> usize {
    enrollments
        .iter()
        .filter(|e| e.is_active() && &e.course_id == course_id)
        .count()
}

/// Active count divided by capacity, `Unbounded` when capacity ≤ 0.
pub fn occupancy_ratio(course: &Course, enrollments: &[Enrollment]) -> OccupancyRatio {
    ratio(active_enrollment_count(&course.id, enrollments), course.capacity)
}

/// Full when active count reaches capacity; available only for active
/// courses with free seats; closed otherwise.
pub fn classify(course: &Course, active_count: usize) -> SeatAvailability {
    let capacity = usize::try_from(course.capacity).unwrap_or(0);
    if active_count >= capacity {
        SeatAvailability::Full
    } else if course.active {
        SeatAvailability::Available
    } else {
        SeatAvailability::Closed
    }
}

fn ratio(active_count: usize, capacity: i32) -> OccupancyRatio {
    if capacity <= 0 {
        OccupancyRatio::Unbounded
    } else {
        OccupancyRatio::Finite(active_count as f64 / f64::from(capacity))
    }
}

/// Active enrollment counts per course, built in one pass.
///
/// Use this when many courses are looked up against the same enrollment
/// list (filtering, statistics) instead of rescanning per course.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentIndex<'a> {
    active_by_course: HashMap<&'a str, usize>,
    total_active: usize,
}

impl<'a> EnrollmentIndex<'a> {
    pub fn build(enrollments: &'a [Enrollment]) -> Self {
        let mut index = Self::default();
        for enrollment in enrollments.iter().filter(|e| e.is_active()) {
            *index
                .active_by_course
                .entry(enrollment.course_id.as_str())
                .or_default() += 1;
            index.total_active += 1;
        }
        index
    }

    pub fn active_count(&self, course_id: &CourseId) -> usize {
        self.active_by_course
            .get(course_id.as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Every ACTIVE enrollment in the input, orphaned ones included.
    pub fn total_active(&self) -> usize {
        self.total_active
    }

    pub fn occupancy(&self, course: &Course) -> Occupancy {
        let active_enrollments = self.active_count(&course.id);
        Occupancy {
            active_enrollments,
            capacity: course.capacity,
            ratio: ratio(active_enrollments, course.capacity),
            availability: classify(course, active_enrollments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linarqa_models::EnrollmentStatus;
    use rust_decimal::Decimal;

    fn course(id: &str, capacity: i32, active: bool) -> Course {
        Course {
            id: CourseId::from(id),
            title: format!("Course {id}"),
            description: None,
            monthly_price: Decimal::ZERO,
            capacity,
            active,
            instructor: None,
            schedule: None,
        }
    }

    fn enrollment(course_id: &str, status: EnrollmentStatus) -> Enrollment {
        Enrollment {
            id: Default::default(),
            course_id: CourseId::from(course_id),
            student_id: None,
            student_name: None,
            course_title: None,
            status,
            enrollment_date: None,
        }
    }

    fn scenario_enrollments() -> Vec<Enrollment> {
        vec![
            enrollment("c1", EnrollmentStatus::Active),
            enrollment("c1", EnrollmentStatus::Active),
            enrollment("c1", EnrollmentStatus::Inactive),
        ]
    }

    #[test]
    fn test_active_count_ignores_other_statuses_and_courses() {
        let mut enrollments = scenario_enrollments();
        enrollments.push(enrollment("c2", EnrollmentStatus::Active));
        enrollments.push(enrollment("c1", EnrollmentStatus::Cancelled));
        assert_eq!(active_enrollment_count(&CourseId::from("c1"), &enrollments), 2);
        assert_eq!(active_enrollment_count(&CourseId::from("c2"), &enrollments), 1);
        assert_eq!(active_enrollment_count(&CourseId::from("c3"), &enrollments), 0);
    }

    #[test]
    fn test_available_course_with_free_seats() {
        let c = course("c1", 20, true);
        let enrollments = scenario_enrollments();
        assert_eq!(occupancy_ratio(&c, &enrollments), OccupancyRatio::Finite(0.10));
        assert_eq!(classify(&c, 2), SeatAvailability::Available);
    }

    #[test]
    fn test_full_course() {
        let c = course("c1", 2, true);
        assert_eq!(classify(&c, 2), SeatAvailability::Full);
        assert_eq!(occupancy_ratio(&c, &scenario_enrollments()), OccupancyRatio::Finite(1.0));
    }

    #[test]
    fn test_over_capacity_is_full() {
        let c = course("c1", 1, true);
        assert_eq!(classify(&c, 2), SeatAvailability::Full);
        assert_eq!(occupancy_ratio(&c, &scenario_enrollments()), OccupancyRatio::Finite(2.0));
    }

    #[test]
    fn test_inactive_course_is_never_available() {
        let c = course("c1", 20, false);
        assert_eq!(classify(&c, 2), SeatAvailability::Closed);
        let c = course("c1", 2, false);
        assert_eq!(classify(&c, 2), SeatAvailability::Full);
    }

    #[test]
    fn test_zero_capacity_uses_sentinel() {
        let c = course("c1", 0, true);
        let ratio = occupancy_ratio(&c, &scenario_enrollments());
        assert_eq!(ratio, OccupancyRatio::Unbounded);
        assert!(ratio.as_f64().is_none());
        assert_eq!(classify(&c, 0), SeatAvailability::Full);

        let empty = occupancy_ratio(&c, &[]);
        assert_eq!(empty, OccupancyRatio::Unbounded);
    }

    #[test]
    fn test_negative_capacity_uses_sentinel() {
        let c = course("c1", -5, true);
        assert!(occupancy_ratio(&c, &[]).is_unbounded());
        assert_eq!(classify(&c, 0), SeatAvailability::Full);
    }

    #[test]
    fn test_index_matches_direct_count() {
        let mut enrollments = scenario_enrollments();
        enrollments.push(enrollment("orphan", EnrollmentStatus::Active));
        let index = EnrollmentIndex::build(&enrollments);

        assert_eq!(index.active_count(&CourseId::from("c1")), 2);
        assert_eq!(index.active_count(&CourseId::from("missing")), 0);
        assert_eq!(index.total_active(), 3);

        let occupancy = index.occupancy(&course("c1", 20, true));
        assert_eq!(occupancy.active_enrollments, 2);
        assert_eq!(occupancy.ratio.percent(), Some(10.0));
        assert_eq!(occupancy.availability, SeatAvailability::Available);
        assert_eq!(occupancy.remaining_seats(), 18);
    }

    #[test]
    fn test_remaining_seats_saturates() {
        let index_source = scenario_enrollments();
        let index = EnrollmentIndex::build(&index_source);
        assert_eq!(index.occupancy(&course("c1", 1, true)).remaining_seats(), 0);
        assert_eq!(index.occupancy(&course("c1", 0, true)).remaining_seats(), 0);
    }
}
