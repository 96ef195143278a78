mod common;

use common::{course, enrollment, fake_courses, fake_enrollments, priced_course};
use linarqa::modules::courses::{
    CourseService, EnrollmentIndex, OccupancyRatio, SeatAvailability, active_enrollment_count,
    classify, occupancy_ratio,
};
use linarqa_core::decode_collection;
use linarqa_models::{Course, CourseFilterParams, CourseId, CourseStatusFilter, Enrollment};
use rust_decimal_macros::dec;
use serde_json::json;

fn scenario_enrollments() -> Vec<Enrollment> {
    decode_collection(json!([
        { "courseId": "c1", "status": "ACTIVE" },
        { "courseId": "c1", "status": "ACTIVE" },
        { "courseId": "c1", "status": "INACTIVE" }
    ]))
    .unwrap()
}

#[test]
fn test_course_with_free_seats_is_available() {
    let courses: Vec<Course> =
        decode_collection(json!([{ "id": "c1", "capacity": 20, "active": true }])).unwrap();
    let enrollments = scenario_enrollments();
    let c1 = &courses[0];

    assert_eq!(active_enrollment_count(&CourseId::from("c1"), &enrollments), 2);
    assert_eq!(occupancy_ratio(c1, &enrollments), OccupancyRatio::Finite(0.10));
    assert_eq!(classify(c1, 2), SeatAvailability::Available);
}

#[test]
fn test_course_at_capacity_is_full() {
    let c1 = course("c1", 2, true);
    let enrollments = scenario_enrollments();
    let count = active_enrollment_count(&c1.id, &enrollments);
    assert_eq!(classify(&c1, count), SeatAvailability::Full);
}

#[test]
fn test_zero_capacity_never_divides() {
    let c1 = course("c1", 0, true);
    let ratio = occupancy_ratio(&c1, &scenario_enrollments());
    assert_eq!(ratio, OccupancyRatio::Unbounded);
    assert_eq!(serde_json::to_value(ratio).unwrap(), serde_json::Value::Null);
}

#[test]
fn test_orphan_enrollments_are_ignored_per_course() {
    let courses = vec![course("c1", 5, true)];
    let mut enrollments = scenario_enrollments();
    enrollments.push(enrollment("missing", "ACTIVE"));

    let index = EnrollmentIndex::build(&enrollments);
    assert_eq!(index.occupancy(&courses[0]).active_enrollments, 2);

    let stats = CourseService::summarize_courses(&courses, &enrollments);
    assert_eq!(stats.total_active_enrollments, 3);
}

#[test]
fn test_expected_revenue_is_exact_decimal() {
    let courses = vec![
        priced_course("c1", "Robotique", 10, dec!(0.1)),
        priced_course("c2", "Piano", 10, dec!(0.2)),
    ];
    let enrollments = vec![enrollment("c1", "ACTIVE"), enrollment("c2", "ACTIVE")];
    let stats = CourseService::summarize_courses(&courses, &enrollments);
    assert_eq!(stats.total_expected_revenue, dec!(0.3));
}

#[test]
fn test_filter_without_criteria_is_identity() {
    let courses = fake_courses(30);
    let enrollments = fake_enrollments(&courses, 80);
    let out = CourseService::filter_courses(&courses, &enrollments, &CourseFilterParams::default());
    assert_eq!(out, courses.iter().collect::<Vec<_>>());
}

#[test]
fn test_filter_is_idempotent() {
    let courses = fake_courses(30);
    let enrollments = fake_enrollments(&courses, 80);

    for status in [
        CourseStatusFilter::All,
        CourseStatusFilter::Active,
        CourseStatusFilter::Full,
        CourseStatusFilter::Available,
    ] {
        let params = CourseFilterParams {
            search: Some("e".to_string()),
            status: Some(status),
        };
        let once = CourseService::filter_courses(&courses, &enrollments, &params);
        let owned: Vec<Course> = once.iter().map(|c| (*c).clone()).collect();
        let twice = CourseService::filter_courses(&owned, &enrollments, &params);
        assert_eq!(twice, once, "status {status:?}");
    }
}

#[test]
fn test_full_and_available_are_disjoint() {
    let courses = fake_courses(40);
    let enrollments = fake_enrollments(&courses, 120);
    let by = |status| {
        CourseService::filter_courses(
            &courses,
            &enrollments,
            &CourseFilterParams {
                search: None,
                status: Some(status),
            },
        )
    };
    let full = by(CourseStatusFilter::Full);
    let available = by(CourseStatusFilter::Available);

    assert!(full.iter().all(|c| !available.contains(c)));
    assert!(available.iter().all(|c| c.active));
    assert!(full.len() + available.len() <= courses.len());
}

#[test]
fn test_ratio_is_never_nan() {
    let courses = fake_courses(40);
    let enrollments = fake_enrollments(&courses, 100);
    for c in &courses {
        match occupancy_ratio(c, &enrollments) {
            OccupancyRatio::Finite(ratio) => {
                assert!(c.capacity > 0);
                assert!(ratio.is_finite());
            }
            OccupancyRatio::Unbounded => assert!(c.capacity <= 0),
        }
    }
}
