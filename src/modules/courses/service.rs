use linarqa_core::{SearchTerm, sum_amounts};
use linarqa_models::{Course, CourseFilterParams, CourseStatusFilter, Enrollment};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::modules::courses::model::{CourseOverview, CourseStatistics, SeatAvailability};
use crate::modules::courses::occupancy::EnrollmentIndex;
use crate::utils::filter::filter_items;

pub struct CourseService;

impl CourseService {
    /// Courses matching the search box and status dropdown, in input order.
    ///
    /// `Full` and `Available` are derived from the ACTIVE enrollments of each
    /// course; `Active` reads the stored flag.
    #[instrument(skip_all, fields(courses = courses.len(), enrollments = enrollments.len()))]
    pub fn filter_courses<'a>(
        courses: &'a [Course],
        enrollments: &[Enrollment],
        params: &CourseFilterParams,
    ) -> Vec<&'a Course> {
        let search = SearchTerm::new(params.search.as_deref());
        let status = params.status.unwrap_or_default();
        let index = EnrollmentIndex::build(enrollments);

        let filtered = filter_items(courses, &search, |course| {
            let availability = || index.occupancy(course).availability;
            match status {
                CourseStatusFilter::All => true,
                CourseStatusFilter::Active => course.active,
                CourseStatusFilter::Full => availability() == SeatAvailability::Full,
                CourseStatusFilter::Available => availability() == SeatAvailability::Available,
            }
        });

        debug!(matched = filtered.len(), ?status, "Filtered courses");
        filtered
    }

    /// Pairs every course with its occupancy, in input order.
    #[instrument(skip_all, fields(courses = tracing::field::Empty))]
    pub fn course_overviews<'a, I>(courses: I, enrollments: &[Enrollment]) -> Vec<CourseOverview<'a>>
    where
        I: IntoIterator<Item = &'a Course>,
        I::IntoIter: ExactSizeIterator,
    {
        let courses = courses.into_iter();
        tracing::Span::current().record("courses", courses.len());
        let index = EnrollmentIndex::build(enrollments);
        courses
            .map(|course| CourseOverview {
                course,
                occupancy: index.occupancy(course),
            })
            .collect()
    }

    /// Summary cards of the course page.
    ///
    /// `total_active_enrollments` counts every ACTIVE enrollment given,
    /// including ones whose course is not in `courses`. Expected revenue only
    /// counts enrollments of known courses.
    #[instrument(skip_all, fields(courses = courses.len(), enrollments = enrollments.len()))]
    pub fn summarize_courses(courses: &[Course], enrollments: &[Enrollment]) -> CourseStatistics {
        let index = EnrollmentIndex::build(enrollments);

        let total_expected_revenue = sum_amounts(courses.iter().map(|course| {
            Decimal::from(index.active_count(&course.id)) * course.monthly_price
        }));

        let stats = CourseStatistics {
            total_courses: courses.len(),
            active_courses: courses.iter().filter(|c| c.active).count(),
            total_active_enrollments: index.total_active(),
            total_expected_revenue,
        };

        debug!(
            total = stats.total_courses,
            active = stats.active_courses,
            enrollments = stats.total_active_enrollments,
            "Computed course statistics"
        );
        stats
    }
}
