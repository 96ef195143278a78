use linarqa_core::SearchTerm;
use linarqa_models::{Enrollment, EnrollmentFilterParams};
use tracing::{debug, instrument};

use crate::utils::filter::{filter_items, matches_criterion};

pub struct EnrollmentService;

impl EnrollmentService {
    /// Enrollments matching the search box, status and course criteria.
    #[instrument(skip_all, fields(enrollments = enrollments.len()))]
    pub fn filter_enrollments<'a>(
        enrollments: &'a [Enrollment],
        params: &EnrollmentFilterParams,
    ) -> Vec<&'a Enrollment> {
        let search = SearchTerm::new(params.search.as_deref());
        let filtered = filter_items(enrollments, &search, |enrollment| {
            matches_criterion(params.status.as_ref(), &enrollment.status)
                && matches_criterion(params.course_id.as_ref(), &enrollment.course_id)
        });

        debug!(matched = filtered.len(), "Filtered enrollments");
        filtered
    }
}
