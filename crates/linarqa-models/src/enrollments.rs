//! Course enrollment models.

use chrono::NaiveDate;
use linarqa_core::Searchable;
use linarqa_core::serde::{deserialize_optional_date, deserialize_optional_string};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

use crate::ids::{CourseId, EnrollmentId, StudentId};

/// Lifecycle status of an enrollment.
///
/// Unknown values from the backend land in `Other` and never count as active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Inactive,
    Completed,
    Cancelled,
    #[serde(other)]
    Other,
}

/// A student's enrollment in a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    #[serde(default)]
    pub id: EnrollmentId,
    pub course_id: CourseId,
    #[serde(default, alias = "extraStudentId")]
    pub student_id: Option<StudentId>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub course_title: Option<String>,
    pub status: EnrollmentStatus,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub enrollment_date: Option<NaiveDate>,
}

impl Enrollment {
    /// Whether this enrollment occupies a seat.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }
}

impl Searchable for Enrollment {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        self.student_name
            .as_deref()
            .into_iter()
            .chain(self.course_title.as_deref())
            .map(Cow::Borrowed)
            .collect()
    }
}

/// Criteria for filtering enrollments. All criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrollmentFilterParams {
    /// Matched against student name and course title
    #[validate(length(max = 100))]
    pub search: Option<String>,
    pub status: Option<EnrollmentStatus>,
    pub course_id: Option<CourseId>,
}
