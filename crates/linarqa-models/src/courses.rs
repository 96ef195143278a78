//! Extra-curricular course models and filter parameters.

use linarqa_core::Searchable;
use linarqa_core::serde::{deserialize_null_default, deserialize_optional_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

use crate::ids::CourseId;

/// A course offered by the academy.
///
/// `capacity` defaults to 0 when the backend omits it; occupancy code treats
/// a non-positive capacity as "no seats".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub monthly_price: Decimal,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub capacity: i32,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub active: bool,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub instructor: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub schedule: Option<String>,
}

impl Searchable for Course {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Borrowed(self.title.as_str())];
        fields.extend(self.instructor.as_deref().map(Cow::Borrowed));
        fields.extend(self.description.as_deref().map(Cow::Borrowed));
        fields
    }
}

/// Status dropdown of the course list.
///
/// `Full` and `Available` are not stored on the course; they are derived
/// from active enrollments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatusFilter {
    #[default]
    All,
    Active,
    Full,
    Available,
}

/// Criteria for filtering courses. All criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseFilterParams {
    /// Matched against title, instructor and description
    #[validate(length(max = 100))]
    pub search: Option<String>,
    pub status: Option<CourseStatusFilter>,
}
