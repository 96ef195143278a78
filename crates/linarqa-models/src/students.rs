//! Student models and filter parameters.
//!
//! Students carry their names in Latin script and, optionally, in Arabic
//! script; search looks at both.

use chrono::NaiveDate;
use linarqa_core::Searchable;
use linarqa_core::serde::{deserialize_optional_date, deserialize_optional_string};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

use crate::ids::StudentId;

/// Enrollment status of a student in the school.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentStatus {
    #[default]
    Active,
    Inactive,
    /// Kindergarten students who left the school
    Left,
    #[serde(other)]
    Other,
}

/// A student of either the kindergarten or the academy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub first_name_arabic: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub last_name_arabic: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: StudentStatus,
}

impl Student {
    /// "First Last" in Latin script.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "First Last" in Arabic script, when both parts are known.
    pub fn full_name_arabic(&self) -> Option<String> {
        match (&self.first_name_arabic, &self.last_name_arabic) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            _ => None,
        }
    }
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Owned(self.full_name()),
            Cow::Borrowed(self.first_name.as_str()),
            Cow::Borrowed(self.last_name.as_str()),
        ];
        fields.extend(self.full_name_arabic().map(Cow::Owned));
        fields.extend(self.first_name_arabic.as_deref().map(Cow::Borrowed));
        fields.extend(self.last_name_arabic.as_deref().map(Cow::Borrowed));
        fields
    }
}

/// Criteria for filtering students. All criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentFilterParams {
    /// Matched against Latin and Arabic first/last/full names
    #[validate(length(max = 100))]
    pub search: Option<String>,
    pub status: Option<StudentStatus>,
}
