//! Payment bill models and filter parameters.
//!
//! Both kindergarten fees and extra-course bills share this shape; the
//! kindergarten side fills `payment_type`, the academy side fills the course
//! fields.

use chrono::NaiveDate;
use linarqa_core::MonthKey;
use linarqa_core::serde::{deserialize_date, deserialize_optional_date, deserialize_optional_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::{CourseId, PaymentId, StudentId};

/// Settlement status of a payment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
    Partial,
    Overdue,
    #[serde(other)]
    Other,
}

impl PaymentStatus {
    /// Whether money is still expected for this bill (unpaid, partial or overdue).
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Unpaid | Self::Partial | Self::Overdue)
    }
}

/// A single bill owed by a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub id: PaymentId,
    #[serde(default, alias = "extraStudentId")]
    pub student_id: Option<StudentId>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub student_name: Option<String>,
    #[serde(default)]
    pub course_id: Option<CourseId>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub course_name: Option<String>,
    /// Kindergarten fee category (e.g. monthly, registration)
    #[serde(default, rename = "type", deserialize_with = "deserialize_optional_string")]
    pub payment_type: Option<String>,
    pub amount: Decimal,
    pub status: PaymentStatus,
    #[serde(deserialize_with = "deserialize_date")]
    pub due_date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub paid_date: Option<NaiveDate>,
}

impl Payment {
    #[inline]
    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }

    /// Month of the due date, used as the history bucket key.
    #[inline]
    pub fn due_month(&self) -> MonthKey {
        MonthKey::from_date(self.due_date)
    }
}

/// Criteria for filtering payments. All criteria combine with AND.
///
/// `month` and `year` only apply together, matching the due date's month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentFilterParams {
    pub status: Option<PaymentStatus>,
    pub student_id: Option<StudentId>,
    pub course_id: Option<CourseId>,
    #[validate(range(min = 1, max = 12))]
    pub month: Option<u32>,
    #[validate(range(min = 1900, max = 2200))]
    pub year: Option<i32>,
}

impl PaymentFilterParams {
    /// The month criterion, when both `month` and `year` are set and valid.
    pub fn month_key(&self) -> Option<MonthKey> {
        match (self.year, self.month) {
            (Some(year), Some(month)) => MonthKey::new(year, month),
            _ => None,
        }
    }

    /// Sets `month`/`year` from a month key.
    pub fn with_month(mut self, key: MonthKey) -> Self {
        self.year = Some(key.year());
        self.month = Some(key.month());
        self
    }
}
