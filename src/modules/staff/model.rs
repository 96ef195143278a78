use rust_decimal::Decimal;
use serde::Serialize;

/// Summary cards of the personnel page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffStatistics {
    pub total_staff: usize,
    pub active_staff: usize,
    /// Sum over every listed member, active or not
    pub total_salary: Decimal,
    /// Rounded to cents; zero for an empty list
    pub average_salary: Decimal,
}
