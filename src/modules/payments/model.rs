use rust_decimal::Decimal;
use serde::Serialize;

/// Summary cards of a payment list.
///
/// `expected_amount` is the sum over every payment in the set regardless of
/// status; `paid_amount` only counts `PAID` ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatistics {
    pub total_payments: usize,
    pub paid_payments: usize,
    pub unpaid_payments: usize,
    pub overdue_payments: usize,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub expected_amount: Decimal,
}

impl PaymentStatistics {
    /// Amount still to collect.
    pub fn outstanding_amount(&self) -> Decimal {
        self.expected_amount - self.paid_amount
    }
}

/// Money still expected (UNPAID, PARTIAL or OVERDUE) per payment source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPayments {
    pub kindergarten_pending: Decimal,
    pub extra_course_pending: Decimal,
    pub total_pending: Decimal,
    pub kindergarten_count: usize,
    pub extra_course_count: usize,
}
