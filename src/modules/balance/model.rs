use std::collections::BTreeMap;

use linarqa_models::{Payment, StaffMember, StaffType};
use rust_decimal::Decimal;
use serde::Serialize;

/// Collections a balance is computed from.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceSources<'a> {
    pub kindergarten_payments: &'a [Payment],
    pub extra_course_payments: &'a [Payment],
    pub staff: &'a [StaffMember],
}

/// Income of one source in one month, split by category.
///
/// The category is the fee type for kindergarten payments and the course
/// name for extra-course payments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeBreakdown {
    pub total_payments: usize,
    pub by_category: BTreeMap<String, Decimal>,
    pub total_amount: Decimal,
}

/// Salaries of active staff, split by role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBreakdown {
    pub total_staff: usize,
    pub by_type: BTreeMap<StaffType, Decimal>,
    pub staff_count: BTreeMap<StaffType, usize>,
    pub total_amount: Decimal,
}

/// Bills due in the month that are not settled yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionalIncome {
    pub kindergarten_unpaid: Decimal,
    pub extra_course_unpaid: Decimal,
    pub total_unpaid: Decimal,
    pub kindergarten_unpaid_count: usize,
    pub extra_course_unpaid_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBalance {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub kindergarten_income: Decimal,
    pub extra_course_income: Decimal,
    pub total_income: Decimal,
    pub total_salaries: Decimal,
    pub net_income: Decimal,
    pub kindergarten_breakdown: IncomeBreakdown,
    pub extra_course_breakdown: IncomeBreakdown,
    pub salary_breakdown: SalaryBreakdown,
    pub provisional_income: ProvisionalIncome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBalance {
    pub year: i32,
    /// January first
    pub monthly_balances: Vec<MonthlyBalance>,
    pub total_yearly_income: Decimal,
    pub total_yearly_salaries: Decimal,
    pub total_yearly_net_income: Decimal,
}
