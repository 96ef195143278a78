use std::collections::BTreeMap;

use linarqa_core::{MonthKey, sum_amounts};
use linarqa_models::{Payment, StaffMember};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::modules::balance::model::{
    BalanceSources, IncomeBreakdown, MonthlyBalance, ProvisionalIncome, SalaryBreakdown,
    YearlyBalance,
};

const UNCATEGORIZED: &str = "UNKNOWN";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English month name, `None` outside 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

pub struct BalanceService;

impl BalanceService {
    /// Income, salaries and net result of one month.
    ///
    /// Income counts PAID payments by the month of their paid date. Salaries
    /// are the current monthly salaries of active staff, the same for every
    /// month. Provisional income counts unsettled bills by due date.
    #[instrument(skip_all, fields(month = %key))]
    pub fn monthly_balance(key: MonthKey, sources: &BalanceSources<'_>) -> MonthlyBalance {
        let kindergarten_breakdown = income_breakdown(key, sources.kindergarten_payments, |p| {
            p.payment_type.as_deref().unwrap_or(UNCATEGORIZED).to_string()
        });
        let extra_course_breakdown = income_breakdown(key, sources.extra_course_payments, |p| {
            p.course_name
                .clone()
                .or_else(|| p.course_id.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| UNCATEGORIZED.to_string())
        });
        let salary_breakdown = salary_breakdown(sources.staff);
        let provisional_income = provisional_income(key, sources);

        let kindergarten_income = kindergarten_breakdown.total_amount;
        let extra_course_income = extra_course_breakdown.total_amount;
        let total_income = kindergarten_income + extra_course_income;
        let total_salaries = salary_breakdown.total_amount;

        debug!(%total_income, %total_salaries, "Computed monthly balance");

        MonthlyBalance {
            year: key.year(),
            month: key.month(),
            month_name: month_name(key.month()).unwrap_or_default(),
            kindergarten_income,
            extra_course_income,
            total_income,
            total_salaries,
            net_income: total_income - total_salaries,
            kindergarten_breakdown,
            extra_course_breakdown,
            salary_breakdown,
            provisional_income,
        }
    }

    /// The twelve monthly balances of `year` with yearly totals.
    #[instrument(skip_all, fields(year = year))]
    pub fn yearly_balance(year: i32, sources: &BalanceSources<'_>) -> YearlyBalance {
        let monthly_balances: Vec<MonthlyBalance> = MonthKey::months_of(year)
            .map(|key| Self::monthly_balance(key, sources))
            .collect();

        let total_yearly_income = sum_amounts(monthly_balances.iter().map(|b| b.total_income));
        let total_yearly_salaries = sum_amounts(monthly_balances.iter().map(|b| b.total_salaries));

        YearlyBalance {
            year,
            monthly_balances,
            total_yearly_income,
            total_yearly_salaries,
            total_yearly_net_income: total_yearly_income - total_yearly_salaries,
        }
    }
}

fn paid_in(key: MonthKey, payment: &Payment) -> bool {
    payment.is_paid() && payment.paid_date.is_some_and(|date| key.contains(date))
}

fn income_breakdown<F>(key: MonthKey, payments: &[Payment], category_of: F) -> IncomeBreakdown
where
    F: Fn(&Payment) -> String,
{
    let mut breakdown = IncomeBreakdown::default();
    for payment in payments.iter().filter(|p| paid_in(key, p)) {
        breakdown.total_payments += 1;
        *breakdown.by_category.entry(category_of(payment)).or_default() += payment.amount;
        breakdown.total_amount += payment.amount;
    }
    breakdown
}

fn salary_breakdown(staff: &[StaffMember]) -> SalaryBreakdown {
    let mut by_type = BTreeMap::new();
    let mut staff_count = BTreeMap::new();
    let mut salaries = Vec::new();

    for member in staff.iter().filter(|member| member.active) {
        *by_type.entry(member.staff_type).or_insert(Decimal::ZERO) += member.salary;
        *staff_count.entry(member.staff_type).or_insert(0) += 1;
        salaries.push(member.salary);
    }

    SalaryBreakdown {
        total_staff: salaries.len(),
        by_type,
        staff_count,
        total_amount: sum_amounts(salaries),
    }
}

fn provisional_income(key: MonthKey, sources: &BalanceSources<'_>) -> ProvisionalIncome {
    let unpaid = |payments: &[Payment]| {
        let due: Vec<Decimal> = payments
            .iter()
            .filter(|p| p.status.is_pending() && key.contains(p.due_date))
            .map(|p| p.amount)
            .collect();
        (due.len(), sum_amounts(due))
    };
    let (kindergarten_unpaid_count, kindergarten_unpaid) = unpaid(sources.kindergarten_payments);
    let (extra_course_unpaid_count, extra_course_unpaid) = unpaid(sources.extra_course_payments);

    ProvisionalIncome {
        kindergarten_unpaid,
        extra_course_unpaid,
        total_unpaid: kindergarten_unpaid + extra_course_unpaid,
        kindergarten_unpaid_count,
        extra_course_unpaid_count,
    }
}
