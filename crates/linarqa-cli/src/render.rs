//! Text and JSON rendering of derived views.
//!
//! Text output uses the French amount format (`1 234,50 MAD`). JSON output
//! serializes the same report structs with camelCase keys.

use std::fmt::Write;

use anyhow::{Context, Result};
use linarqa::modules::balance::{MonthlyBalance, YearlyBalance};
use linarqa::modules::courses::{CourseOverview, CourseStatistics, OccupancyRatio, SeatAvailability};
use linarqa::modules::payments::{MonthBuckets, PaymentStatistics, PendingPayments};
use linarqa::modules::staff::StaffStatistics;
use linarqa::modules::students::StudentStatistics;
use linarqa_core::{MonthKey, format_amount};
use linarqa_models::{Payment, StaffMember, Student};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesReport<'a> {
    pub statistics: CourseStatistics,
    pub courses: Vec<CourseOverview<'a>>,
}

/// Totals of one month of payment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub month: MonthKey,
    pub payments: usize,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentsReport {
    pub statistics: PaymentStatistics,
    pub overdue_payments: usize,
    /// Most recent month first
    pub history: Vec<MonthSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentsReport<'a> {
    pub statistics: StudentStatistics,
    pub students: Vec<&'a Student>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffReport<'a> {
    pub statistics: StaffStatistics,
    pub staff: Vec<&'a StaffMember>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase", untagged)]
pub enum BalanceView {
    Monthly(MonthlyBalance),
    Yearly(YearlyBalance),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    pub balance: BalanceView,
    pub pending: PendingPayments,
}

/// Month summaries, newest first, limited to `limit` months (0 = all).
pub fn payment_history(buckets: &MonthBuckets<'_, Payment>, limit: usize) -> Vec<MonthSummary> {
    let take = if limit == 0 { usize::MAX } else { limit };
    buckets
        .descending()
        .take(take)
        .map(|bucket| MonthSummary {
            month: bucket.key(),
            payments: bucket.len(),
            total_amount: bucket.total_amount(),
            paid_amount: bucket.paid_amount(),
        })
        .collect()
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize report")
}

fn availability_label(availability: SeatAvailability) -> &'static str {
    match availability {
        SeatAvailability::Available => "available",
        SeatAvailability::Full => "full",
        SeatAvailability::Closed => "closed",
    }
}

fn ratio_label(ratio: OccupancyRatio) -> String {
    match ratio.percent() {
        Some(percent) => format!("{percent:.0}%"),
        None => "n/a".to_string(),
    }
}

// `write!` into a String cannot fail, so its results are ignored below.

pub fn render_courses(report: &CoursesReport<'_>, currency: &str) -> String {
    let mut out = String::new();
    let stats = &report.statistics;
    let _ = writeln!(out, "Courses: {} ({} active)", stats.total_courses, stats.active_courses);
    let _ = writeln!(out, "Active enrollments: {}", stats.total_active_enrollments);
    let _ = writeln!(
        out,
        "Expected monthly revenue: {}",
        format_amount(stats.total_expected_revenue, currency)
    );
    let _ = writeln!(out);

    if report.courses.is_empty() {
        let _ = writeln!(out, "No courses match.");
    }
    for overview in &report.courses {
        let occupancy = &overview.occupancy;
        let _ = writeln!(
            out,
            "- {} [{}] {}/{} seats ({}) {}",
            overview.course.title,
            availability_label(occupancy.availability),
            occupancy.active_enrollments,
            occupancy.capacity,
            ratio_label(occupancy.ratio),
            format_amount(overview.course.monthly_price, currency),
        );
    }
    out
}

pub fn render_payments(report: &PaymentsReport, currency: &str) -> String {
    let mut out = String::new();
    let stats = &report.statistics;
    let _ = writeln!(
        out,
        "Payments: {} ({} paid, {} unpaid, {} overdue)",
        stats.total_payments, stats.paid_payments, stats.unpaid_payments, stats.overdue_payments
    );
    let _ = writeln!(out, "Paid: {}", format_amount(stats.paid_amount, currency));
    let _ = writeln!(out, "Expected: {}", format_amount(stats.expected_amount, currency));
    let _ = writeln!(out, "Past due as of today: {}", report.overdue_payments);
    let _ = writeln!(out);

    for month in &report.history {
        let _ = writeln!(
            out,
            "{}  {:>3} payments  {} / {}",
            month.month,
            month.payments,
            format_amount(month.paid_amount, currency),
            format_amount(month.total_amount, currency),
        );
    }
    out
}

pub fn render_students(report: &StudentsReport<'_>) -> String {
    let mut out = String::new();
    let stats = &report.statistics;
    let _ = writeln!(
        out,
        "Students: {} ({} active, {} inactive, {} left)",
        stats.total_students, stats.active_students, stats.inactive_students, stats.left_students
    );
    for student in &report.students {
        match student.full_name_arabic() {
            Some(arabic) => {
                let _ = writeln!(out, "- {} / {}", student.full_name(), arabic);
            }
            None => {
                let _ = writeln!(out, "- {}", student.full_name());
            }
        }
    }
    out
}

pub fn render_staff(report: &StaffReport<'_>, currency: &str) -> String {
    let mut out = String::new();
    let stats = &report.statistics;
    let _ = writeln!(out, "Staff: {} ({} active)", stats.total_staff, stats.active_staff);
    let _ = writeln!(out, "Total salaries: {}", format_amount(stats.total_salary, currency));
    let _ = writeln!(out, "Average salary: {}", format_amount(stats.average_salary, currency));
    for member in &report.staff {
        let _ = writeln!(
            out,
            "- {} {} ({}){} {}",
            member.first_name,
            member.last_name,
            member.staff_type.display_name(),
            if member.active { "" } else { " inactive" },
            format_amount(member.salary, currency),
        );
    }
    out
}

fn render_month(out: &mut String, balance: &MonthlyBalance, currency: &str) {
    let _ = writeln!(out, "{} {}", balance.month_name, balance.year);
    let _ = writeln!(out, "  Kindergarten income: {}", format_amount(balance.kindergarten_income, currency));
    let _ = writeln!(out, "  Extra-course income: {}", format_amount(balance.extra_course_income, currency));
    let _ = writeln!(out, "  Salaries:            {}", format_amount(balance.total_salaries, currency));
    let _ = writeln!(out, "  Net income:          {}", format_amount(balance.net_income, currency));
    let _ = writeln!(
        out,
        "  Provisional:         {}",
        format_amount(balance.provisional_income.total_unpaid, currency)
    );
}

pub fn render_balance(report: &BalanceReport, currency: &str) -> String {
    let mut out = String::new();
    match &report.balance {
        BalanceView::Monthly(balance) => {
            render_month(&mut out, balance, currency);
            for (course, amount) in &balance.extra_course_breakdown.by_category {
                let _ = writeln!(out, "    {course}: {}", format_amount(*amount, currency));
            }
        }
        BalanceView::Yearly(yearly) => {
            for balance in &yearly.monthly_balances {
                render_month(&mut out, balance, currency);
            }
            let _ = writeln!(out);
            let _ = writeln!(out, "Year {}", yearly.year);
            let _ = writeln!(out, "  Income:   {}", format_amount(yearly.total_yearly_income, currency));
            let _ = writeln!(out, "  Salaries: {}", format_amount(yearly.total_yearly_salaries, currency));
            let _ = writeln!(out, "  Net:      {}", format_amount(yearly.total_yearly_net_income, currency));
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Pending: {} ({} kindergarten, {} extra-course bills)",
        format_amount(report.pending.total_pending, currency),
        report.pending.kindergarten_count,
        report.pending.extra_course_count
    );
    out
}
