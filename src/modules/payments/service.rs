use chrono::NaiveDate;
use linarqa_core::sum_amounts;
use linarqa_models::{Payment, PaymentFilterParams, PaymentStatus};
use tracing::{debug, instrument};

use crate::modules::payments::model::{PaymentStatistics, PendingPayments};
use crate::utils::filter::matches_criterion;

pub struct PaymentService;

impl PaymentService {
    /// Payments matching every criterion set in `params`, in input order.
    ///
    /// The month criterion applies only when both `month` and `year` are set
    /// and compares against the due date.
    #[instrument(skip_all, fields(payments = payments.len()))]
    pub fn filter_payments<'a>(
        payments: &'a [Payment],
        params: &PaymentFilterParams,
    ) -> Vec<&'a Payment> {
        let month = params.month_key();
        let filtered: Vec<&Payment> = payments
            .iter()
            .filter(|payment| {
                matches_criterion(params.status.as_ref(), &payment.status)
                    && params
                        .student_id
                        .as_ref()
                        .is_none_or(|id| payment.student_id.as_ref() == Some(id))
                    && params
                        .course_id
                        .as_ref()
                        .is_none_or(|id| payment.course_id.as_ref() == Some(id))
                    && month.is_none_or(|key| key.contains(payment.due_date))
            })
            .collect();

        debug!(matched = filtered.len(), "Filtered payments");
        filtered
    }

    /// Counts per status and decimal totals of a payment set.
    #[instrument(skip_all)]
    pub fn summarize_payments<'a, I>(payments: I) -> PaymentStatistics
    where
        I: IntoIterator<Item = &'a Payment>,
    {
        let mut stats = PaymentStatistics::default();
        let mut amounts = Vec::new();
        let mut paid = Vec::new();

        for payment in payments {
            stats.total_payments += 1;
            amounts.push(payment.amount);
            match payment.status {
                PaymentStatus::Paid => {
                    stats.paid_payments += 1;
                    paid.push(payment.amount);
                }
                PaymentStatus::Unpaid => stats.unpaid_payments += 1,
                PaymentStatus::Overdue => stats.overdue_payments += 1,
                PaymentStatus::Partial | PaymentStatus::Other => {}
            }
        }

        stats.total_amount = sum_amounts(amounts);
        stats.paid_amount = sum_amounts(paid);
        stats.expected_amount = stats.total_amount;

        debug!(
            total = stats.total_payments,
            paid = stats.paid_payments,
            "Computed payment statistics"
        );
        stats
    }

    /// Status as of `today`: an UNPAID or PARTIAL bill past its due date
    /// reports OVERDUE. A bill due today is not overdue yet.
    pub fn effective_status(payment: &Payment, today: NaiveDate) -> PaymentStatus {
        match payment.status {
            PaymentStatus::Unpaid | PaymentStatus::Partial if payment.due_date < today => {
                PaymentStatus::Overdue
            }
            status => status,
        }
    }

    /// Payments whose effective status is OVERDUE as of `today`.
    #[instrument(skip_all, fields(today = %today))]
    pub fn overdue_payments<'a, I>(payments: I, today: NaiveDate) -> Vec<&'a Payment>
    where
        I: IntoIterator<Item = &'a Payment>,
    {
        let overdue: Vec<&Payment> = payments
            .into_iter()
            .filter(|p| Self::effective_status(p, today) == PaymentStatus::Overdue)
            .collect();
        debug!(count = overdue.len(), "Found overdue payments");
        overdue
    }

    /// Amounts and counts still expected from both payment sources.
    #[instrument(skip_all, fields(kindergarten = kindergarten.len(), extra = extra_courses.len()))]
    pub fn pending_summary(kindergarten: &[Payment], extra_courses: &[Payment]) -> PendingPayments {
        let pending = |payments: &[Payment]| {
            let pending: Vec<&Payment> = payments.iter().filter(|p| p.status.is_pending()).collect();
            (pending.len(), sum_amounts(pending.iter().map(|p| p.amount)))
        };
        let (kindergarten_count, kindergarten_pending) = pending(kindergarten);
        let (extra_course_count, extra_course_pending) = pending(extra_courses);

        PendingPayments {
            kindergarten_pending,
            extra_course_pending,
            total_pending: kindergarten_pending + extra_course_pending,
            kindergarten_count,
            extra_course_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linarqa_core::MonthKey;
    use linarqa_models::{CourseId, StudentId};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn payment(amount: Decimal, status: PaymentStatus, due: (i32, u32, u32)) -> Payment {
        Payment {
            id: Default::default(),
            student_id: Some(StudentId::from("s1")),
            student_name: None,
            course_id: Some(CourseId::from("c1")),
            course_name: None,
            payment_type: None,
            amount,
            status,
            due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap(),
            paid_date: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_summary_counts_and_amounts() {
        let payments = vec![
            payment(dec!(100), PaymentStatus::Paid, (2024, 1, 5)),
            payment(dec!(50), PaymentStatus::Unpaid, (2024, 1, 5)),
        ];
        let stats = PaymentService::summarize_payments(&payments);
        assert_eq!(
            stats,
            PaymentStatistics {
                total_payments: 2,
                paid_payments: 1,
                unpaid_payments: 1,
                overdue_payments: 0,
                total_amount: dec!(150),
                paid_amount: dec!(100),
                expected_amount: dec!(150),
            }
        );
        assert_eq!(stats.outstanding_amount(), dec!(50));
    }

    #[test]
    fn test_summary_of_nothing_is_zero() {
        assert_eq!(
            PaymentService::summarize_payments(&Vec::<Payment>::new()),
            PaymentStatistics::default()
        );
    }

    #[test]
    fn test_decimal_sum_is_exact() {
        let payments = vec![
            payment(dec!(0.1), PaymentStatus::Paid, (2024, 1, 5)),
            payment(dec!(0.2), PaymentStatus::Paid, (2024, 1, 5)),
        ];
        let stats = PaymentService::summarize_payments(&payments);
        assert_eq!(stats.paid_amount, dec!(0.3));
        assert_eq!(stats.expected_amount, dec!(0.3));
    }

    #[test]
    fn test_effective_status() {
        let yesterday = (2024, 3, 9);
        let day = (2024, 3, 10);
        assert_eq!(
            PaymentService::effective_status(&payment(dec!(1), PaymentStatus::Unpaid, yesterday), today()),
            PaymentStatus::Overdue
        );
        assert_eq!(
            PaymentService::effective_status(&payment(dec!(1), PaymentStatus::Partial, yesterday), today()),
            PaymentStatus::Overdue
        );
        assert_eq!(
            PaymentService::effective_status(&payment(dec!(1), PaymentStatus::Paid, yesterday), today()),
            PaymentStatus::Paid
        );
        assert_eq!(
            PaymentService::effective_status(&payment(dec!(1), PaymentStatus::Unpaid, day), today()),
            PaymentStatus::Unpaid
        );
    }

    #[test]
    fn test_overdue_payments_keeps_stored_overdue() {
        let payments = vec![
            payment(dec!(1), PaymentStatus::Overdue, (2024, 4, 1)),
            payment(dec!(2), PaymentStatus::Unpaid, (2024, 4, 1)),
            payment(dec!(3), PaymentStatus::Unpaid, (2024, 2, 1)),
        ];
        let overdue = PaymentService::overdue_payments(&payments, today());
        assert_eq!(overdue, vec![&payments[0], &payments[2]]);
    }

    #[test]
    fn test_filter_by_month_and_student() {
        let mut other = payment(dec!(5), PaymentStatus::Paid, (2024, 1, 20));
        other.student_id = Some(StudentId::from("s2"));
        let payments = vec![
            payment(dec!(1), PaymentStatus::Paid, (2024, 1, 5)),
            payment(dec!(2), PaymentStatus::Unpaid, (2024, 2, 5)),
            other,
        ];

        let params = PaymentFilterParams::default().with_month(MonthKey::new(2024, 1).unwrap());
        let january = PaymentService::filter_payments(&payments, &params);
        assert_eq!(january.len(), 2);

        let params = PaymentFilterParams {
            student_id: Some(StudentId::from("s2")),
            ..params
        };
        assert_eq!(PaymentService::filter_payments(&payments, &params), vec![&payments[2]]);
    }

    #[test]
    fn test_filter_by_status_and_course() {
        let mut kindergarten = payment(dec!(7), PaymentStatus::Paid, (2024, 1, 5));
        kindergarten.course_id = None;
        let payments = vec![payment(dec!(1), PaymentStatus::Paid, (2024, 1, 5)), kindergarten];

        let params = PaymentFilterParams {
            status: Some(PaymentStatus::Paid),
            course_id: Some(CourseId::from("c1")),
            ..Default::default()
        };
        assert_eq!(PaymentService::filter_payments(&payments, &params), vec![&payments[0]]);
    }

    #[test]
    fn test_month_without_year_is_ignored() {
        let payments = vec![payment(dec!(1), PaymentStatus::Paid, (2024, 1, 5))];
        let params = PaymentFilterParams {
            month: Some(2),
            ..Default::default()
        };
        assert_eq!(PaymentService::filter_payments(&payments, &params).len(), 1);
    }

    #[test]
    fn test_pending_summary() {
        let kindergarten = vec![
            payment(dec!(500), PaymentStatus::Unpaid, (2024, 1, 5)),
            payment(dec!(500), PaymentStatus::Paid, (2024, 1, 5)),
            payment(dec!(250.50), PaymentStatus::Partial, (2024, 1, 5)),
        ];
        let extra = vec![payment(dec!(300), PaymentStatus::Overdue, (2024, 1, 5))];

        let pending = PaymentService::pending_summary(&kindergarten, &extra);
        assert_eq!(pending.kindergarten_pending, dec!(750.50));
        assert_eq!(pending.kindergarten_count, 2);
        assert_eq!(pending.extra_course_pending, dec!(300));
        assert_eq!(pending.extra_course_count, 1);
        assert_eq!(pending.total_pending, dec!(1050.50));
    }
}
