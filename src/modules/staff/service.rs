use linarqa_core::SearchTerm;
use linarqa_core::money::{round_cents, sum_amounts};
use linarqa_models::{StaffFilterParams, StaffMember};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::modules::staff::model::StaffStatistics;
use crate::utils::filter::{filter_items, matches_criterion};

pub struct StaffService;

impl StaffService {
    #[instrument(skip_all, fields(staff = staff.len()))]
    pub fn filter_staff<'a>(staff: &'a [StaffMember], params: &StaffFilterParams) -> Vec<&'a StaffMember> {
        let search = SearchTerm::new(params.search.as_deref());
        let filtered = filter_items(staff, &search, |member| {
            matches_criterion(params.staff_type.as_ref(), &member.staff_type)
                && matches_criterion(params.active.as_ref(), &member.active)
        });

        debug!(matched = filtered.len(), "Filtered staff");
        filtered
    }

    #[instrument(skip_all, fields(staff = staff.len()))]
    pub fn summarize_staff(staff: &[StaffMember]) -> StaffStatistics {
        let total_salary = sum_amounts(staff.iter().map(|member| member.salary));
        let average_salary = if staff.is_empty() {
            Decimal::ZERO
        } else {
            round_cents(total_salary / Decimal::from(staff.len()))
        };

        let stats = StaffStatistics {
            total_staff: staff.len(),
            active_staff: staff.iter().filter(|member| member.active).count(),
            total_salary,
            average_salary,
        };

        debug!(active = stats.active_staff, "Computed staff statistics");
        stats
    }
}
