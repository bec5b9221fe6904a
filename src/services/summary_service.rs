use std::collections::BTreeMap;

use crate::catalog::Plan;
use crate::ledger::{Ledger, RevenueSummary};

pub struct SummaryService;

impl SummaryService {
    /// Captures the dashboard snapshot for the current ledger state.
    pub fn capture(ledger: &Ledger) -> RevenueSummary {
        RevenueSummary::capture(ledger)
    }

    /// Member counts per plan, for the plan-share chart.
    pub fn plan_distribution(ledger: &Ledger) -> BTreeMap<Plan, usize> {
        ledger.plan_distribution()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::ledger::Member;

    use super::*;

    #[test]
    fn total_revenue_is_membership_plus_shop_sales() {
        let mut ledger = Ledger::seeded("Test Gym");
        let due = NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
        ledger.register_member(Member::new("Akosua Sarpong", "", Plan::Elite, due));
        ledger.shop_sales_total = 7.0;

        let summary = SummaryService::capture(&ledger);
        assert_eq!(
            summary.total_revenue,
            summary.membership_revenue + summary.shop_sales
        );
        assert_eq!(summary.total_revenue, 157.0);
    }

    #[test]
    fn distribution_counts_every_member_per_plan() {
        let mut ledger = Ledger::seeded("Test Gym");
        let due = NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
        ledger.register_member(Member::new("A", "", Plan::Pro, due));
        ledger.register_member(Member::new("B", "", Plan::Pro, due));
        ledger.register_member(Member::new("C", "", Plan::Elite, due));

        let distribution = SummaryService::plan_distribution(&ledger);
        assert_eq!(distribution.get(&Plan::Pro), Some(&3));
        assert_eq!(distribution.get(&Plan::Elite), Some(&1));
        assert_eq!(distribution.get(&Plan::Basic), None);
    }
}
