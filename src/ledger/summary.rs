use serde::{Deserialize, Serialize};

use crate::catalog::Plan;

use super::ledger::Ledger;

/// One slice of the plan-share breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanShare {
    pub plan: Plan,
    pub members: usize,
    pub revenue: f64,
}

/// Aggregated totals the dashboard binds its metric tiles and charts to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueSummary {
    pub active_members: usize,
    pub membership_revenue: f64,
    pub shop_sales: f64,
    pub total_revenue: f64,
    /// Catalog-ordered; plans nobody holds are omitted.
    pub plan_shares: Vec<PlanShare>,
}

impl RevenueSummary {
    /// Captures a snapshot of the ledger's revenue metrics.
    pub fn capture(ledger: &Ledger) -> Self {
        let distribution = ledger.plan_distribution();
        let plan_shares = Plan::ALL
            .into_iter()
            .filter_map(|plan| {
                distribution.get(&plan).map(|&members| PlanShare {
                    plan,
                    members,
                    revenue: plan.price() * members as f64,
                })
            })
            .collect();
        Self {
            active_members: ledger.active_members(),
            membership_revenue: ledger.membership_revenue(),
            shop_sales: ledger.shop_sales_total,
            total_revenue: ledger.total_revenue(),
            plan_shares,
        }
    }
}
