use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Plan, ShopItem};

use super::member::Member;

/// In-memory record of members and cumulative shop sales for one session.
///
/// The member list is append-only and insertion-ordered; no edit or delete
/// operation exists. `shop_sales_total` is a running sum with no per-sale
/// receipt retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub shop_sales_total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    /// Creates an empty ledger carrying the gym's display name.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            members: Vec::new(),
            shop_sales_total: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a ledger seeded with the demo member shown on first render.
    ///
    /// The seed carries no semantic importance; it only keeps the member
    /// directory from rendering empty.
    pub fn seeded(name: impl Into<String>) -> Self {
        let mut ledger = Self::new(name);
        let next_payment = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        ledger.register_member(Member::new(
            "John Adams",
            "+233000000000",
            Plan::Pro,
            next_payment,
        ));
        ledger
    }

    /// Appends a member and returns the assigned id. Always succeeds.
    pub fn register_member(&mut self, member: Member) -> Uuid {
        let id = member.id;
        self.members.push(member);
        self.touch();
        id
    }

    /// Adds the item's price to the running shop total and returns it.
    pub fn record_sale(&mut self, item: ShopItem) -> f64 {
        self.shop_sales_total += item.price();
        self.touch();
        self.shop_sales_total
    }

    /// Sum of the catalog prices of every member's plan.
    pub fn membership_revenue(&self) -> f64 {
        self.members.iter().map(|member| member.plan.price()).sum()
    }

    /// Membership revenue plus the shop running total.
    pub fn total_revenue(&self) -> f64 {
        self.membership_revenue() + self.shop_sales_total
    }

    /// Member counts per plan. Plans nobody holds are absent from the map.
    pub fn plan_distribution(&self) -> BTreeMap<Plan, usize> {
        let mut counts = BTreeMap::new();
        for member in &self.members {
            *counts.entry(member.plan).or_insert(0) += 1;
        }
        counts
    }

    /// Case-insensitive substring search over member names, preserving
    /// registration order. An empty query returns every member.
    pub fn search_members(&self, query: &str) -> Vec<&Member> {
        let needle = query.to_ascii_lowercase();
        self.members
            .iter()
            .filter(|member| member.name.to_ascii_lowercase().contains(&needle))
            .collect()
    }

    pub fn active_members(&self) -> usize {
        self.members.len()
    }

    pub fn member(&self, id: Uuid) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_ledger_starts_with_the_demo_member() {
        let ledger = Ledger::seeded("Test Gym");
        assert_eq!(ledger.active_members(), 1);
        assert_eq!(ledger.members[0].name, "John Adams");
        assert_eq!(ledger.members[0].plan, Plan::Pro);
        assert_eq!(ledger.shop_sales_total, 0.0);
    }

    #[test]
    fn search_is_case_insensitive_and_order_preserving() {
        let mut ledger = Ledger::seeded("Test Gym");
        let date = NaiveDate::from_ymd_opt(2026, 9, 4).unwrap();
        ledger.register_member(Member::new("Ama Johnson", "+233111111111", Plan::Basic, date));
        ledger.register_member(Member::new("Kwame Mensah", "", Plan::Elite, date));

        let hits = ledger.search_members("john");
        let names: Vec<&str> = hits.iter().map(|member| member.name.as_str()).collect();
        assert_eq!(names, ["John Adams", "Ama Johnson"]);

        assert!(ledger.search_members("zzz").is_empty());
        assert_eq!(ledger.search_members("").len(), 3);
    }

    #[test]
    fn plan_distribution_of_an_empty_ledger_is_empty() {
        let ledger = Ledger::new("Test Gym");
        assert!(ledger.plan_distribution().is_empty());
    }

    #[test]
    fn sales_accumulate_without_a_receipt_log() {
        let mut ledger = Ledger::new("Test Gym");
        ledger.record_sale(ShopItem::Water);
        ledger.record_sale(ShopItem::Protein);
        let total = ledger.record_sale(ShopItem::EnergyDrink);
        assert_eq!(total, 9.0);
        assert_eq!(ledger.shop_sales_total, 9.0);
    }
}
