use chrono::Duration;
use uuid::Uuid;

use crate::catalog::Plan;
use crate::config::Config;
use crate::ledger::{Ledger, Member};
use crate::time::Clock;

use super::ServiceResult;

pub struct MemberService;

impl MemberService {
    /// Registers a new member and returns the assigned id.
    ///
    /// The first payment falls due `config.membership_term_days` after
    /// today. Name and phone are stored as given, empty strings included.
    pub fn register(
        ledger: &mut Ledger,
        clock: &dyn Clock,
        config: &Config,
        name: impl Into<String>,
        phone: impl Into<String>,
        plan: Plan,
    ) -> Uuid {
        let next_payment = clock.today() + Duration::days(config.membership_term_days as i64);
        let member = Member::new(name, phone, plan, next_payment);
        let name = member.name.clone();
        let id = ledger.register_member(member);
        tracing::info!("Registered member `{}` on plan {}", name, plan);
        id
    }

    /// Registers a member from the plan label submitted by the form.
    ///
    /// A label outside the catalog is rejected before the ledger is touched.
    pub fn register_by_label(
        ledger: &mut Ledger,
        clock: &dyn Clock,
        config: &Config,
        name: impl Into<String>,
        phone: impl Into<String>,
        plan_label: &str,
    ) -> ServiceResult<Uuid> {
        let plan = Plan::from_label(plan_label)?;
        Ok(Self::register(ledger, clock, config, name, phone, plan))
    }

    /// Case-insensitive name search preserving registration order.
    pub fn search<'a>(ledger: &'a Ledger, query: &str) -> Vec<&'a Member> {
        ledger.search_members(query)
    }

    pub fn list(ledger: &Ledger) -> Vec<&Member> {
        ledger.members.iter().collect()
    }
}
