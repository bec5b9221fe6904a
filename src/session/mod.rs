//! Session facade that scopes ledger state to one interactive admin session.
//!
//! Each UI session owns exactly one [`Session`]; handlers receive it
//! explicitly instead of reaching for process-wide state, so independent
//! sessions (and tests) never share a ledger.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::catalog::Plan;
use crate::config::Config;
use crate::ledger::{Ledger, Member, RevenueSummary};
use crate::services::{MemberService, SaleService, ServiceResult, SummaryService};
use crate::time::{Clock, SystemClock};

/// Owns the ledger for one admin session and exposes the handler-facing API.
///
/// Dropping the session discards all members and sales; nothing is persisted.
pub struct Session {
    config: Config,
    clock: Box<dyn Clock>,
    ledger: Ledger,
}

impl Session {
    /// Starts a session on the system clock.
    pub fn start(config: Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Starts a session with an injected clock.
    pub fn with_clock(config: Config, clock: Box<dyn Clock>) -> Self {
        let ledger = if config.seed_demo_member {
            Ledger::seeded(config.gym_name.clone())
        } else {
            Ledger::new(config.gym_name.clone())
        };
        Self {
            config,
            clock,
            ledger,
        }
    }

    /// Registers a member from the form fields and returns the new id.
    pub fn register_member(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
        plan_label: &str,
    ) -> ServiceResult<Uuid> {
        MemberService::register_by_label(
            &mut self.ledger,
            self.clock.as_ref(),
            &self.config,
            name,
            phone,
            plan_label,
        )
    }

    /// Records a shop sale from a button caption and returns the new total.
    pub fn record_sale(&mut self, item_label: &str) -> ServiceResult<f64> {
        SaleService::record_by_label(&mut self.ledger, item_label)
    }

    pub fn summary(&self) -> RevenueSummary {
        SummaryService::capture(&self.ledger)
    }

    pub fn plan_distribution(&self) -> BTreeMap<Plan, usize> {
        SummaryService::plan_distribution(&self.ledger)
    }

    pub fn search_members(&self, query: &str) -> Vec<&Member> {
        MemberService::search(&self.ledger, query)
    }

    pub fn members(&self) -> &[Member] {
        &self.ledger.members
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::start(Config::default())
    }
}
