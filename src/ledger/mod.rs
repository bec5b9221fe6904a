//! Ledger domain models and derived revenue metrics.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod member;
pub mod summary;

pub use ledger::Ledger;
pub use member::{Member, MemberStatus};
pub use summary::{PlanShare, RevenueSummary};
