use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Plan;

/// Represents one registered gym member.
///
/// Name and phone are stored exactly as given; the front-desk form performs
/// no validation, empty strings included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub plan: Plan,
    pub next_payment: NaiveDate,
    pub status: MemberStatus,
}

impl Member {
    /// Creates a new member in `Active` standing.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        plan: Plan,
        next_payment: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
            plan,
            next_payment,
            status: MemberStatus::Active,
        }
    }
}

/// Membership standing. Registration always starts members as `Active` and
/// nothing transitions them out of it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MemberStatus {
    #[default]
    Active,
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberStatus::Active => f.write_str("Active"),
        }
    }
}
