use serde::{Deserialize, Serialize};

/// Stores session-level preferences mirroring the front-desk defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display name shown in the dashboard header and stamped on the ledger.
    pub gym_name: String,
    pub currency: String,
    /// Days between registration and the first payment due date.
    #[serde(default = "Config::default_membership_term_days")]
    pub membership_term_days: u32,
    /// Seeds the demo member so the member directory is not empty on first render.
    #[serde(default = "Config::default_seed_demo_member")]
    pub seed_demo_member: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gym_name: "Adams Inn Fitness & Gym Centre".into(),
            currency: "USD".into(),
            membership_term_days: Self::default_membership_term_days(),
            seed_demo_member: Self::default_seed_demo_member(),
        }
    }
}

impl Config {
    pub fn default_membership_term_days() -> u32 {
        30
    }

    pub fn default_seed_demo_member() -> bool {
        true
    }
}
