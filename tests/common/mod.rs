use chrono::{DateTime, NaiveDate, Utc};

use gym_core::config::Config;
use gym_core::session::Session;
use gym_core::time::Clock;

/// Deterministic clock pinned to a known registration date.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.and_hms_opt(9, 0, 0).unwrap().and_utc()
    }
}

pub fn registration_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
}

/// Creates a seeded session pinned to [`registration_day`].
pub fn seeded_session() -> Session {
    Session::with_clock(Config::default(), Box::new(FixedClock(registration_day())))
}
