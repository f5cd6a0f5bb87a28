//! Shared fixtures for task unit tests.

use chrono::{DateTime, Local, NaiveDate, Utc};
use eyre::OptionExt;
use mockable::Clock;

/// Clock pinned to noon local time on a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    pub fn on(date: NaiveDate) -> eyre::Result<Self> {
        let noon = date.and_hms_opt(12, 0, 0).ok_or_eyre("noon is a valid time")?;
        let now = noon
            .and_local_timezone(Local)
            .earliest()
            .ok_or_eyre("noon exists in the local time zone")?;
        Ok(Self { now })
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }
}

pub fn date(year: i32, month: u32, day: u32) -> eyre::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_eyre("valid calendar date")
}

/// The date every fixed-clock test runs on.
pub fn today() -> eyre::Result<NaiveDate> {
    date(2026, 3, 10)
}
