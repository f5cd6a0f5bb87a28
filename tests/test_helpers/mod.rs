//! Shared fixtures for integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use eyre::OptionExt;
use mockable::Clock;
use tasklist::task::{
    adapters::memory::InMemoryTaskRepository, services::TaskService,
    validation::DefaultTaskValidator,
};

/// Service type wired with in-memory storage and a pinned clock.
pub type MemoryTaskService = TaskService<InMemoryTaskRepository, DefaultTaskValidator, FixedClock>;

/// Clock pinned to noon local time on a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Local>,
}

impl FixedClock {
    /// Pins the clock to noon on `date`.
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

/// Builds a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> eyre::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_eyre("valid calendar date")
}

/// The date every integration test runs on.
pub fn today() -> eyre::Result<NaiveDate> {
    date(2026, 6, 15)
}

/// Builds a service over a fresh in-memory repository, returning the
/// repository handle alongside so tests can inspect storage directly.
pub fn memory_service() -> eyre::Result<(MemoryTaskService, InMemoryTaskRepository)> {
    let repository = InMemoryTaskRepository::new();
    let service = TaskService::new(
        Arc::new(repository.clone()),
        Arc::new(DefaultTaskValidator::new()),
        Arc::new(FixedClock::on(today()?)?),
    );
    Ok((service, repository))
}
