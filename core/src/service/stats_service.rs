use crate::repository::traits::StatsRepository;
use crate::service::dto::DailyStat;
use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};

pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// The daily star ledger: one monotonic bucket per UTC calendar date.
pub struct StatsService<R: StatsRepository> {
    repo: R,
}

impl<R: StatsRepository> StatsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Credits `weight` stars to `day`. Delegates straight to the store's
    /// atomic increment so concurrent completions on the same day all land.
    pub fn record_completion(&self, day: NaiveDate, weight: u32) -> Result<()> {
        self.repo.add_stars(day, weight)
    }

    /// The trailing window ending today (UTC).
    pub fn trailing_window(&self, days: usize) -> Result<Vec<DailyStat>> {
        self.trailing_window_ending(Utc::now().date_naive(), days)
    }

    /// Exactly `days` entries for `[end - (days-1) .. end]` in ascending
    /// date order; dates with no bucket report a total of 0.
    pub fn trailing_window_ending(&self, end: NaiveDate, days: usize) -> Result<Vec<DailyStat>> {
        let mut window = Vec::with_capacity(days);
        for offset in (0..days as i64).rev() {
            let day = end - Duration::days(offset);
            let total = self.repo.stars_on(day)?;
            window.push(DailyStat::for_date(day, total));
        }
        Ok(window)
    }
}
