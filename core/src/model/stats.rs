use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

/// One ledger bucket: total stars earned on a single UTC calendar date.
/// There is exactly one bucket per date and the total only ever grows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StarBucket {
    pub date: NaiveDate,
    pub total_stars: u32,
}

impl StarBucket {
    pub fn new(date: NaiveDate, total_stars: u32) -> Self {
        Self { date, total_stars }
    }
}
