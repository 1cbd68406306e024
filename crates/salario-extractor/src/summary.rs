//! Run summary: the progress document written next to the results

use crate::assembler::percent;
use serde::{Deserialize, Serialize};

/// Counters from the last completed run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Posts analyzed
    pub total_posts: usize,

    /// Posts with a salary mention
    pub salaries_posts: usize,

    /// When the run finished (seconds since Unix epoch)
    pub last_timestamp: Option<i64>,
}

impl RunSummary {
    /// Share of posts with a salary mention, rounded to one decimal
    pub fn percent_with_salary(&self) -> f64 {
        percent(self.salaries_posts, self.total_posts)
    }

    /// Human-readable one-line report
    pub fn report(&self) -> String {
        format!(
            "{} posts analyzed, {} with salaries ({}% of the total)",
            self.total_posts,
            self.salaries_posts,
            self.percent_with_salary()
        )
    }
}
