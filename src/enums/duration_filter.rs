use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Named coarse date-range selector, resolved client-side into concrete
/// start/end dates before any call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum DurationFilter {
    Today,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    All,
}

impl DurationFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::ThisWeek => "This Week",
            Self::LastWeek => "Last Week",
            Self::ThisMonth => "This Month",
            Self::LastMonth => "Last Month",
            Self::All => "All Time",
        }
    }
}

impl fmt::Display for DurationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
