use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Approval lifecycle value of a request. The server is case-sensitive and
/// expects title case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// Case-insensitive parse, so "approved", "APPROVED" and "Approved" all
    /// normalize to the same value.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Title-case wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Pending => "🟡",
            Self::Approved => "🟢",
            Self::Rejected => "🔴",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
