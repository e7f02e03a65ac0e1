use crate::text::fold;

use std::fmt;
use std::str::FromStr;

const SUCCESS_SYNONYMS: &[&str] = &[
    "success",
    "succes",
    "successful",
    "paye",
    "paid",
    "confirmed",
    "termine",
    "completed",
];

const FAILED_SYNONYMS: &[&str] = &[
    "failed",
    "failure",
    "echec",
    "cancelled",
    "canceled",
    "annule",
    "rejete",
    "rejected",
];

/// Canonical outcome of a payment or transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Pending,
    Failed,
}

impl Status {
    /// Maps any backend status vocabulary onto the canonical set.
    /// Unknown, empty, or missing values are `Pending`.
    pub fn normalize(raw: Option<&str>) -> Self {
        let folded = match raw {
            Some(raw) => fold(raw.trim()),
            None => return Self::Pending,
        };

        if SUCCESS_SYNONYMS.contains(&folded.as_str()) {
            return Self::Success;
        }

        if FAILED_SYNONYMS.contains(&folded.as_str()) {
            return Self::Failed;
        }

        return Self::Pending;
    }

    pub fn as_str(&self) -> &'static str {
        return match self {
            Self::Success => "SUCCESS",
            Self::Pending => "PENDING",
            Self::Failed => "FAILED",
        };
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.as_str());
    }
}

/// Status axis of the filter criteria; `All` disables it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn accepts(&self, status: Status) -> bool {
        return match self {
            Self::All => true,
            Self::Only(expected) => *expected == status,
        };
    }
}

impl FromStr for StatusFilter {
    type Err = std::convert::Infallible;

    /// Reads the values offered by the status selector. Anything unrecognised means `All`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = match s.trim().to_uppercase().as_str() {
            "SUCCESS" => Self::Only(Status::Success),
            "PENDING" => Self::Only(Status::Pending),
            "FAILED" => Self::Only(Status::Failed),
            _ => Self::All,
        };

        return Ok(filter);
    }
}
