use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Total-time buckets (prep + cook, minutes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    /// Under 30 minutes
    Quick,
    /// 30 to 60 minutes inclusive
    Medium,
    /// Over 60 minutes
    Long,
}

impl TimeBucket {
    /// The single bucket a total time falls into
    pub fn for_minutes(total: u32) -> Self {
        match total {
            0..=29 => TimeBucket::Quick,
            30..=60 => TimeBucket::Medium,
            _ => TimeBucket::Long,
        }
    }

    pub fn contains(self, total: u32) -> bool {
        Self::for_minutes(total) == self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeBucket::Quick => "quick",
            TimeBucket::Medium => "medium",
            TimeBucket::Long => "long",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "quick" => Ok(TimeBucket::Quick),
            "medium" => Ok(TimeBucket::Medium),
            "long" => Ok(TimeBucket::Long),
            other => Err(Error::Validation(format!(
                "Invalid time filter: {other}. Must be quick, medium, or long"
            ))),
        }
    }
}

/// Servings buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ServingsBucket {
    #[serde(rename = "1-2")]
    #[value(name = "1-2")]
    OneToTwo,
    #[serde(rename = "3-4")]
    #[value(name = "3-4")]
    ThreeToFour,
    #[serde(rename = "5+")]
    #[value(name = "5+")]
    FivePlus,
}

impl ServingsBucket {
    /// The single bucket a servings count falls into
    pub fn for_servings(servings: u32) -> Self {
        match servings {
            0..=2 => ServingsBucket::OneToTwo,
            3..=4 => ServingsBucket::ThreeToFour,
            _ => ServingsBucket::FivePlus,
        }
    }

    pub fn contains(self, servings: u32) -> bool {
        Self::for_servings(servings) == self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServingsBucket::OneToTwo => "1-2",
            ServingsBucket::ThreeToFour => "3-4",
            ServingsBucket::FivePlus => "5+",
        }
    }
}

impl fmt::Display for ServingsBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServingsBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1-2" => Ok(ServingsBucket::OneToTwo),
            "3-4" => Ok(ServingsBucket::ThreeToFour),
            "5+" => Ok(ServingsBucket::FivePlus),
            other => Err(Error::Validation(format!(
                "Invalid servings filter: {other}. Must be 1-2, 3-4, or 5+"
            ))),
        }
    }
}
