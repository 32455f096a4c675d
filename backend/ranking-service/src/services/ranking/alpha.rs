use crate::error::{RankingError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Novelty weight in the novelty / relevance blend, always within [0.0, 1.0]
///
/// - alpha = 0.0: score is relevance only
/// - alpha = 1.0: score is novelty only
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Alpha(f64);

impl Alpha {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 1.0;

    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(RankingError::invalid("alpha", "must be a number, got NaN"));
        }
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RankingError::invalid(
                "alpha",
                format!("must be between {} and {}, got {}", Self::MIN, Self::MAX, value),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `alpha * novelty + (1 - alpha) * relevance`
    pub fn blend(self, novelty: f64, relevance: f64) -> f64 {
        self.0 * novelty + (1.0 - self.0) * relevance
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self(0.5)
    }
}

impl TryFrom<f64> for Alpha {
    type Error = RankingError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Alpha {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RankingError::invalid("alpha", "missing value"));
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| RankingError::invalid("alpha", format!("not a number: '{}'", trimmed)))?;
        Self::new(value)
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
