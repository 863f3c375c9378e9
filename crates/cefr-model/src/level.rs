//! CEFR proficiency levels.
//!
//! Scores are numeric (1 = A1 through 6 = C2) and become fractional after
//! averaging. `CefrLevel` names the nearest band for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A CEFR band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    pub const ALL: [CefrLevel; 6] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
        CefrLevel::C2,
    ];

    /// Numeric encoding used by the lexicon.
    pub fn value(&self) -> u8 {
        match self {
            CefrLevel::A1 => 1,
            CefrLevel::A2 => 2,
            CefrLevel::B1 => 3,
            CefrLevel::B2 => 4,
            CefrLevel::C1 => 5,
            CefrLevel::C2 => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }

    /// Exact level for an integral value in 1..=6.
    pub fn from_value(value: u8) -> Option<Self> {
        CefrLevel::ALL.iter().copied().find(|l| l.value() == value)
    }

    /// Nearest band for a (possibly averaged) score.
    ///
    /// Values below 1 or above 6 clamp to A1 and C2. Non-finite scores have no
    /// band.
    pub fn from_score(score: f64) -> Option<Self> {
        if !score.is_finite() {
            return None;
        }
        let nearest = score.round().clamp(1.0, 6.0) as u8;
        Self::from_value(nearest)
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CefrLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        CefrLevel::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == upper)
            .ok_or_else(|| format!("Unknown CEFR level: {s}"))
    }
}
