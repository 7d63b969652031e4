//! Severity tiers for presenting complexity classes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ComplexityClass;

/// Presentation tier of a complexity class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// O(1), O(log n)
    Low,
    /// O(n), O(n log n)
    Moderate,
    /// O(n²)
    Elevated,
    /// O(n³), O(2^n), O(n!)
    High,
    /// Anything without a tier of its own (O(n^k))
    Unknown,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Low,
        Severity::Moderate,
        Severity::Elevated,
        Severity::High,
        Severity::Unknown,
    ];

    pub fn of(class: ComplexityClass) -> Self {
        match class {
            ComplexityClass::Constant | ComplexityClass::Logarithmic => Self::Low,
            ComplexityClass::Linear | ComplexityClass::Linearithmic => Self::Moderate,
            ComplexityClass::Quadratic => Self::Elevated,
            ComplexityClass::Cubic | ComplexityClass::Exponential | ComplexityClass::Factorial => {
                Self::High
            }
            ComplexityClass::Polynomial(_) => Self::Unknown,
        }
    }

    /// Default display color (`#RRGGBB`)
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::Low => "#4CAF50",
            Self::Moderate => "#2196F3",
            Self::Elevated => "#FF9800",
            Self::High => "#F44336",
            Self::Unknown => "#9E9E9E",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Elevated => "elevated",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown severity '{}'", s))
    }
}
