//! Domain models for complexity analysis
//!
//! Pure value types: the Big-O taxonomy, the signal that decided a
//! classification, and the per-function result.

mod builtin_table;
mod severity;

pub use builtin_table::{BuiltinComplexityTable, BRACE_BUILTINS, INDENT_BUILTINS};
pub use severity::Severity;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::shared::models::FunctionSpan;

/// Big-O complexity classes
///
/// Ordered by growth rate (ascending). `Polynomial(k)` is only produced for
/// k > 3 and sorts between `Cubic` and `Exponential`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexityClass {
    /// O(1) - Constant time
    Constant,
    /// O(log n) - Logarithmic time
    Logarithmic,
    /// O(n) - Linear time
    Linear,
    /// O(n log n) - Linearithmic time
    Linearithmic,
    /// O(n²) - Quadratic time
    Quadratic,
    /// O(n³) - Cubic time
    Cubic,
    /// O(n^k) - Polynomial time, k > 3
    Polynomial(u32),
    /// O(2^n) - Exponential time
    Exponential,
    /// O(n!) - Factorial time
    Factorial,
}

impl ComplexityClass {
    /// Class for a loop-nesting depth: 0 → O(1), 1 → O(n), 2 → O(n²), ...
    pub fn from_loop_depth(depth: usize) -> Self {
        match depth {
            0 => Self::Constant,
            1 => Self::Linear,
            2 => Self::Quadratic,
            3 => Self::Cubic,
            k => Self::Polynomial(u32::try_from(k).unwrap_or(u32::MAX)),
        }
    }

    /// Bare notation without the `O(...)` wrapper (e.g., "n log n")
    pub fn notation(&self) -> Cow<'static, str> {
        match self {
            Self::Constant => Cow::Borrowed("1"),
            Self::Logarithmic => Cow::Borrowed("log n"),
            Self::Linear => Cow::Borrowed("n"),
            Self::Linearithmic => Cow::Borrowed("n log n"),
            Self::Quadratic => Cow::Borrowed("n²"),
            Self::Cubic => Cow::Borrowed("n³"),
            Self::Polynomial(k) => Cow::Owned(format!("n^{}", k)),
            Self::Exponential => Cow::Borrowed("2^n"),
            Self::Factorial => Cow::Borrowed("n!"),
        }
    }

    /// Is this considered slow? (>= O(n²))
    pub fn is_slow(&self) -> bool {
        *self >= Self::Quadratic
    }

    /// Get ordering key for comparison
    fn order_key(&self) -> (u8, u32) {
        match self {
            Self::Constant => (0, 0),
            Self::Logarithmic => (1, 0),
            Self::Linear => (2, 0),
            Self::Linearithmic => (3, 0),
            Self::Quadratic => (4, 0),
            Self::Cubic => (5, 0),
            Self::Polynomial(k) => (6, *k),
            Self::Exponential => (7, 0),
            Self::Factorial => (8, 0),
        }
    }
}

impl PartialOrd for ComplexityClass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComplexityClass {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O({})", self.notation())
    }
}

/// Error returned when a string is not a known complexity notation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized complexity notation: '{0}'")]
pub struct ParseComplexityError(pub String);

impl FromStr for ComplexityClass {
    type Err = ParseComplexityError;

    /// Accepts "O(n log n)" as well as the bare "n log n"; `^2`/`^3` are
    /// accepted for `²`/`³`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix("O(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed)
            .trim();

        let class = match inner {
            "1" => Self::Constant,
            "log n" => Self::Logarithmic,
            "n" => Self::Linear,
            "n log n" => Self::Linearithmic,
            "n²" | "n^2" => Self::Quadratic,
            "n³" | "n^3" => Self::Cubic,
            "2^n" => Self::Exponential,
            "n!" => Self::Factorial,
            other => match other.strip_prefix("n^").map(str::parse::<u32>) {
                Some(Ok(k)) if k > 3 => Self::Polynomial(k),
                _ => return Err(ParseComplexityError(s.to_string())),
            },
        };
        Ok(class)
    }
}

impl Serialize for ComplexityClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ComplexityClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Which signal decided a classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassificationSignal {
    /// The function calls itself
    Recursion {
        /// A value-returning exit was present (divide-and-conquer proxy)
        divide_and_conquer: bool,
    },
    /// A superlinear built-in call (e.g. `sort`)
    Builtin { name: String },
    /// Maximum loop-nesting depth (0 when no loop was found)
    LoopNesting { depth: usize },
}

impl ClassificationSignal {
    /// One-line human explanation
    pub fn explanation(&self) -> String {
        match self {
            Self::Recursion {
                divide_and_conquer: true,
            } => "recursive call with a value-returning exit (divide-and-conquer assumed)".to_string(),
            Self::Recursion {
                divide_and_conquer: false,
            } => "recursive call without a value-returning exit (branching assumed)".to_string(),
            Self::Builtin { name } => format!("calls built-in '{}'", name),
            Self::LoopNesting { depth: 0 } => "no loops, recursion or costly built-ins".to_string(),
            Self::LoopNesting { depth: 1 } => "single loop".to_string(),
            Self::LoopNesting { depth } => format!("loops nested {} deep", depth),
        }
    }
}

/// Complexity of one function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub span: FunctionSpan,
    pub complexity: ComplexityClass,
    pub signal: ClassificationSignal,
}

impl AnalysisResult {
    pub fn name(&self) -> &str {
        &self.span.name
    }

    pub fn severity(&self) -> Severity {
        Severity::of(self.complexity)
    }

    /// Is this function slow? (>= O(n²))
    pub fn is_slow(&self) -> bool {
        self.complexity.is_slow()
    }
}
