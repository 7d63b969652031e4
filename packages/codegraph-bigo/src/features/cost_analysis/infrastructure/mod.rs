//! Complexity analysis infrastructure

mod classifier;
mod loop_nesting;
mod recursion;
mod tokens;

pub use classifier::ComplexityClassifier;
pub use loop_nesting::{BraceLoopMeter, IndentLoopMeter, LoopNestingMeter};
pub use recursion::{Recursion, RecursionDetector};
