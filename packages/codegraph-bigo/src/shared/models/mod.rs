//! Value types shared across features

mod source;
mod span;

pub use source::SourceUnit;
pub use span::{FunctionSpan, LineIndex, Location};
