//! Function extraction
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Ports                                   │
//! │  - LanguageId / LanguageFamily          │
//! │  - FunctionExtractor (trait)            │
//! └─────────────────────────────────────────┘
//!                   ▲
//!                   │
//! ┌─────────────────────────────────────────┐
//! │ Infrastructure                          │
//! │  - source mask (comments, strings)      │
//! │  - BraceExtractor  (JS/TS/Java/C/C++)   │
//! │  - IndentExtractor (Python)             │
//! └─────────────────────────────────────────┘
//! ```

pub mod infrastructure;
pub mod ports;

pub use infrastructure::{BraceExtractor, IndentExtractor};
pub use ports::{FunctionExtractor, LanguageFamily, LanguageId};
