/*
 * Codegraph Big-O - heuristic complexity estimation
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (SourceUnit, FunctionSpan, LineIndex)
 * - features/    : Vertical slices (parsing → cost_analysis, file_watcher)
 * - pipeline/    : Dispatcher (language tag → extractor + classifier)
 * - config/      : Host-owned analyzer configuration
 *
 * The engine is a pure function of (text, language tag): no I/O, no caching,
 * no state between calls.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

pub mod config;
pub mod errors;
pub mod features;
pub mod pipeline;
pub mod shared;

pub use errors::{BigOError, Result};
pub use features::cost_analysis::{AnalysisResult, ClassificationSignal, ComplexityClass, Severity};
pub use features::parsing::{LanguageFamily, LanguageId};
pub use pipeline::{analyze, Dispatcher};
pub use shared::models::{FunctionSpan, LineIndex, Location, SourceUnit};
