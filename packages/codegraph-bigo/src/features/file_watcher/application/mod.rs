//! Application layer for the re-analysis watcher

mod file_selection;
mod reanalysis;

pub use file_selection::{collect_files, SKIPPED_DIRS};
pub use reanalysis::{analyze_file, AnalyzeOnChange, FileAnalysis};
