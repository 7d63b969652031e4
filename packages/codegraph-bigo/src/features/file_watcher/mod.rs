//! Re-analysis watcher
//!
//! Host-side trigger: watches a directory, debounces changes per path, and
//! re-runs analysis on files that have gone quiet. The engine never depends
//! on this module.

pub mod application;
pub mod infrastructure;
pub mod ports;

// Re-export application layer (primary interface)
pub use application::{
    analyze_file, collect_files, AnalyzeOnChange, FileAnalysis, SKIPPED_DIRS,
};

pub use infrastructure::{Debouncer, FileWatcher};

pub use ports::{FileChangeEvent, ReanalysisHandler, WatchConfig, DEFAULT_DEBOUNCE};
