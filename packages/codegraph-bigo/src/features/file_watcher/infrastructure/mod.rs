//! Infrastructure - External dependency implementations
//!
//! Uses `notify` crate for cross-platform file system events

mod debouncer;
mod file_watcher;

pub use debouncer::Debouncer;
pub use file_watcher::FileWatcher;
