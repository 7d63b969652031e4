//! Ports - Interface definitions for the re-analysis watcher

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::Result;
use crate::features::parsing::ports::LanguageId;

/// Default quiet window before a changed file is re-analyzed
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// File change event types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChangeEvent {
    Created(PathBuf),
    Modified(PathBuf),
    Deleted(PathBuf),
}

impl FileChangeEvent {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileChangeEvent::Created(p) => p,
            FileChangeEvent::Modified(p) => p,
            FileChangeEvent::Deleted(p) => p,
        }
    }

    pub fn event_type(&self) -> &str {
        match self {
            FileChangeEvent::Created(_) => "created",
            FileChangeEvent::Modified(_) => "modified",
            FileChangeEvent::Deleted(_) => "deleted",
        }
    }
}

/// Configuration for the watcher
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Root directory to watch
    pub root_path: PathBuf,

    /// File extensions to watch. If empty, watches all files
    pub extensions: Vec<String>,

    /// Trailing-edge debounce window: a path is handed over once it has been
    /// quiet this long
    pub debounce_duration: Duration,

    /// Patterns to ignore (`**/dir/**` or plain substrings)
    pub ignore_patterns: Vec<String>,

    /// Enable recursive watching of subdirectories
    pub recursive: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            extensions: LanguageId::ALL
                .iter()
                .flat_map(|lang| lang.extensions())
                .map(|ext| ext.to_string())
                .collect(),
            debounce_duration: DEFAULT_DEBOUNCE,
            ignore_patterns: vec![
                "**/node_modules/**".to_string(),
                "**/.git/**".to_string(),
                "**/target/**".to_string(),
                "**/__pycache__/**".to_string(),
            ],
            recursive: true,
        }
    }
}

impl WatchConfig {
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            ..Self::default()
        }
    }

    pub fn with_debounce(mut self, debounce_duration: Duration) -> Self {
        self.debounce_duration = debounce_duration;
        self
    }
}

/// Receives debounced changes
pub trait ReanalysisHandler: Send + Sync {
    /// A file was created or modified and has been quiet for the debounce window
    fn reanalyze(&mut self, path: &Path) -> Result<()>;

    /// A file was deleted
    fn removed(&mut self, _path: &Path) {}

    /// Called when an error occurs in the watcher or in `reanalyze`
    fn handle_error(&mut self, error: String);
}
