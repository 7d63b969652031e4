//! Trailing-edge debounce keyed by path
//!
//! Every event for a path restarts that path's window; the path becomes due
//! once it has been quiet for the whole window, and only its latest event is
//! reported. Time is always passed in, never read, so callers (and tests)
//! own the clock.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::features::file_watcher::ports::FileChangeEvent;

#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: HashMap<PathBuf, (FileChangeEvent, Instant)>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: HashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record `event` seen at `now`, restarting its path's window
    pub fn record(&mut self, event: FileChangeEvent, now: Instant) {
        self.pending.insert(event.path().clone(), (event, now));
    }

    /// Remove and return every event whose path has been quiet for the
    /// window at `now`, ordered by path
    pub fn due(&mut self, now: Instant) -> Vec<FileChangeEvent> {
        let window = self.window;
        let mut ready: Vec<PathBuf> = self
            .pending
            .iter()
            .filter(|(_, (_, last_seen))| now.saturating_duration_since(*last_seen) >= window)
            .map(|(path, _)| path.clone())
            .collect();
        ready.sort();

        ready
            .into_iter()
            .filter_map(|path| self.pending.remove(&path).map(|(event, _)| event))
            .collect()
    }

    /// Earliest instant at which some pending path becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .values()
            .map(|(_, last_seen)| *last_seen + self.window)
            .min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(crate::features::file_watcher::ports::DEFAULT_DEBOUNCE)
    }
}
