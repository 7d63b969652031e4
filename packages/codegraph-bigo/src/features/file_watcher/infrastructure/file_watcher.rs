//! FileWatcher - re-analysis trigger backed by `notify`
//!
//! Raw file system events are filtered (extensions, ignore patterns), fed to a
//! [`Debouncer`], and each path is handed to the [`ReanalysisHandler`] once it
//! has been quiet for the debounce window.

use notify::{
    Config as NotifyConfig, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use crate::errors::{BigOError, Result};
use crate::features::file_watcher::ports::{FileChangeEvent, ReanalysisHandler, WatchConfig};

/// Longest time the processor thread blocks before re-checking `running`
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// FileWatcher - Cross-platform file system event monitor
///
/// # Example
/// ```ignore
/// use codegraph_bigo::features::file_watcher::{FileWatcher, WatchConfig};
/// use std::sync::Arc;
/// use parking_lot::Mutex;
///
/// let handler = Arc::new(Mutex::new(MyHandler::new()));
/// let mut watcher = FileWatcher::new(WatchConfig::new("src"), handler)?;
/// watcher.start()?;
/// ```
pub struct FileWatcher {
    config: WatchConfig,
    handler: Arc<Mutex<dyn ReanalysisHandler>>,
    watcher: Option<RecommendedWatcher>,
    event_tx: Option<Sender<Event>>,
    event_rx: Option<Receiver<Event>>,
    processor_thread: Option<thread::JoinHandle<()>>,
    running: Arc<Mutex<bool>>,
}

impl FileWatcher {
    /// Create a new FileWatcher
    ///
    /// # Errors
    /// Returns error if the root path does not exist or is not a directory
    pub fn new(config: WatchConfig, handler: Arc<Mutex<dyn ReanalysisHandler>>) -> Result<Self> {
        if !config.root_path.exists() {
            return Err(BigOError::watcher(format!(
                "Root path does not exist: {}",
                config.root_path.display()
            )));
        }

        if !config.root_path.is_dir() {
            return Err(BigOError::watcher(format!(
                "Root path is not a directory: {}",
                config.root_path.display()
            )));
        }

        let (event_tx, event_rx) = channel();

        Ok(Self {
            config,
            handler,
            watcher: None,
            event_tx: Some(event_tx),
            event_rx: Some(event_rx),
            processor_thread: None,
            running: Arc::new(Mutex::new(false)),
        })
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        *self.running.lock()
    }

    /// Start watching; spawns the debounce/processor thread
    pub fn start(&mut self) -> Result<()> {
        if *self.running.lock() {
            return Err(BigOError::watcher("Watcher already running"));
        }

        // Recreate channel for restart
        if self.event_rx.is_none() {
            let (tx, rx) = channel();
            self.event_tx = Some(tx);
            self.event_rx = Some(rx);
        }

        let event_tx = self
            .event_tx
            .as_ref()
            .ok_or_else(|| BigOError::watcher("Event transmitter not available"))?
            .clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: std::result::Result<Event, notify::Error>| match res {
                Ok(event) => {
                    let _ = event_tx.send(event);
                }
                Err(e) => {
                    tracing::warn!("file watcher error: {:?}", e);
                }
            },
            NotifyConfig::default(),
        )?;

        let mode = if self.config.recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher.watch(&self.config.root_path, mode)?;
        self.watcher = Some(watcher);

        let event_rx = self
            .event_rx
            .take()
            .ok_or_else(|| BigOError::watcher("Event receiver not available"))?;

        let handler = self.handler.clone();
        let config = self.config.clone();
        let running = self.running.clone();

        *running.lock() = true;
        tracing::info!(
            "watching {} (debounce {:?})",
            config.root_path.display(),
            config.debounce_duration
        );

        self.processor_thread = Some(thread::spawn(move || {
            Self::process_events(event_rx, handler, config, running);
        }));

        Ok(())
    }

    /// Stop watching and join the processor thread
    pub fn stop(&mut self) -> Result<()> {
        if !*self.running.lock() {
            return Ok(());
        }

        *self.running.lock() = false;
        self.watcher = None;

        if let Some(thread) = self.processor_thread.take() {
            thread
                .join()
                .map_err(|_| BigOError::watcher("Failed to join processor thread"))?;
        }

        Ok(())
    }

    fn process_events(
        event_rx: Receiver<Event>,
        handler: Arc<Mutex<dyn ReanalysisHandler>>,
        config: WatchConfig,
        running: Arc<Mutex<bool>>,
    ) {
        let mut debouncer = Debouncer::new(config.debounce_duration);

        while *running.lock() {
            let timeout = debouncer.next_deadline().map_or(POLL_INTERVAL, |deadline| {
                deadline
                    .saturating_duration_since(Instant::now())
                    .min(POLL_INTERVAL)
            });

            match event_rx.recv_timeout(timeout) {
                Ok(event) => {
                    if let Some(change) = Self::convert_event(&event, &config) {
                        tracing::trace!("{} {}", change.event_type(), change.path().display());
                        debouncer.record(change, Instant::now());
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            for change in debouncer.due(Instant::now()) {
                Self::dispatch(&handler, change);
            }
        }
    }

    fn dispatch(handler: &Arc<Mutex<dyn ReanalysisHandler>>, change: FileChangeEvent) {
        let mut handler = handler.lock();
        match &change {
            FileChangeEvent::Deleted(path) => handler.removed(path),
            FileChangeEvent::Created(path) | FileChangeEvent::Modified(path) => {
                if let Err(e) = handler.reanalyze(path) {
                    handler.handle_error(format!(
                        "re-analysis of {} failed: {}",
                        path.display(),
                        e
                    ));
                }
            }
        }
    }

    /// Convert a notify Event, applying extension and ignore filters
    fn convert_event(event: &Event, config: &WatchConfig) -> Option<FileChangeEvent> {
        let path = event.paths.first()?;

        if Self::should_ignore(path, &config.ignore_patterns) {
            return None;
        }

        if !config.extensions.is_empty() {
            let ext = path.extension()?.to_str()?;
            if !config.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
                return None;
            }
        }

        use notify::event::ModifyKind;

        match event.kind {
            EventKind::Create(_) => Some(FileChangeEvent::Created(path.clone())),
            EventKind::Modify(ModifyKind::Data(_)) => Some(FileChangeEvent::Modified(path.clone())),
            EventKind::Modify(ModifyKind::Any) | EventKind::Any => {
                if path.exists() {
                    Some(FileChangeEvent::Modified(path.clone()))
                } else {
                    Some(FileChangeEvent::Deleted(path.clone()))
                }
            }
            EventKind::Remove(_) => Some(FileChangeEvent::Deleted(path.clone())),
            _ => None,
        }
    }

    /// Check if path should be ignored based on glob patterns
    fn should_ignore(path: &Path, ignore_patterns: &[String]) -> bool {
        let Some(path_str) = path.to_str() else {
            return false;
        };

        ignore_patterns.iter().any(|pattern| {
            if pattern.contains("**") {
                // `**/dir/**` matches any path with a `dir` component
                pattern
                    .split("**")
                    .map(|part| part.trim_matches('/'))
                    .filter(|part| !part.is_empty())
                    .any(|dir| {
                        path_str.contains(&format!("/{}/", dir))
                            || path_str.ends_with(&format!("/{}", dir))
                            || path_str.starts_with(&format!("{}/", dir))
                    })
            } else {
                path_str.contains(pattern.as_str())
            }
        })
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
