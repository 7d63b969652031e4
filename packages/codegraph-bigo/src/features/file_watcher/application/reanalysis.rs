//! Re-analysis of changed files
//!
//! Reads a file, infers its language from the extension and runs the engine.
//! Used by the watcher (per debounced change) and by the CLI (per file).

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::AnalyzerConfig;
use crate::errors::{BigOError, Result};
use crate::features::cost_analysis::AnalysisResult;
use crate::features::file_watcher::ports::ReanalysisHandler;
use crate::features::parsing::ports::LanguageId;
use crate::pipeline::Dispatcher;

/// Analysis of one file
#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    pub path: PathBuf,
    pub language: LanguageId,
    /// File contents the result offsets refer to
    #[serde(skip)]
    pub text: String,
    pub results: Vec<AnalysisResult>,
}

/// Read and analyze `path`. `language` overrides extension inference.
pub fn analyze_file(path: &Path, language: Option<LanguageId>) -> Result<FileAnalysis> {
    let language = match language {
        Some(lang) => lang,
        None => path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(LanguageId::from_extension)
            .ok_or_else(|| BigOError::UnsupportedFile(path.to_path_buf()))?,
    };

    let text = std::fs::read_to_string(path)?;
    let results = Dispatcher::global().analyze_language(&text, language);

    Ok(FileAnalysis {
        path: path.to_path_buf(),
        language,
        text,
        results,
    })
}

/// Handler that re-analyzes each changed file and passes the analysis to a sink
pub struct AnalyzeOnChange<F>
where
    F: FnMut(FileAnalysis) + Send + Sync,
{
    config: AnalyzerConfig,
    sink: F,
    errors: Vec<String>,
}

impl<F> AnalyzeOnChange<F>
where
    F: FnMut(FileAnalysis) + Send + Sync,
{
    pub fn new(config: AnalyzerConfig, sink: F) -> Self {
        Self {
            config,
            sink,
            errors: Vec::new(),
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl<F> ReanalysisHandler for AnalyzeOnChange<F>
where
    F: FnMut(FileAnalysis) + Send + Sync,
{
    fn reanalyze(&mut self, path: &Path) -> Result<()> {
        let language = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(LanguageId::from_extension);

        match language {
            Some(lang) if self.config.is_language_enabled(lang) => {
                let analysis = analyze_file(path, Some(lang))?;
                tracing::debug!(
                    "re-analyzed {}: {} functions",
                    path.display(),
                    analysis.results.len()
                );
                (self.sink)(analysis);
            }
            _ => tracing::trace!("skipping {}: language not enabled", path.display()),
        }
        Ok(())
    }

    fn removed(&mut self, path: &Path) {
        tracing::debug!("{} removed", path.display());
    }

    fn handle_error(&mut self, error: String) {
        tracing::warn!("{}", error);
        self.errors.push(error);
    }
}
