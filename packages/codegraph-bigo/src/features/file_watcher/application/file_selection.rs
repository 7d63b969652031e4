//! Which files a batch run analyzes
//!
//! Explicit files and directory walks go through the same language check:
//! a language override selects files of that language, otherwise the
//! extension must map to a language the config enables.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::AnalyzerConfig;
use crate::features::parsing::ports::LanguageId;

/// Directory names never descended into
pub const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "__pycache__"];

/// Files to analyze under `paths`, sorted and de-duplicated
///
/// With `language` set, explicit files are always taken (the override names
/// their language) and walks keep files whose extension maps to it. Without
/// it, a file is taken when its extension maps to an enabled language;
/// explicit files with an unrecognized extension are kept so the caller can
/// report them.
pub fn collect_files(
    paths: &[PathBuf],
    language: Option<LanguageId>,
    config: &AnalyzerConfig,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            let explicit_ok = match (language, extension_language(path)) {
                (Some(_), _) | (None, None) => true,
                (None, Some(lang)) => config.is_language_enabled(lang),
            };
            if explicit_ok {
                files.push(path.clone());
            } else {
                tracing::info!("skipping {}: language not enabled", path.display());
            }
            continue;
        }

        let walker = WalkDir::new(path).into_iter().filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            entry.depth() == 0
                || !(name.starts_with('.') || SKIPPED_DIRS.iter().any(|dir| name == *dir))
        });
        for entry in walker {
            match entry {
                Ok(entry)
                    if entry.file_type().is_file() && walk_wants(entry.path(), language, config) =>
                {
                    files.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("skipping unreadable entry: {}", e),
            }
        }
    }

    files.sort();
    files.dedup();
    files
}

fn extension_language(path: &Path) -> Option<LanguageId> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(LanguageId::from_extension)
}

fn walk_wants(path: &Path, language: Option<LanguageId>, config: &AnalyzerConfig) -> bool {
    match (language, extension_language(path)) {
        (Some(lang), Some(ext_lang)) => lang == ext_lang,
        (None, Some(ext_lang)) => config.is_language_enabled(ext_lang),
        _ => false,
    }
}
