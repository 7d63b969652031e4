//! Language dispatch
//!
//! Picks the extract/classify pair for a language tag and runs it. The
//! dispatcher holds only stateless strategies, so one instance serves every
//! caller and every thread.

use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::features::cost_analysis::{
    AnalysisResult, ComplexityAnalysisUseCase, ComplexityAnalysisUseCaseImpl,
};
use crate::features::parsing::ports::{LanguageFamily, LanguageId};
use crate::shared::models::SourceUnit;

static DISPATCHER: Lazy<Dispatcher> = Lazy::new(Dispatcher::new);

pub struct Dispatcher {
    brace: ComplexityAnalysisUseCaseImpl,
    indent: ComplexityAnalysisUseCaseImpl,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            brace: ComplexityAnalysisUseCaseImpl::for_family(LanguageFamily::BraceDelimited),
            indent: ComplexityAnalysisUseCaseImpl::for_family(
                LanguageFamily::IndentationDelimited,
            ),
        }
    }

    /// Process-wide instance used by [`analyze`]
    pub fn global() -> &'static Dispatcher {
        &DISPATCHER
    }

    pub fn usecase(&self, language: LanguageId) -> &dyn ComplexityAnalysisUseCase {
        match language.family() {
            LanguageFamily::BraceDelimited => &self.brace,
            LanguageFamily::IndentationDelimited => &self.indent,
        }
    }

    /// Analyze `code` tagged `language`. Unrecognized tags yield no results.
    pub fn analyze(&self, code: &str, language: &str) -> Vec<AnalysisResult> {
        match LanguageId::from_tag(language) {
            Some(lang) => self.analyze_language(code, lang),
            None => {
                tracing::debug!("unrecognized language tag '{}', skipping", language);
                Vec::new()
            }
        }
    }

    pub fn analyze_language(&self, code: &str, language: LanguageId) -> Vec<AnalysisResult> {
        let results = self.usecase(language).analyze(code);
        tracing::debug!(
            "analyzed {} bytes of {}: {} functions",
            code.len(),
            language,
            results.len()
        );
        results
    }

    /// Analyze independent units in parallel; output order follows `units`.
    pub fn analyze_batch(&self, units: &[SourceUnit]) -> Vec<Vec<AnalysisResult>> {
        units
            .par_iter()
            .map(|unit| self.analyze(&unit.text, &unit.language))
            .collect()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze every function in `code`, ascending by declaration offset.
///
/// Never fails: unrecognized languages and malformed code yield fewer (or no)
/// results.
pub fn analyze(code: &str, language: &str) -> Vec<AnalysisResult> {
    Dispatcher::global().analyze(code, language)
}
