//! Complexity Analysis UseCase
//!
//! Runs extract → classify for one language family.

use crate::features::cost_analysis::domain::AnalysisResult;
use crate::features::cost_analysis::infrastructure::ComplexityClassifier;
use crate::features::parsing::infrastructure::{BraceExtractor, IndentExtractor};
use crate::features::parsing::ports::{FunctionExtractor, LanguageFamily};

/// Complexity Analysis UseCase Trait
pub trait ComplexityAnalysisUseCase: Send + Sync {
    fn family(&self) -> LanguageFamily;

    /// Results for every function in `code`, ascending by declaration offset
    fn analyze(&self, code: &str) -> Vec<AnalysisResult>;
}

/// Complexity Analysis UseCase Implementation
pub struct ComplexityAnalysisUseCaseImpl {
    extractor: Box<dyn FunctionExtractor>,
    classifier: ComplexityClassifier,
}

impl ComplexityAnalysisUseCaseImpl {
    pub fn new(extractor: Box<dyn FunctionExtractor>, classifier: ComplexityClassifier) -> Self {
        debug_assert_eq!(extractor.family(), classifier.family());
        Self {
            extractor,
            classifier,
        }
    }

    pub fn for_family(family: LanguageFamily) -> Self {
        let extractor: Box<dyn FunctionExtractor> = match family {
            LanguageFamily::BraceDelimited => Box::new(BraceExtractor::new()),
            LanguageFamily::IndentationDelimited => Box::new(IndentExtractor::new()),
        };
        Self::new(extractor, ComplexityClassifier::for_family(family))
    }
}

impl ComplexityAnalysisUseCase for ComplexityAnalysisUseCaseImpl {
    fn family(&self) -> LanguageFamily {
        self.extractor.family()
    }

    fn analyze(&self, code: &str) -> Vec<AnalysisResult> {
        let masked = self.extractor.mask(code);
        let spans = self.extractor.extract(&masked);

        spans
            .into_iter()
            .map(|span| {
                let (complexity, signal) = self.classifier.classify(&span.name, span.body(&masked));
                tracing::trace!(
                    "{} '{}' → {} ({})",
                    self.family().as_str(),
                    span.name,
                    complexity,
                    signal.explanation()
                );
                AnalysisResult {
                    span,
                    complexity,
                    signal,
                }
            })
            .collect()
    }
}

impl std::fmt::Debug for ComplexityAnalysisUseCaseImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplexityAnalysisUseCaseImpl")
            .field("family", &self.family())
            .finish()
    }
}
