//! Complexity Analysis
//!
//! Estimates the Big-O class of each function body from three syntactic
//! signals: recursion, superlinear built-in calls, and loop nesting.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Domain Layer                            │
//! │  - ComplexityClass (O(1) … O(n!))       │
//! │  - BuiltinComplexityTable               │
//! │  - Severity (presentation tiers)        │
//! │  - AnalysisResult / ClassificationSignal│
//! └─────────────────────────────────────────┘
//!                   ▲
//!                   │
//! ┌─────────────────────────────────────────┐
//! │ Infrastructure Layer                    │
//! │  - RecursionDetector                    │
//! │  - Brace/IndentLoopMeter                │
//! │  - ComplexityClassifier (precedence)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use codegraph_bigo::features::cost_analysis::{ComplexityClass, ComplexityClassifier};
//! use codegraph_bigo::features::parsing::LanguageFamily;
//!
//! let classifier = ComplexityClassifier::for_family(LanguageFamily::BraceDelimited);
//! let (class, signal) = classifier.classify("total", "for (const x of xs) { s += x; }");
//! assert_eq!(class, ComplexityClass::Linear);
//! println!("{} ({})", class, signal.explanation());
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::{ComplexityAnalysisUseCase, ComplexityAnalysisUseCaseImpl};

// Re-exports for convenience
pub use domain::{
    AnalysisResult, BuiltinComplexityTable, ClassificationSignal, ComplexityClass,
    ParseComplexityError, Severity,
};

pub use infrastructure::ComplexityClassifier;
