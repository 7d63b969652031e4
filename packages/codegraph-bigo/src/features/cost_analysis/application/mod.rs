//! Application layer for complexity analysis

mod cost_usecase;

pub use cost_usecase::{ComplexityAnalysisUseCase, ComplexityAnalysisUseCaseImpl};
