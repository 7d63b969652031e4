//! Analysis pipeline: text + language tag → dispatcher → extractor → classifier

pub mod dispatcher;

pub use dispatcher::{analyze, Dispatcher};
