#![forbid(unsafe_code)]

pub mod error;
pub mod indicators;
pub mod observe;
pub mod pipeline;
pub mod scoring;
pub mod signals;

pub use error::ConfigurationError;
pub use pipeline::{
    CompositeResult, EngineSettings, evaluate, evaluate_raw, evaluate_with, validate_catalog,
};
