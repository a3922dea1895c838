pub mod analyzers;
pub mod cli;
pub mod error;
pub mod metrics;
pub mod models;
pub mod readers;
pub mod utils;

pub use error::{AnalysisError, Result};
