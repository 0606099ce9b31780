//! Pipeline module - the analysis stages from raw CSV to fitted model

pub mod clean;
pub mod error;
pub mod loader;
pub mod profile;
pub mod regression;
pub mod schema;
pub mod stats;

pub use clean::*;
pub use error::AnalysisError;
pub use loader::*;
pub use profile::*;
pub use regression::*;
pub use schema::*;
pub use stats::*;
