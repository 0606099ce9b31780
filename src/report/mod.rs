//! Report module - terminal output for profiles, test results and run summaries

pub mod results;
pub mod summary;
pub mod tables;

pub use results::*;
pub use summary::*;
pub use tables::*;
