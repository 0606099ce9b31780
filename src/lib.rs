//! Hypnos: Sleep Survey Analysis Library
//!
//! A library for exploring sleep-health survey data: loading and cleaning
//! the dataset, profiling it, rendering charts, and running statistical
//! tests and an ordinary least squares regression.

pub mod charts;
pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
