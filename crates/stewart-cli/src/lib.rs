//! CLI library components for the Stewart analyzer.

pub mod logging;
