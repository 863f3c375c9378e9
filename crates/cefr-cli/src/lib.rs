//! CLI library components for the `cefr` binary.

pub mod config;
pub mod logging;
pub mod render;
