//! CLI library components for the swim-lesson roster reconciler.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
