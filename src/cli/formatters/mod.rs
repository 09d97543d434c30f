//! Human-readable renderers for command results

pub mod search_results;
