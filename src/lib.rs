//! skillkb - keyword search over curated skill knowledge bases
//!
//! Ranks rows of small CSV tables against free-text queries with BM25 and
//! routes queries to the most plausible table of a skill catalog.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;
#[cfg(test)]
pub mod test_utils;

pub use error::{KbError, Result};
