//! Search engine for skill knowledge tables
//!
//! BM25 ranking over per-query corpora, keyword-based domain routing, and
//! composite searches built from single-table lookups.

pub mod bm25;
pub mod router;
pub mod table;
pub mod tokenizer;

pub use bm25::{Bm25Index, Bm25Params};
pub use router::{DomainKeywords, DomainRouter};
pub use table::{Row, ScoredRow, TableQuery, load_table, search_table};
pub use tokenizer::Tokenizer;
