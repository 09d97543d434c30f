//! Table search: one query against one CSV source.

use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, trace};

use super::bm25::{Bm25Index, Bm25Params};
use super::tokenizer::Tokenizer;
use crate::error::{KbError, Result};

/// One table row: column/value pairs in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    #[must_use]
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    /// Value of `column`, or `None` when the row has no such column.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Keep only `columns` that this row actually has, in `columns` order.
    /// Absent columns are omitted rather than filled in.
    #[must_use]
    pub fn project(&self, columns: &[String]) -> Self {
        let cells = columns
            .iter()
            .filter_map(|column| {
                self.get(column)
                    .map(|value| (column.clone(), value.to_string()))
            })
            .collect();
        Self { cells }
    }

    /// Values of `columns` joined with single spaces; absent columns
    /// contribute an empty string.
    #[must_use]
    pub fn document(&self, columns: &[String]) -> String {
        columns
            .iter()
            .map(|column| self.get(column).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// A ranked row together with its source position and BM25 score.
///
/// Serializes as the bare row; scores are for ranking and human output.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    pub index: usize,
    pub score: f64,
    pub row: Row,
}

impl Serialize for ScoredRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.row.serialize(serializer)
    }
}

/// Load every row of a UTF-8 CSV file with a header line.
///
/// Short records are accepted; their missing trailing cells are treated as
/// absent columns.
pub fn load_table(path: &Path) -> Result<Vec<Row>> {
    let table_err = |source: csv::Error| KbError::Table {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(table_err)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(table_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(table_err)?;
        let cells = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        rows.push(Row::new(cells));
    }

    trace!(path = %path.display(), rows = rows.len(), "table loaded");
    Ok(rows)
}

/// Column layout and ranking setup for one table search.
#[derive(Debug, Clone, Copy)]
pub struct TableQuery<'a> {
    pub search_columns: &'a [String],
    pub output_columns: &'a [String],
    pub tokenizer: Tokenizer,
    pub params: Bm25Params,
}

/// Rank the rows of `path` against `query`.
///
/// A missing file yields no rows; callers that need to report the absence
/// check for the file themselves. Only the first `max_results` ranked rows
/// are considered, and rows scoring zero are dropped, so fewer rows may
/// come back.
pub fn search_table(
    path: &Path,
    spec: &TableQuery<'_>,
    query: &str,
    max_results: usize,
) -> Result<Vec<ScoredRow>> {
    if !path.exists() {
        debug!(path = %path.display(), "table missing");
        return Ok(Vec::new());
    }

    let rows = load_table(path)?;
    let documents: Vec<String> = rows
        .iter()
        .map(|row| row.document(spec.search_columns))
        .collect();

    let index = Bm25Index::fit(spec.tokenizer, spec.params, &documents);
    let ranked = index.score(query);

    let hits: Vec<ScoredRow> = ranked
        .into_iter()
        .take(max_results)
        .filter(|&(_, score)| score > 0.0)
        .map(|(idx, score)| ScoredRow {
            index: idx,
            score,
            row: rows[idx].project(spec.output_columns),
        })
        .collect();

    debug!(
        path = %path.display(),
        rows = rows.len(),
        hits = hits.len(),
        "table searched"
    );
    Ok(hits)
}
