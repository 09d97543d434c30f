//! Composite searches built from single-domain lookups.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use tracing::{debug, info};

use super::{Catalog, SearchFailure, SearchHits, SearchResponse};
use crate::error::Result;
use crate::search::{Row, ScoredRow, load_table};

/// Per-domain hits from a fan-out search, in catalog order.
///
/// Serializes as an object keyed by domain name.
#[derive(Debug, Clone, Default)]
pub struct FanOut {
    pub domains: Vec<SearchHits>,
}

impl FanOut {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    #[must_use]
    pub fn get(&self, domain: &str) -> Option<&SearchHits> {
        self.domains.iter().find(|hits| hits.domain == domain)
    }
}

impl Serialize for FanOut {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.domains.len()))?;
        for hits in &self.domains {
            map.serialize_entry(&hits.domain, hits)?;
        }
        map.end()
    }
}

/// Run `query` against every domain, keeping domains with at least one hit.
pub fn search_all(catalog: &Catalog, query: &str, max_per_domain: usize) -> Result<FanOut> {
    let mut fan_out = FanOut::default();
    for domain in catalog.domains() {
        if let SearchResponse::Hits(hits) = catalog.search(query, Some(&domain.name), Some(max_per_domain))? {
            if hits.count > 0 {
                fan_out.domains.push(hits);
            }
        }
    }
    debug!(query, domains = fan_out.domains.len(), "fan-out complete");
    Ok(fan_out)
}

/// Rows recommended by the best matching upstream row.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedRows {
    pub domain: String,
    pub use_case: String,
    pub count: usize,
    pub results: Vec<ScoredRow>,
}

/// Outcome of [`recommend`]: either rows, or an explicit "no match" that
/// callers can tell apart from an empty recommendation list.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Recommendation {
    Found(RecommendedRows),
    NotFound(SearchFailure),
}

impl Recommendation {
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Found(found) => found.count,
            Self::NotFound(_) => 0,
        }
    }
}

/// First `max` entries of a `;`-separated name list. Blank entries still
/// take a slot but are skipped.
fn split_names(list: &str, max: usize) -> Vec<&str> {
    list.split(';')
        .map(str::trim)
        .take(max)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Chain two lookups: find the best row for `query` in `source_domain`,
/// read the first `max_results` `;`-separated names in its `list_column`,
/// then take the single best `target_domain` row for each non-blank name.
pub fn recommend(
    catalog: &Catalog,
    query: &str,
    source_domain: &str,
    list_column: &str,
    target_domain: &str,
    max_results: usize,
) -> Result<Recommendation> {
    let upstream = catalog.search(query, Some(source_domain), Some(1))?;
    let Some(best) = upstream.rows().first() else {
        info!(query, "no upstream match");
        return Ok(Recommendation::NotFound(SearchFailure {
            error: format!("No use case found for: {query}"),
            domain: None,
        }));
    };

    let names = split_names(best.row.get(list_column).unwrap_or(""), max_results);
    let mut results = Vec::new();
    for name in names {
        let response = catalog.search(name, Some(target_domain), Some(1))?;
        results.extend(response.into_rows());
    }

    debug!(
        query,
        recommended = results.len(),
        "recommendations resolved"
    );
    Ok(Recommendation::Found(RecommendedRows {
        domain: target_domain.to_string(),
        use_case: query.to_string(),
        count: results.len(),
        results,
    }))
}

/// Attribute constraint for [`filter_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeFilter {
    /// `Complexity` equals the value, ignoring case.
    Complexity(String),
    /// `Category` contains the value, ignoring case.
    Category(String),
}

impl AttributeFilter {
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Self::Complexity(level) => row
                .get("Complexity")
                .is_some_and(|value| value.to_lowercase() == level.to_lowercase()),
            Self::Category(name) => row
                .get("Category")
                .is_some_and(|value| value.to_lowercase().contains(&name.to_lowercase())),
        }
    }
}

/// Rows that satisfy an attribute filter.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredRows {
    pub domain: String,
    #[serde(flatten)]
    pub filter: AttributeFilter,
    pub count: usize,
    pub results: Vec<Row>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AttributeMatches {
    Found(FilteredRows),
    Failed(SearchFailure),
}

impl AttributeMatches {
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Found(found) => found.count,
            Self::Failed(_) => 0,
        }
    }
}

/// First `max_results` full rows of `domain` matching `filter`, in table order.
pub fn filter_rows(
    catalog: &Catalog,
    domain: &str,
    filter: &AttributeFilter,
    max_results: usize,
) -> Result<AttributeMatches> {
    let path = match catalog.domain(domain) {
        Some(config) => catalog.table_path(config),
        None => catalog.data_dir().join(domain),
    };
    if !path.exists() {
        return Ok(AttributeMatches::Failed(SearchFailure {
            error: format!("File not found: {}", path.display()),
            domain: None,
        }));
    }

    let results: Vec<Row> = load_table(&path)?
        .into_iter()
        .filter(|row| filter.matches(row))
        .take(max_results)
        .collect();

    debug!(domain, ?filter, count = results.len(), "rows filtered");
    Ok(AttributeMatches::Found(FilteredRows {
        domain: domain.to_string(),
        filter: filter.clone(),
        count: results.len(),
        results,
    }))
}
