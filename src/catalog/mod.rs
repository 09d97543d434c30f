//! Skill catalogs: immutable domain tables plus the single-query entry point.
//!
//! A catalog describes one skill family (ai-artist, threejs): which CSV
//! files exist, which columns are searched and shown, how queries are routed
//! to a domain, and how text is tokenized. Catalogs are plain values built
//! from [`crate::config::Config`] and passed explicitly, so several can live
//! side by side.

pub mod ai_artist;
pub mod composite;
pub mod threejs;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::search::{Bm25Params, DomainRouter, ScoredRow, TableQuery, Tokenizer, search_table};

/// Built-in skill families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    /// Prompt-engineering tables for image generation
    #[value(name = "artist", alias = "ai-artist")]
    AiArtist,
    /// Three.js example catalog and API reference
    Threejs,
}

impl CatalogKind {
    /// Directory under the data root holding this catalog's tables.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::AiArtist => "ai-artist",
            Self::Threejs => "threejs",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AiArtist => "AI Artist",
            Self::Threejs => "Three.js",
        }
    }

    /// Longest value shown in human output before truncation.
    #[must_use]
    pub const fn preview_chars(self) -> usize {
        match self {
            Self::AiArtist => 400,
            Self::Threejs => 300,
        }
    }
}

/// One searchable table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainConfig {
    pub name: String,
    pub file: String,
    pub search_columns: Vec<String>,
    pub output_columns: Vec<String>,
}

impl DomainConfig {
    pub fn new(name: &str, file: &str, search_columns: &[&str], output_columns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            file: file.to_string(),
            search_columns: search_columns.iter().map(|c| (*c).to_string()).collect(),
            output_columns: output_columns.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

/// Per-catalog tuning taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogSettings {
    pub max_results: usize,
    pub min_token_len: usize,
    pub params: Bm25Params,
}

/// Ranked rows from one domain.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHits {
    pub domain: String,
    pub query: String,
    pub file: String,
    pub count: usize,
    pub results: Vec<ScoredRow>,
}

/// A lookup that could not run, reported as data rather than a fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFailure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Outcome of [`Catalog::search`].
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Hits(SearchHits),
    Failed(SearchFailure),
}

impl SearchResponse {
    /// Number of result rows; zero for failures.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Hits(hits) => hits.count,
            Self::Failed(_) => 0,
        }
    }

    #[must_use]
    pub const fn hits(&self) -> Option<&SearchHits> {
        match self {
            Self::Hits(hits) => Some(hits),
            Self::Failed(_) => None,
        }
    }

    /// Result rows, empty for failures.
    #[must_use]
    pub fn rows(&self) -> &[ScoredRow] {
        match self {
            Self::Hits(hits) => &hits.results,
            Self::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<ScoredRow> {
        match self {
            Self::Hits(hits) => hits.results,
            Self::Failed(_) => Vec::new(),
        }
    }
}

/// Domain tables, router and tokenizer for one skill family.
#[derive(Debug, Clone)]
pub struct Catalog {
    kind: CatalogKind,
    data_dir: PathBuf,
    domains: Vec<DomainConfig>,
    default_domain: String,
    router: DomainRouter,
    tokenizer: Tokenizer,
    params: Bm25Params,
    max_results: usize,
}

impl Catalog {
    /// Assemble a catalog. `domains` order is the order used for listing and
    /// fan-out searches; `router` carries its own priority order.
    pub fn new(
        kind: CatalogKind,
        data_dir: impl Into<PathBuf>,
        domains: Vec<DomainConfig>,
        router: DomainRouter,
        settings: CatalogSettings,
    ) -> Self {
        let default_domain = router.fallback().to_string();
        Self {
            kind,
            data_dir: data_dir.into(),
            domains,
            default_domain,
            router,
            tokenizer: Tokenizer::new(settings.min_token_len),
            params: settings.params,
            max_results: settings.max_results,
        }
    }

    /// Built-in catalog of `kind` rooted at `<data_root>/<kind dir>`.
    pub fn builtin(kind: CatalogKind, data_root: &Path, settings: CatalogSettings) -> Self {
        let data_dir = data_root.join(kind.dir_name());
        match kind {
            CatalogKind::AiArtist => ai_artist::catalog(data_dir, settings),
            CatalogKind::Threejs => threejs::catalog(data_dir, settings),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CatalogKind {
        self.kind
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn domains(&self) -> &[DomainConfig] {
        &self.domains
    }

    #[must_use]
    pub const fn router(&self) -> &DomainRouter {
        &self.router
    }

    #[must_use]
    pub fn default_domain(&self) -> &str {
        &self.default_domain
    }

    #[must_use]
    pub const fn default_max_results(&self) -> usize {
        self.max_results
    }

    #[must_use]
    pub const fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }

    #[must_use]
    pub fn domain(&self, name: &str) -> Option<&DomainConfig> {
        self.domains.iter().find(|d| d.name == name)
    }

    #[must_use]
    pub fn table_path(&self, domain: &DomainConfig) -> PathBuf {
        self.data_dir.join(&domain.file)
    }

    /// Pick the domain for `query` when the caller did not name one.
    pub fn detect_domain(&self, query: &str) -> &str {
        debug!(scores = ?self.router.scores(query), "router scores");
        self.router.detect(query)
    }

    /// Resolve a requested domain to its table, falling back to the default
    /// table for unknown names. The returned name is the one that was asked
    /// for (or detected), which is what responses report.
    fn resolve<'a>(
        &'a self,
        requested: Option<&'a str>,
        query: &str,
    ) -> Option<(&'a str, &'a DomainConfig)> {
        let name = requested.unwrap_or_else(|| self.detect_domain(query));
        let config = self.domain(name).or_else(|| {
            warn!(
                requested = name,
                fallback = %self.default_domain,
                "unknown domain, using default table"
            );
            self.domain(&self.default_domain)
        })?;
        Some((name, config))
    }

    /// Search one domain, auto-detecting it when `domain` is `None`.
    ///
    /// A missing table becomes [`SearchResponse::Failed`]; unreadable tables
    /// are hard errors.
    pub fn search(
        &self,
        query: &str,
        domain: Option<&str>,
        max_results: Option<usize>,
    ) -> Result<SearchResponse> {
        let Some((name, config)) = self.resolve(domain, query) else {
            return Ok(SearchResponse::Failed(SearchFailure {
                error: format!("No table configured for domain: {}", domain.unwrap_or("")),
                domain: domain.map(str::to_string),
            }));
        };

        let path = self.table_path(config);
        if !path.exists() {
            return Ok(SearchResponse::Failed(SearchFailure {
                error: format!("File not found: {}", path.display()),
                domain: Some(name.to_string()),
            }));
        }

        let spec = TableQuery {
            search_columns: &config.search_columns,
            output_columns: &config.output_columns,
            tokenizer: self.tokenizer,
            params: self.params,
        };
        let limit = max_results.unwrap_or(self.max_results);
        let results = search_table(&path, &spec, query, limit)?;

        debug!(
            catalog = self.kind.dir_name(),
            domain = name,
            table = %config.name,
            count = results.len(),
            "search complete"
        );

        Ok(SearchResponse::Hits(SearchHits {
            domain: name.to_string(),
            query: query.to_string(),
            file: config.file.clone(),
            count: results.len(),
            results,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::UnitTestFixture;

    fn settings() -> CatalogSettings {
        CatalogSettings {
            max_results: 3,
            min_token_len: 2,
            params: Bm25Params::default(),
        }
    }

    fn artist(fixture: &UnitTestFixture) -> Catalog {
        Catalog::builtin(CatalogKind::AiArtist, &fixture.data_path, settings())
    }

    const PLATFORMS: &str = "\
Platform,Type,Keywords,Strengths,Prompt Style
Midjourney,Image,\"midjourney, mj, discord\",Artistic coherence,Short phrases
Nano Banana,Image,\"nano banana, gemini, google\",Text rendering and editing,Natural language
";

    #[test]
    fn auto_detects_platform_domain() {
        let fixture = UnitTestFixture::new();
        fixture.create_file("ai-artist/platforms.csv", PLATFORMS);
        let catalog = artist(&fixture);

        let response = catalog.search("nano banana workflow", None, None).unwrap();
        let hits = response.hits().expect("hits");
        assert_eq!(hits.domain, "platform");
        assert_eq!(hits.file, "platforms.csv");
        assert_eq!(hits.count, 1);
        assert_eq!(hits.results[0].row.get("Platform"), Some("Nano Banana"));
    }

    #[test]
    fn missing_file_is_reported_as_data() {
        let fixture = UnitTestFixture::new();
        let catalog = artist(&fixture);

        let response = catalog.search("anime", Some("style"), None).unwrap();
        match response {
            SearchResponse::Failed(failure) => {
                assert!(failure.error.starts_with("File not found: "));
                assert_eq!(failure.domain.as_deref(), Some("style"));
            }
            SearchResponse::Hits(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn unknown_domain_searches_default_table_under_requested_name() {
        let fixture = UnitTestFixture::new();
        fixture.create_file(
            "ai-artist/styles.csv",
            "Style Name,Category,Keywords,Description,Best For\nAnime,Illustration,anime,Cel shading,Characters\n",
        );
        let catalog = artist(&fixture);

        let response = catalog.search("anime", Some("sculpture"), None).unwrap();
        let hits = response.hits().expect("hits");
        assert_eq!(hits.domain, "sculpture");
        assert_eq!(hits.file, "styles.csv");
        assert_eq!(response.count(), 1);
    }

    #[test]
    fn unknown_domain_with_missing_default_table_reports_requested_name() {
        let fixture = UnitTestFixture::new();
        let response = artist(&fixture).search("anime", Some("sculpture"), None).unwrap();
        let SearchResponse::Failed(failure) = response else {
            panic!("expected failure");
        };
        assert!(failure.error.ends_with("styles.csv"));
        assert_eq!(failure.domain.as_deref(), Some("sculpture"));
    }

    #[test]
    fn header_only_table_returns_zero_count() {
        let fixture = UnitTestFixture::new();
        fixture.create_file("ai-artist/lighting.csv", "Lighting Type,Category,Keywords,Description\n");
        let response = artist(&fixture).search("golden hour", Some("lighting"), None).unwrap();

        let hits = response.hits().expect("hits");
        assert_eq!(hits.count, 0);
        assert!(hits.results.is_empty());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 0);
        assert_eq!(json["results"], serde_json::json!([]));
    }

    #[test]
    fn json_shape_matches_contract() {
        let fixture = UnitTestFixture::new();
        fixture.create_file("ai-artist/platforms.csv", PLATFORMS);
        let catalog = artist(&fixture);

        let response = catalog.search("midjourney", Some("platform"), Some(5)).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["domain"], "platform");
        assert_eq!(json["query"], "midjourney");
        assert_eq!(json["file"], "platforms.csv");
        assert_eq!(json["count"], 1);
        assert_eq!(json["results"][0]["Platform"], "Midjourney");
        assert!(json["results"][0].get("Keywords").is_none());
    }

    #[test]
    fn failure_json_has_error_and_domain() {
        let fixture = UnitTestFixture::new();
        let catalog = artist(&fixture);
        let response = catalog.search("anything", Some("lighting"), None).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["error"].as_str().unwrap().contains("lighting.csv"));
        assert_eq!(json["domain"], "lighting");
    }
}
