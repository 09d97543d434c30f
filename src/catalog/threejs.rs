//! threejs catalog: Three.js examples, categories, use cases and API reference.

use std::path::PathBuf;

use super::composite::{AttributeFilter, AttributeMatches, Recommendation, filter_rows, recommend};
use super::{Catalog, CatalogKind, CatalogSettings, DomainConfig};
use crate::error::Result;
use crate::search::DomainRouter;

pub const DEFAULT_DOMAIN: &str = "examples";
pub const USE_CASE_DOMAIN: &str = "use-cases";
pub const RECOMMENDED_COLUMN: &str = "Recommended Examples";

/// Router priority. Earlier entries win ties.
const ROUTING: &[(&str, &[&str])] = &[
    (
        "examples",
        &[
            "example", "demo", "showcase", "webgl", "webgpu", "animation", "loader", "material",
            "geometry", "light", "shadow", "postprocessing", "effect", "particle", "physics", "vr",
            "xr",
        ],
    ),
    ("categories", &["category", "group", "section", "list all", "types of"]),
    (
        "use-cases",
        &[
            "use case", "project", "application", "build", "create", "make", "implement", "for",
            "suitable",
        ],
    ),
    (
        "api",
        &[
            "api", "class", "method", "function", "property", "how to", "what is", "parameter",
            "constructor",
        ],
    ),
];

pub fn domains() -> Vec<DomainConfig> {
    vec![
        DomainConfig::new(
            "examples",
            "examples-all.csv",
            &["Category", "Name", "Keywords", "Use Cases", "Description"],
            &[
                "ID", "Category", "Name", "File", "Keywords", "URL", "Complexity", "Use Cases",
                "Description",
            ],
        ),
        DomainConfig::new(
            "categories",
            "categories.csv",
            &["Category", "Keywords", "Description", "Primary Use Cases"],
            &[
                "Category", "Keywords", "Description", "Complexity Range", "Example Count",
                "Primary Use Cases", "Related Categories",
            ],
        ),
        DomainConfig::new(
            "use-cases",
            "use-cases.csv",
            &["Use Case", "Keywords", "Description", "Technologies"],
            &[
                "Use Case", "Keywords", "Recommended Examples", "Complexity", "Technologies",
                "Description",
            ],
        ),
        DomainConfig::new(
            "api",
            "api-reference.csv",
            &["Category", "Class", "Keywords", "Description", "Common Methods"],
            &[
                "Category", "Class", "Keywords", "Description", "Common Methods", "Related Classes",
            ],
        ),
    ]
}

pub fn router() -> DomainRouter {
    DomainRouter::from_static(ROUTING, DEFAULT_DOMAIN)
}

pub fn catalog(data_dir: PathBuf, settings: CatalogSettings) -> Catalog {
    Catalog::new(CatalogKind::Threejs, data_dir, domains(), router(), settings)
}

/// Examples recommended for the use case best matching `use_case`.
pub fn recommended_examples(catalog: &Catalog, use_case: &str, max_results: usize) -> Result<Recommendation> {
    recommend(
        catalog,
        use_case,
        USE_CASE_DOMAIN,
        RECOMMENDED_COLUMN,
        DEFAULT_DOMAIN,
        max_results,
    )
}

/// Examples whose `Complexity` equals `level`, ignoring case.
pub fn by_complexity(catalog: &Catalog, level: &str, max_results: usize) -> Result<AttributeMatches> {
    filter_rows(
        catalog,
        DEFAULT_DOMAIN,
        &AttributeFilter::Complexity(level.to_string()),
        max_results,
    )
}

/// Examples whose `Category` contains `category`, ignoring case.
pub fn by_category(catalog: &Catalog, category: &str, max_results: usize) -> Result<AttributeMatches> {
    filter_rows(
        catalog,
        DEFAULT_DOMAIN,
        &AttributeFilter::Category(category.to_string()),
        max_results,
    )
}
