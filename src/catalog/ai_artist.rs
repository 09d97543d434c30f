//! ai-artist catalog: prompt-engineering tables for image generation.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use super::{Catalog, CatalogKind, CatalogSettings, DomainConfig};
use crate::error::Result;
use crate::search::{DomainRouter, Row};

pub const DEFAULT_DOMAIN: &str = "style";

/// Router priority. Earlier entries win ties.
const ROUTING: &[(&str, &[&str])] = &[
    (
        "use-case",
        &[
            "avatar", "profile", "thumbnail", "poster", "social", "youtube", "instagram",
            "marketing", "product", "e-commerce", "infographic", "comic", "game", "app", "web",
            "header", "banner",
        ],
    ),
    (
        "style",
        &[
            "style", "aesthetic", "photorealistic", "anime", "manga", "3d", "render",
            "illustration", "pixel", "watercolor", "oil", "cyberpunk", "vaporwave", "minimalist",
            "vintage", "retro",
        ],
    ),
    (
        "platform",
        &[
            "midjourney", "dalle", "dall-e", "stable diffusion", "flux", "nano banana", "gemini",
            "imagen", "ideogram", "leonardo", "firefly", "platform", "tool",
        ],
    ),
    (
        "technique",
        &[
            "prompt", "technique", "weight", "emphasis", "negative", "json", "structured",
            "iteration", "reference", "identity", "multi-panel", "search grounding",
        ],
    ),
    (
        "lighting",
        &[
            "lighting", "light", "shadow", "golden hour", "blue hour", "rembrandt", "butterfly",
            "neon", "volumetric", "softbox", "rim light", "studio",
        ],
    ),
];

pub fn domains() -> Vec<DomainConfig> {
    vec![
        DomainConfig::new(
            "use-case",
            "use-cases.csv",
            &["Use Case", "Category", "Keywords", "Best Platforms"],
            &[
                "Use Case", "Category", "Keywords", "Prompt Template", "Key Elements",
                "Best Platforms", "Aspect Ratios", "Tips", "Example",
            ],
        ),
        DomainConfig::new(
            "style",
            "styles.csv",
            &["Style Name", "Category", "Keywords", "Description", "Best For"],
            &[
                "Style Name", "Category", "Description", "Key Characteristics", "Color Palette",
                "Best For", "Platforms", "Prompt Keywords",
            ],
        ),
        DomainConfig::new(
            "platform",
            "platforms.csv",
            &["Platform", "Type", "Keywords", "Strengths"],
            &[
                "Platform", "Type", "Prompt Style", "Key Parameters", "Strengths", "Limitations",
                "Aspect Ratios", "Best Practices",
            ],
        ),
        DomainConfig::new(
            "technique",
            "techniques.csv",
            &["Technique", "Category", "Keywords", "Description", "When to Use"],
            &[
                "Technique", "Category", "Description", "When to Use", "Syntax Example",
                "Platforms", "Tips",
            ],
        ),
        DomainConfig::new(
            "lighting",
            "lighting.csv",
            &["Lighting Type", "Category", "Keywords", "Description", "Mood", "Best For"],
            &[
                "Lighting Type", "Category", "Description", "Mood", "Best For", "Prompt Keywords",
                "Technical Notes",
            ],
        ),
        DomainConfig::new(
            "template",
            "nano-banana-templates.csv",
            &["Category", "Template Name", "Keywords"],
            &["Category", "Template Name", "Keywords", "Prompt Template", "Aspect Ratio", "Tips"],
        ),
        DomainConfig::new(
            "awesome",
            "awesome-prompts.csv",
            &["title", "description", "prompt"],
            &["id", "title", "category", "description", "prompt", "author", "source"],
        ),
    ]
}

pub fn router() -> DomainRouter {
    DomainRouter::from_static(ROUTING, DEFAULT_DOMAIN)
}

pub fn catalog(data_dir: PathBuf, settings: CatalogSettings) -> Catalog {
    Catalog::new(CatalogKind::AiArtist, data_dir, domains(), router(), settings)
}

/// Everything needed to write a prompt for one concept.
#[derive(Debug, Clone, Serialize)]
pub struct PromptSystem {
    pub concept: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub use_case: Option<Row>,
    pub styles: Vec<Row>,
    pub lighting: Option<Row>,
    pub techniques: Vec<Row>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_tips: Option<Row>,
}

impl PromptSystem {
    /// True when no table contributed anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.use_case.is_none()
            && self.styles.is_empty()
            && self.lighting.is_none()
            && self.techniques.is_empty()
            && self.platform_tips.is_none()
    }
}

/// Gather the best use case, styles, lighting and techniques for `concept`,
/// plus platform tips when `platform` is given.
///
/// Missing tables simply contribute nothing.
pub fn prompt_system(catalog: &Catalog, concept: &str, platform: Option<&str>) -> Result<PromptSystem> {
    let first = |domain: &str, query: &str| -> Result<Option<Row>> {
        let response = catalog.search(query, Some(domain), Some(1))?;
        Ok(response.into_rows().into_iter().next().map(|hit| hit.row))
    };
    let top = |domain: &str, limit: usize| -> Result<Vec<Row>> {
        let response = catalog.search(concept, Some(domain), Some(limit))?;
        Ok(response.into_rows().into_iter().map(|hit| hit.row).collect())
    };

    let system = PromptSystem {
        concept: concept.to_string(),
        platform: platform.map(str::to_string),
        use_case: first("use-case", concept)?,
        styles: top("style", 2)?,
        lighting: first("lighting", concept)?,
        techniques: top("technique", 2)?,
        platform_tips: match platform {
            Some(name) => first("platform", name)?,
            None => None,
        },
    };

    debug!(
        concept,
        styles = system.styles.len(),
        techniques = system.techniques.len(),
        "prompt system assembled"
    );
    Ok(system)
}
