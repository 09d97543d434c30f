//! Search results formatter
//!
//! Renders catalog responses as compact markdown-flavored text: one header
//! block, then one `### Result N` section per row with every column listed.

use crate::catalog::ai_artist::PromptSystem;
use crate::catalog::composite::{AttributeFilter, AttributeMatches, Recommendation};
use crate::catalog::{CatalogKind, SearchHits, SearchResponse};
use crate::cli::output::{HumanLayout, preview};
use crate::search::Row;

fn header(layout: &mut HumanLayout, kind: CatalogKind, domain: &str, query: &str) {
    layout
        .title(&format!("{} Search Results", kind.title()))
        .push_line(format!("**Domain:** {domain} | **Query:** {query}"));
}

fn rows<'a>(
    layout: &mut HumanLayout,
    kind: CatalogKind,
    rows: impl Iterator<Item = (&'a Row, Option<f64>)>,
) {
    for (position, (row, score)) in rows.enumerate() {
        match score {
            Some(score) => layout.section(&format!("Result {} (score {score:.3})", position + 1)),
            None => layout.section(&format!("Result {}", position + 1)),
        };
        for (column, value) in row.iter() {
            layout.kv(column, &preview(value, kind.preview_chars()));
        }
        layout.blank();
    }
}

fn failure(layout: &mut HumanLayout, message: &str) {
    layout.push_line(format!("Error: {message}"));
}

pub fn render_search(layout: &mut HumanLayout, kind: CatalogKind, response: &SearchResponse) {
    match response {
        SearchResponse::Failed(failed) => failure(layout, &failed.error),
        SearchResponse::Hits(hits) => render_hits(layout, kind, hits),
    }
}

pub fn render_hits(layout: &mut HumanLayout, kind: CatalogKind, hits: &SearchHits) {
    header(layout, kind, &hits.domain, &hits.query);
    layout
        .push_line(format!(
            "**Source:** {} | **Found:** {} results",
            hits.file, hits.count
        ))
        .blank();
    rows(
        layout,
        kind,
        hits.results.iter().map(|hit| (&hit.row, Some(hit.score))),
    );
}

pub fn render_recommendation(layout: &mut HumanLayout, kind: CatalogKind, recommendation: &Recommendation) {
    match recommendation {
        Recommendation::NotFound(failed) => failure(layout, &failed.error),
        Recommendation::Found(found) => {
            header(layout, kind, &found.domain, &found.use_case);
            layout
                .push_line(format!("**Found:** {} results", found.count))
                .blank();
            rows(
                layout,
                kind,
                found.results.iter().map(|hit| (&hit.row, Some(hit.score))),
            );
        }
    }
}

pub fn render_filtered(layout: &mut HumanLayout, kind: CatalogKind, matches: &AttributeMatches) {
    match matches {
        AttributeMatches::Failed(failed) => failure(layout, &failed.error),
        AttributeMatches::Found(found) => {
            let value = match &found.filter {
                AttributeFilter::Complexity(value) | AttributeFilter::Category(value) => value,
            };
            header(layout, kind, &found.domain, value);
            layout
                .push_line(format!("**Found:** {} results", found.count))
                .blank();
            rows(layout, kind, found.results.iter().map(|row| (row, None)));
        }
    }
}

fn field<'a>(row: &'a Row, column: &str) -> &'a str {
    row.get(column).unwrap_or("")
}

fn non_empty<'a>(row: &'a Row, column: &str) -> Option<&'a str> {
    row.get(column).filter(|value| !value.is_empty())
}

pub fn render_prompt_system(layout: &mut HumanLayout, system: &PromptSystem) {
    layout
        .title("AI Artist Prompt System")
        .push_line(format!("**Concept:** {}", system.concept));
    if let Some(platform) = &system.platform {
        layout.push_line(format!("**Target Platform:** {platform}"));
    }
    layout.blank();

    if let Some(use_case) = &system.use_case {
        layout.section("Use Case Match").push_line(format!(
            "**{}** ({})",
            use_case.get("Use Case").unwrap_or("N/A"),
            field(use_case, "Category")
        ));
        if let Some(template) = non_empty(use_case, "Prompt Template") {
            layout.push_line(format!("**Template:** `{template}`"));
        }
        if let Some(elements) = non_empty(use_case, "Key Elements") {
            layout.push_line(format!("**Key Elements:** {elements}"));
        }
        if let Some(tips) = non_empty(use_case, "Tips") {
            layout.push_line(format!("**Tips:** {tips}"));
        }
        layout.blank();
    }

    if !system.styles.is_empty() {
        layout.section("Recommended Styles");
        for style in &system.styles {
            layout.push_line(format!(
                "**{}** - {}",
                style.get("Style Name").unwrap_or("N/A"),
                field(style, "Description")
            ));
            if let Some(keywords) = non_empty(style, "Prompt Keywords") {
                layout.push_line(format!("  Keywords: `{keywords}`"));
            }
        }
        layout.blank();
    }

    if let Some(lighting) = &system.lighting {
        layout
            .section("Lighting Suggestion")
            .push_line(format!(
                "**{}** - {}",
                lighting.get("Lighting Type").unwrap_or("N/A"),
                field(lighting, "Description")
            ))
            .push_line(format!(
                "  Mood: {} | Keywords: `{}`",
                field(lighting, "Mood"),
                field(lighting, "Prompt Keywords")
            ))
            .blank();
    }

    if !system.techniques.is_empty() {
        layout.section("Relevant Techniques");
        for technique in &system.techniques {
            layout.push_line(format!(
                "**{}**: {}",
                technique.get("Technique").unwrap_or("N/A"),
                field(technique, "Description")
            ));
            if let Some(example) = non_empty(technique, "Syntax Example") {
                layout.push_line(format!("  Example: `{example}`"));
            }
        }
        layout.blank();
    }

    if let Some(tips) = &system.platform_tips {
        layout
            .section(&format!("{} Tips", field(tips, "Platform")))
            .push_line(format!("**Prompt Style:** {}", field(tips, "Prompt Style")))
            .push_line(format!("**Key Parameters:** {}", field(tips, "Key Parameters")))
            .push_line(format!("**Best Practices:** {}", field(tips, "Best Practices")))
            .blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SearchFailure;
    use crate::search::ScoredRow;

    fn row(cells: &[(&str, &str)]) -> Row {
        Row::new(
            cells
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    fn plain(layout: HumanLayout) -> String {
        console::strip_ansi_codes(&layout.build()).into_owned()
    }

    #[test]
    fn search_lists_every_column_and_truncates() {
        let long = "x".repeat(500);
        let response = SearchResponse::Hits(SearchHits {
            domain: "style".to_string(),
            query: "anime".to_string(),
            file: "styles.csv".to_string(),
            count: 1,
            results: vec![ScoredRow {
                index: 0,
                score: 1.25,
                row: row(&[("Style Name", "Anime"), ("Description", &long)]),
            }],
        });

        let mut layout = HumanLayout::new();
        render_search(&mut layout, CatalogKind::AiArtist, &response);
        let text = plain(layout);

        assert!(text.contains("## AI Artist Search Results"));
        assert!(text.contains("**Domain:** style | **Query:** anime"));
        assert!(text.contains("**Source:** styles.csv | **Found:** 1 results"));
        assert!(text.contains("### Result 1 (score 1.250)"));
        assert!(text.contains("- **Style Name:** Anime"));
        assert!(text.contains(&format!("- **Description:** {}...", "x".repeat(400))));
    }

    #[test]
    fn failure_renders_error_line() {
        let response = SearchResponse::Failed(SearchFailure {
            error: "File not found: /tmp/styles.csv".to_string(),
            domain: Some("style".to_string()),
        });
        let mut layout = HumanLayout::new();
        render_search(&mut layout, CatalogKind::AiArtist, &response);
        assert_eq!(plain(layout), "Error: File not found: /tmp/styles.csv");
    }

    #[test]
    fn prompt_system_skips_empty_sections() {
        let system = PromptSystem {
            concept: "cat astronaut".to_string(),
            platform: None,
            use_case: None,
            styles: vec![row(&[("Style Name", "Anime"), ("Description", "Cel shading")])],
            lighting: None,
            techniques: Vec::new(),
            platform_tips: None,
        };
        let mut layout = HumanLayout::new();
        render_prompt_system(&mut layout, &system);
        let text = plain(layout);

        assert!(text.contains("**Concept:** cat astronaut"));
        assert!(text.contains("### Recommended Styles"));
        assert!(text.contains("**Anime** - Cel shading"));
        assert!(!text.contains("Use Case Match"));
        assert!(!text.contains("Lighting Suggestion"));
    }
}
