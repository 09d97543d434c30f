//! skillkb domains - List catalog domains and their tables

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::catalog::CatalogKind;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct DomainsArgs {
    /// Catalog to describe
    #[arg(value_enum)]
    pub catalog: CatalogKind,
}

#[derive(Debug, Serialize)]
struct DomainEntry {
    name: String,
    file: String,
    path: String,
    exists: bool,
    default: bool,
    search_columns: Vec<String>,
    output_columns: Vec<String>,
    keywords: Vec<String>,
}

pub fn run(ctx: &AppContext, args: &DomainsArgs) -> Result<()> {
    let catalog = ctx.catalog(args.catalog)?;
    let entries: Vec<DomainEntry> = catalog
        .domains()
        .iter()
        .map(|domain| {
            let path = catalog.table_path(domain);
            DomainEntry {
                name: domain.name.clone(),
                file: domain.file.clone(),
                path: path.display().to_string(),
                exists: path.exists(),
                default: domain.name == catalog.default_domain(),
                search_columns: domain.search_columns.clone(),
                output_columns: domain.output_columns.clone(),
                keywords: catalog
                    .router()
                    .keywords_for(&domain.name)
                    .map(<[String]>::to_vec)
                    .unwrap_or_default(),
            }
        })
        .collect();

    if ctx.output_format.is_json() {
        return emit_json(&serde_json::json!({
            "catalog": args.catalog,
            "data_dir": catalog.data_dir().display().to_string(),
            "domains": entries,
        }));
    }

    let mut layout = HumanLayout::new();
    layout
        .title(&format!("{} Domains", args.catalog.title()))
        .push_line(format!("**Data:** {}", catalog.data_dir().display()))
        .blank();
    for entry in &entries {
        let heading = if entry.default {
            format!("{} (default)", entry.name)
        } else {
            entry.name.clone()
        };
        layout.section(&heading).kv("File", &entry.file).kv(
            "Present",
            if entry.exists { "yes" } else { "no" },
        );
        if entry.keywords.is_empty() {
            layout.kv("Keywords", "(explicit --domain only)");
        } else {
            layout.kv("Keywords", &entry.keywords.join(", "));
        }
        layout.blank();
    }
    emit_human(layout)
}
