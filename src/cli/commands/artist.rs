//! skillkb artist - Search prompt-engineering resources

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::catalog::CatalogKind;
use crate::catalog::ai_artist::prompt_system;
use crate::catalog::composite::search_all;
use crate::cli::formatters::search_results::{render_hits, render_prompt_system, render_search};
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ArtistArgs {
    /// Search query
    pub query: String,

    /// Search domain (auto-detected when omitted)
    #[arg(
        long,
        short,
        value_parser = ["use-case", "style", "platform", "technique", "lighting", "template", "awesome"]
    )]
    pub domain: Option<String>,

    /// Maximum number of results (default: 3)
    #[arg(long, short = 'n')]
    pub max_results: Option<usize>,

    /// Search every domain
    #[arg(long, short, conflicts_with = "domain")]
    pub all: bool,

    /// Compose a prompt system (use case, styles, lighting, techniques)
    #[arg(long, alias = "ps", conflicts_with_all = ["all", "domain"])]
    pub prompt_system: bool,

    /// Target platform for the prompt system
    #[arg(long, short, requires = "prompt_system")]
    pub platform: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ArtistArgs) -> Result<()> {
    let catalog = ctx.catalog(CatalogKind::AiArtist)?;
    let max_results = args.max_results.unwrap_or(catalog.default_max_results());
    debug!(query = %args.query, domain = ?args.domain, max_results, "artist search");

    if args.prompt_system {
        let system = prompt_system(&catalog, &args.query, args.platform.as_deref())?;
        if ctx.output_format.is_json() {
            return emit_json(&system);
        }
        let mut layout = HumanLayout::new();
        render_prompt_system(&mut layout, &system);
        return emit_human(layout);
    }

    if args.all {
        let fan_out = search_all(&catalog, &args.query, max_results)?;
        if ctx.output_format.is_json() {
            return emit_json(&fan_out);
        }
        let mut layout = HumanLayout::new();
        for hits in &fan_out.domains {
            render_hits(&mut layout, catalog.kind(), hits);
            layout.push_line("---").blank();
        }
        return emit_human(layout);
    }

    let response = catalog.search(&args.query, args.domain.as_deref(), Some(max_results))?;
    if ctx.output_format.is_json() {
        return emit_json(&response);
    }
    let mut layout = HumanLayout::new();
    render_search(&mut layout, catalog.kind(), &response);
    emit_human(layout)
}
