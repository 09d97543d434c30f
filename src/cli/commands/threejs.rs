//! skillkb threejs - Search Three.js examples and API reference

use clap::Args;
use tracing::debug;

use crate::app::AppContext;
use crate::catalog::CatalogKind;
use crate::catalog::threejs::{by_category, by_complexity, recommended_examples};
use crate::cli::formatters::search_results::{render_filtered, render_recommendation, render_search};
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ThreejsArgs {
    /// Search query
    #[arg(required_unless_present_any = ["category", "complexity"])]
    pub query: Option<String>,

    /// Search domain (auto-detected when omitted)
    #[arg(long, short, value_parser = ["examples", "categories", "use-cases", "api"])]
    pub domain: Option<String>,

    /// Maximum number of results (default: 5)
    #[arg(long, short = 'n')]
    pub max_results: Option<usize>,

    /// Treat the query as a use case and list its recommended examples
    #[arg(long, short, requires = "query")]
    pub use_case: bool,

    /// List examples whose category contains this text
    #[arg(long, short)]
    pub category: Option<String>,

    /// List examples of this complexity
    #[arg(long, short = 'x', value_parser = ["low", "medium", "high"])]
    pub complexity: Option<String>,
}

pub fn run(ctx: &AppContext, args: &ThreejsArgs) -> Result<()> {
    let catalog = ctx.catalog(CatalogKind::Threejs)?;
    let max_results = args.max_results.unwrap_or(catalog.default_max_results());
    let json = ctx.output_format.is_json();
    let mut layout = HumanLayout::new();

    // Filters take precedence over free-text search.
    if let Some(level) = &args.complexity {
        debug!(complexity = %level, "complexity filter");
        let matches = by_complexity(&catalog, level, max_results)?;
        if json {
            return emit_json(&matches);
        }
        render_filtered(&mut layout, catalog.kind(), &matches);
    } else if let Some(category) = &args.category {
        debug!(category = %category, "category filter");
        let matches = by_category(&catalog, category, max_results)?;
        if json {
            return emit_json(&matches);
        }
        render_filtered(&mut layout, catalog.kind(), &matches);
    } else if let Some(query) = &args.query {
        if args.use_case {
            debug!(use_case = %query, "recommendation lookup");
            let recommendation = recommended_examples(&catalog, query, max_results)?;
            if json {
                return emit_json(&recommendation);
            }
            render_recommendation(&mut layout, catalog.kind(), &recommendation);
        } else {
            debug!(query = %query, domain = ?args.domain, "threejs search");
            let response = catalog.search(query, args.domain.as_deref(), Some(max_results))?;
            if json {
                return emit_json(&response);
            }
            render_search(&mut layout, catalog.kind(), &response);
        }
    }

    emit_human(layout)
}
