//! Command-line interface definition

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub mod commands;
pub mod formatters;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

use crate::config::env_bool;

/// skillkb - keyword search over skill knowledge bases
#[derive(Parser, Debug)]
#[command(name = "skillkb", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit JSON on stdout (also: SKB_ROBOT=1)
    #[arg(long, global = true, visible_alias = "json")]
    pub robot: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence all logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file (default: <config dir>/skillkb/config.toml, or SKB_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the ai-artist/ and threejs/ table folders
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.robot || env_bool("SKB_ROBOT").unwrap_or(false) {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogKind;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_artist_search() {
        let cli = Cli::try_parse_from(["skillkb", "artist", "golden hour", "-d", "lighting", "-n", "2", "--json"])
            .unwrap();
        assert!(cli.robot);
        let Commands::Artist(args) = cli.command else {
            panic!("expected artist command");
        };
        assert_eq!(args.query, "golden hour");
        assert_eq!(args.domain.as_deref(), Some("lighting"));
        assert_eq!(args.max_results, Some(2));
    }

    #[test]
    fn rejects_unknown_domain() {
        let err = Cli::try_parse_from(["skillkb", "artist", "x", "--domain", "sculpture"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn threejs_query_optional_with_filters() {
        let cli = Cli::try_parse_from(["skillkb", "threejs", "--complexity", "low"]).unwrap();
        let Commands::Threejs(args) = cli.command else {
            panic!("expected threejs command");
        };
        assert!(args.query.is_none());
        assert_eq!(args.complexity.as_deref(), Some("low"));

        assert!(Cli::try_parse_from(["skillkb", "threejs"]).is_err());
    }

    #[test]
    fn platform_requires_prompt_system() {
        assert!(Cli::try_parse_from(["skillkb", "artist", "cat", "--platform", "flux"]).is_err());
        assert!(
            Cli::try_parse_from(["skillkb", "artist", "cat", "--prompt-system", "--platform", "flux"])
                .is_ok()
        );
    }

    #[test]
    fn domains_accepts_catalog_alias() {
        let cli = Cli::try_parse_from(["skillkb", "domains", "ai-artist"]).unwrap();
        let Commands::Domains(args) = cli.command else {
            panic!("expected domains command");
        };
        assert_eq!(args.catalog, CatalogKind::AiArtist);
    }
}
