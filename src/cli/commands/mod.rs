//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod artist;
pub mod domains;
pub mod threejs;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the ai-artist prompt-engineering tables
    Artist(artist::ArtistArgs),

    /// Search the Three.js example catalog
    Threejs(threejs::ThreejsArgs),

    /// List the domains of a catalog and their tables
    Domains(domains::DomainsArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Artist(args) => artist::run(ctx, args),
        Commands::Threejs(args) => threejs::run(ctx, args),
        Commands::Domains(args) => domains::run(ctx, args),
    }
}
