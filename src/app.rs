use std::path::PathBuf;

use tracing::debug;

use crate::catalog::{Catalog, CatalogKind};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    pub data_dir_override: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        Ok(Self {
            config,
            data_dir_override: cli.data_dir.clone(),
            output_format: cli.output_format(),
            verbosity: cli.verbose,
        })
    }

    /// Build the catalog for one skill family. Each call yields an
    /// independent value; nothing is cached between queries.
    pub fn catalog(&self, kind: CatalogKind) -> Result<Catalog> {
        let root = self.config.data_root(self.data_dir_override.as_deref())?;
        debug!(catalog = kind.dir_name(), root = %root.display(), "catalog resolved");
        Ok(Catalog::builtin(kind, &root, self.config.catalog_settings(kind)))
    }
}
