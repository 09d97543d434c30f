use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogKind, CatalogSettings};
use crate::error::{KbError, Result};
use crate::search::Bm25Params;
use crate::search::tokenizer::{CATALOG_MIN_LEN, PROSE_MIN_LEN};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub bm25: Bm25Config,
    #[serde(default = "CatalogConfig::artist")]
    pub artist: CatalogConfig,
    #[serde(default = "CatalogConfig::threejs")]
    pub threejs: CatalogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Defaults, then the global config file (or the explicit one), then
    /// `SKB_*` environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::defaults();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SKB_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    #[must_use]
    pub fn defaults() -> Self {
        Self {
            data: DataConfig::default(),
            bm25: Bm25Config::default(),
            artist: CatalogConfig::artist(),
            threejs: CatalogConfig::threejs(),
        }
    }

    /// Parse a full config from TOML text; absent sections keep defaults.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| KbError::Config(format!("parse config: {err}")))?;
        let mut config = Self::defaults();
        config.merge_patch(patch);
        Ok(config)
    }

    /// Ranking settings for one catalog.
    #[must_use]
    pub fn catalog_settings(&self, kind: CatalogKind) -> CatalogSettings {
        let catalog = match kind {
            CatalogKind::AiArtist => &self.artist,
            CatalogKind::Threejs => &self.threejs,
        };
        CatalogSettings {
            max_results: catalog.max_results,
            min_token_len: catalog.min_token_len,
            params: self.bm25.params(),
        }
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("skillkb/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| KbError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| KbError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.data {
            self.data.merge(patch);
        }
        if let Some(patch) = patch.bm25 {
            self.bm25.merge(patch);
        }
        if let Some(patch) = patch.artist {
            self.artist.merge(patch);
        }
        if let Some(patch) = patch.threejs {
            self.threejs.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("SKB_DATA_DIR") {
            self.data.root = Some(PathBuf::from(value));
        }

        if let Some(value) = env_f64("SKB_BM25_K1")? {
            self.bm25.k1 = value;
        }
        if let Some(value) = env_f64("SKB_BM25_B")? {
            self.bm25.b = value;
        }

        if let Some(value) = env_usize("SKB_ARTIST_MAX_RESULTS")? {
            self.artist.max_results = value;
        }
        if let Some(value) = env_usize("SKB_THREEJS_MAX_RESULTS")? {
            self.threejs.max_results = value;
        }

        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if !self.bm25.k1.is_finite() || self.bm25.k1 < 0.0 {
            return Err(KbError::Config(format!(
                "bm25.k1 must be a non-negative number, got {}",
                self.bm25.k1
            )));
        }
        if !(0.0..=1.0).contains(&self.bm25.b) {
            return Err(KbError::Config(format!(
                "bm25.b must be within [0, 1], got {}",
                self.bm25.b
            )));
        }
        Ok(())
    }

    /// Directory holding the per-catalog table folders.
    ///
    /// Explicit override, then `data.root`, then the platform data dir.
    pub fn data_root(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if let Some(root) = &self.data.root {
            return Ok(root.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| KbError::MissingConfig("data directory not found".to_string()))?;
        Ok(data_dir.join("skillkb"))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl DataConfig {
    fn merge(&mut self, patch: DataPatch) {
        if let Some(value) = patch.root {
            self.root = Some(value);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Config {
    pub k1: f64,
    pub b: f64,
}

impl Default for Bm25Config {
    fn default() -> Self {
        let params = Bm25Params::default();
        Self {
            k1: params.k1,
            b: params.b,
        }
    }
}

impl Bm25Config {
    #[must_use]
    pub const fn params(&self) -> Bm25Params {
        Bm25Params {
            k1: self.k1,
            b: self.b,
        }
    }

    fn merge(&mut self, patch: Bm25Patch) {
        if let Some(value) = patch.k1 {
            self.k1 = value;
        }
        if let Some(value) = patch.b {
            self.b = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub max_results: usize,
    /// Tokens must be longer than this many characters.
    #[serde(default)]
    pub min_token_len: usize,
}

impl CatalogConfig {
    #[must_use]
    pub const fn artist() -> Self {
        Self {
            max_results: 3,
            min_token_len: PROSE_MIN_LEN,
        }
    }

    #[must_use]
    pub const fn threejs() -> Self {
        Self {
            max_results: 5,
            min_token_len: CATALOG_MIN_LEN,
        }
    }

    fn merge(&mut self, patch: CatalogPatch) {
        if let Some(value) = patch.max_results {
            self.max_results = value;
        }
        if let Some(value) = patch.min_token_len {
            self.min_token_len = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub data: Option<DataPatch>,
    pub bm25: Option<Bm25Patch>,
    pub artist: Option<CatalogPatch>,
    pub threejs: Option<CatalogPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DataPatch {
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Bm25Patch {
    pub k1: Option<f64>,
    pub b: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogPatch {
    pub max_results: Option<usize>,
    pub min_token_len: Option<usize>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<usize>().map(Some).map_err(|err| {
            KbError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<f64>().map(Some).map_err(|err| {
            KbError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}
