use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::render::Format;

#[derive(Default, Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: Output,
}

#[derive(Default, Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Output {
    pub format: Format,
    pub pretty: bool,
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "telltale.toml";
    pub const PATH_VAR: &'static str = "TELLTALE_CONFIG";

    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_default(Self::path())
    }

    fn path() -> PathBuf {
        std::env::var_os(Self::PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    pub fn load_or_default<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if !path.is_file() {
            log::debug!("no config at '{}', using defaults", path.display());
            return Ok(Self::default());
        }

        log::debug!("loading config from '{}'", path.display());
        let data = std::fs::read(path)
            .with_context(|| format!("cannot read config at '{}'", path.display()))?;
        toml::from_slice(&data)
            .with_context(|| format!("cannot parse config at '{}'", path.display()))
    }
}
