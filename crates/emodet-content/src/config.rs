//! Configuration loading.
//!
//! Points the CLI at custom content files; everything falls back to the
//! built-in content when unset.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use emodet_core::lexicon::Lexicon;
use emodet_core::model::ExerciseSet;
use emodet_core::parser;

use crate::exercises::builtin_exercises;
use crate::lexicons::default_lexicon;

/// Top-level emodet configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmodetConfig {
    /// Custom lexicon TOML path; built-in word lists when unset.
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
    /// Custom exercise set TOML path; the built-in set when unset.
    #[serde(default)]
    pub exercises: Option<PathBuf>,
    /// Simulated thinking delay before an analysis result, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Output directory for saved session reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_delay_ms() -> u64 {
    1500
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./emodet-results")
}

impl Default for EmodetConfig {
    fn default() -> Self {
        Self {
            lexicon: None,
            exercises: None,
            delay_ms: default_delay_ms(),
            output_dir: default_output_dir(),
        }
    }
}

impl EmodetConfig {
    /// The lexicon this config resolves to.
    pub fn resolve_lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon {
            Some(path) => parser::parse_lexicon(path),
            None => Ok(default_lexicon()),
        }
    }

    /// The exercise set this config resolves to.
    pub fn resolve_exercises(&self) -> Result<ExerciseSet> {
        match &self.exercises {
            Some(path) => parser::parse_exercise_set(path),
            None => Ok(builtin_exercises()),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `emodet.toml` in the current directory
/// 2. `~/.config/emodet/config.toml`
pub fn load_config() -> Result<EmodetConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<EmodetConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("emodet.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<EmodetConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => EmodetConfig::default(),
    };

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("emodet"))
}
