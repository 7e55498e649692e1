//! Configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars
//! (nested keys separated by `__`, e.g. `APP_RECOMMENDER__TOP_N`).

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub struct Config {
    figment: Figment,
    base: PathBuf,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Same as [`Config::load`] but reads the TOML files from `base`.
    pub fn load_from(base: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file(base.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment, base: base.to_path_buf() };
        config.validate_for_env(&env_name)?;
        Ok(config)
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment, base: PathBuf::from(".") }
    }

    /// Directory the TOML files were read from.
    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// A path-valued key, expanded and resolved against [`Config::base`].
    pub fn get_path(&self, key: &str) -> anyhow::Result<PathBuf> {
        let raw: String = self.get(key)?;
        Ok(resolve_with_base(&self.base, raw))
    }

    /// Ranking settings from the `[recommender]` table. Missing table or keys
    /// fall back to defaults; out-of-range values are rejected.
    pub fn recommender(&self) -> Result<RecommenderSettings> {
        let settings = if self.figment.find_value("recommender").is_ok() {
            self.figment
                .extract_inner::<RecommenderSettings>("recommender")
                .map_err(|e| Error::InvalidConfig(e.to_string()))?
        } else {
            RecommenderSettings::default()
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        if matches!(env, "prod" | "production") {
            self.recommender()?;
        }
        Ok(())
    }
}

/// String-similarity measure used for near-duplicate title detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleMetric {
    /// Ratcliff/Obershelp matching-blocks ratio.
    #[default]
    SequenceRatio,
    NormalizedLevenshtein,
    JaroWinkler,
    SorensenDice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderSettings {
    pub top_n: usize,
    pub title_similarity_threshold: f64,
    pub title_metric: TitleMetric,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self { top_n: 20, title_similarity_threshold: 0.5, title_metric: TitleMetric::SequenceRatio }
    }
}

impl RecommenderSettings {
    pub fn validate(&self) -> Result<()> {
        let t = self.title_similarity_threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(Error::InvalidConfig(format!(
                "recommender.title_similarity_threshold must be within [0, 1], got {}",
                t
            )));
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
