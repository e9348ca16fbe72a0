use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Runtime configuration for the dashboard process.
///
/// Layering, lowest to highest precedence: built-in defaults, optional TOML
/// file (`panganwatch.toml`, path overridable via `PANGANWATCH_CONFIG`),
/// then `PANGANWATCH_*` environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Path to the fitted scaler artifact (JSON).
    pub scaler_path: PathBuf,
    /// Path to the fitted nearest-neighbor artifact (JSON).
    pub model_path: PathBuf,
    /// ANSI color in verdict rendering.
    pub color: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from("scaler_final.json"),
            model_path: PathBuf::from("knn_final_model.json"),
            color: true,
        }
    }
}

impl DashboardConfig {
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();
        cfg.apply_file_config()?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_file_config(&mut self) -> Result<bool> {
        let Some(path) = resolve_config_path() else {
            return Ok(false);
        };

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed reading config file {}", path.display()))?;
        self.apply_file_toml(&raw)
            .with_context(|| format!("failed parsing TOML config {}", path.display()))?;
        Ok(true)
    }

    fn apply_file_toml(&mut self, raw: &str) -> Result<()> {
        let file_cfg: FileConfig = toml::from_str(raw)?;
        self.apply_file_artifacts(file_cfg.artifacts);
        self.apply_file_session(file_cfg.session);
        Ok(())
    }

    fn apply_file_artifacts(&mut self, artifacts: Option<FileArtifactsConfig>) {
        let Some(artifacts) = artifacts else {
            return;
        };
        if let Some(v) = non_empty(artifacts.scaler_path) {
            self.scaler_path = PathBuf::from(v);
        }
        if let Some(v) = non_empty(artifacts.model_path) {
            self.model_path = PathBuf::from(v);
        }
    }

    fn apply_file_session(&mut self, session: Option<FileSessionConfig>) {
        let Some(session) = session else {
            return;
        };
        if let Some(v) = session.color {
            self.color = v;
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(v) = env_non_empty("PANGANWATCH_SCALER_PATH") {
            self.scaler_path = PathBuf::from(v);
        }
        if let Some(v) = env_non_empty("PANGANWATCH_MODEL_PATH") {
            self.model_path = PathBuf::from(v);
        }
        // NO_COLOR is honored alongside the project-scoped variable.
        if env_non_empty("PANGANWATCH_NO_COLOR").is_some() || env_non_empty("NO_COLOR").is_some() {
            self.color = false;
        }
    }
}

/// Explicit `PANGANWATCH_CONFIG` wins; otherwise `panganwatch.toml` in the
/// working directory, if present.
fn resolve_config_path() -> Option<PathBuf> {
    if let Some(v) = env_non_empty("PANGANWATCH_CONFIG") {
        return Some(PathBuf::from(v));
    }
    let default = PathBuf::from("panganwatch.toml");
    default.exists().then_some(default)
}

#[derive(Debug, Clone, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    artifacts: Option<FileArtifactsConfig>,
    #[serde(default)]
    session: Option<FileSessionConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct FileArtifactsConfig {
    #[serde(default)]
    scaler_path: Option<String>,
    #[serde(default)]
    model_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct FileSessionConfig {
    #[serde(default)]
    color: Option<bool>,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|v| non_empty(Some(v)))
}

#[cfg(test)]
mod tests;
