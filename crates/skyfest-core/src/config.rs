// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::ConfigError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Reject malformed travel dates in the checked entry points instead of
    /// silently treating them as "no festival".
    #[serde(default)]
    pub strict_dates: bool,
}

impl ResolverConfig {
    pub fn strict() -> Self {
        Self { strict_dates: true }
    }

    pub fn default_path() -> PathBuf {
        ProjectDirs::from("org", "skyfest", "skyfest")
            .map(|dirs| dirs.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("skyfest.json"))
    }

    /// Reads the config at `path`. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("[Config] No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: ResolverConfig = serde_json::from_str(&content).map_err(|e| {
            log::error!("[Config] JSON Parse error for {:?}: {}", path, e);
            e
        })?;
        log::debug!("[Config] Loaded {:?}: {:?}", path, config);
        Ok(config)
    }
}
