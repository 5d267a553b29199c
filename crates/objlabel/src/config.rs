// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Label configuration (TOML).
//!
//! ```toml
//! [hash_source]
//! kind = "mixed"
//! seed = 4660
//! ```

use crate::{HashSource, HostIntrospector, IdentityLabelFormatter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Label configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelConfig {
    /// How identity hashes are derived from addresses.
    #[serde(default)]
    pub hash_source: HashSource,
}

impl LabelConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            hash_source = ?config.hash_source,
            "Loaded label configuration"
        );
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let HashSource::Mixed { seed } = self.hash_source {
            if seed == 0 {
                return Err(ConfigError::Invalid(
                    "mixed hash source requires a non-zero seed".into(),
                ));
            }
            // TOML integers are i64.
            if i64::try_from(seed).is_err() {
                return Err(ConfigError::Invalid(format!(
                    "mixed hash seed {} exceeds {}",
                    seed,
                    i64::MAX
                )));
            }
        }
        Ok(())
    }

    /// Build the host introspector described by this configuration.
    pub fn introspector(&self) -> HostIntrospector {
        HostIntrospector::with_source(self.hash_source)
    }

    /// Build a formatter described by this configuration.
    pub fn formatter(&self) -> IdentityLabelFormatter {
        IdentityLabelFormatter::with_introspector(self.introspector())
    }
}
