//! Studio configuration file.
//!
//! ```toml
//! [contract]
//! asset-name = "Harborview Warehouse"
//! coupon-bps = 850
//! max-supply = 1000000
//! admin = "0x0000000000000000000000000000000000000000"
//! governance-model = "Foundation + Board oversight"
//!
//! [theme]
//! keyword = "text-sky-400"
//! ```

use crate::template::ContractConfig;
use crate::theme::Theme;
use crate::CodegenError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub contract: ContractConfig,
    pub theme: Theme,
}

impl StudioConfig {
    /// Parse a config from TOML text. Absent sections and keys use defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, CodegenError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, CodegenError> {
        let text = std::fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded studio config");
        Ok(config)
    }
}
