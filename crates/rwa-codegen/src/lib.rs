//! RWA Studio Code Generator
//!
//! Produces the artifacts around the highlighter: the Solidity source of the
//! interest-note contract from a [`ContractConfig`], the HTML preview of a
//! highlighted source under a [`Theme`], and the TOML [`StudioConfig`] that
//! carries both.
//!
//! ```text
//! ContractConfig → template::generate() → Solidity source
//!                 → rwa_highlight::highlight(source, changed_values(prev, next))
//!                 → html::render(segments, theme) → <pre>…</pre>
//! ```

pub mod config;
pub mod html;
pub mod template;
pub mod theme;

pub use config::StudioConfig;
pub use template::{changed_values, generate, ContractConfig, SnapshotItem};
pub use theme::Theme;

/// Code generation error.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// A contract field holds a value the template cannot accept.
    #[error("Invalid {field}: {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        CodegenError::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}
