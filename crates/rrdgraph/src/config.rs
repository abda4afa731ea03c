//! Configuration types for graph generation.
//!
//! This module provides configuration structures that control how rrdtool is
//! invoked and which attributes new graphs start with. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining rrdtool and graph settings.
//! - [`RrdtoolConfig`] - Controls which rrdtool binary is executed.
//! - [`GraphDefaults`] - Width, height and format applied to every new graph.
//!
//! # Example
//!
//! ```
//! # use rrdgraph::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [rrdtool]
//!     binary = "/opt/rrdtool/bin/rrdtool"
//!
//!     [graph]
//!     width = 800
//!     format = "SVG"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.graph().width().map(|w| w.pixels()), Some(800));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use rrdgraph_core::attribute::{Dimension, ImageFormat};

use crate::runner::ProcessRunner;

/// Top-level configuration combining rrdtool and graph settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// rrdtool invocation section.
    #[serde(default)]
    rrdtool: RrdtoolConfig,

    /// Graph defaults section.
    #[serde(default)]
    graph: GraphDefaults,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `rrdtool` - rrdtool invocation settings.
    /// * `graph` - Attributes applied to new graphs.
    pub fn new(rrdtool: RrdtoolConfig, graph: GraphDefaults) -> Self {
        Self { rrdtool, graph }
    }

    /// Returns the rrdtool configuration.
    pub fn rrdtool(&self) -> &RrdtoolConfig {
        &self.rrdtool
    }

    /// Returns the graph defaults.
    pub fn graph(&self) -> &GraphDefaults {
        &self.graph
    }
}

/// Settings for invoking rrdtool.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RrdtoolConfig {
    /// Path of the rrdtool binary. Looked up on `PATH` when unset.
    #[serde(default)]
    binary: Option<PathBuf>,
}

impl RrdtoolConfig {
    pub fn new(binary: Option<PathBuf>) -> Self {
        Self { binary }
    }

    /// Returns the configured binary path, if any.
    pub fn binary(&self) -> Option<&Path> {
        self.binary.as_deref()
    }

    /// Builds a [`ProcessRunner`] honoring the configured binary.
    pub fn runner(&self) -> ProcessRunner {
        match &self.binary {
            Some(binary) => ProcessRunner::with_binary(binary),
            None => ProcessRunner::new(),
        }
    }
}

/// Attributes every new graph starts with.
///
/// Values set on a graph afterwards take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDefaults {
    #[serde(default)]
    width: Option<Dimension>,

    #[serde(default)]
    height: Option<Dimension>,

    #[serde(default)]
    format: Option<ImageFormat>,
}

impl GraphDefaults {
    pub fn new(
        width: Option<Dimension>,
        height: Option<Dimension>,
        format: Option<ImageFormat>,
    ) -> Self {
        Self {
            width,
            height,
            format,
        }
    }

    pub fn width(&self) -> Option<Dimension> {
        self.width
    }

    pub fn height(&self) -> Option<Dimension> {
        self.height
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.rrdtool().binary().is_none());
        assert!(config.rrdtool().runner().binary().is_none());
        assert!(config.graph().width().is_none());
        assert!(config.graph().format().is_none());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.rrdtool().binary().is_none());
        assert!(config.graph().height().is_none());
    }

    #[test]
    fn test_full_document() {
        let config: AppConfig = toml::from_str(
            r#"
            [rrdtool]
            binary = "/usr/local/bin/rrdtool"

            [graph]
            width = 640
            height = 480
            format = "PDF"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.rrdtool().runner().binary(),
            Some(Path::new("/usr/local/bin/rrdtool"))
        );
        assert_eq!(config.graph().width(), Some(Dimension::new(640)));
        assert_eq!(config.graph().height(), Some(Dimension::new(480)));
        assert_eq!(config.graph().format(), Some(ImageFormat::Pdf));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = toml::from_str::<AppConfig>("[graph]\nformat = \"GIF\"\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("GIF"), "{err}");
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(toml::from_str::<AppConfig>("[graph]\ncolour = 1\n").is_err());
    }
}
