//! Output configuration for saving and loading export settings.
//!
//! Settings live in an optional JSON file; every field has a default so a
//! partial file (or none at all) is valid. Command-line flags are applied on
//! top by the binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::chart::ChartSize;
use crate::types::ImageFormat;

/// Largest accepted image edge, in pixels
pub const MAX_CHART_EDGE: u32 = 8192;

/// Where and how tables and charts are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory every CSV and image lands in
    pub output_dir: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
    /// Formats each chart is rendered in
    pub formats: Vec<ImageFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            chart_width: 700,
            chart_height: 500,
            formats: vec![ImageFormat::Png, ImageFormat::Svg],
        }
    }
}

impl OutputConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize output configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            anyhow::bail!("Output directory must be specified");
        }

        for (name, edge) in [("width", self.chart_width), ("height", self.chart_height)] {
            if edge == 0 || edge > MAX_CHART_EDGE {
                anyhow::bail!("Chart {name} must be between 1 and {MAX_CHART_EDGE} pixels");
            }
        }

        if self.formats.is_empty() {
            anyhow::bail!("At least one image format must be selected");
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.formats.iter().find(|f| !seen.insert(**f)) {
            anyhow::bail!("Image format '{dup}' is listed more than once");
        }

        Ok(())
    }

    pub fn chart_size(&self) -> ChartSize {
        ChartSize {
            width: self.chart_width,
            height: self.chart_height,
        }
    }
}
