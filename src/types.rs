//! Type-safe identifiers for reports, charts and output formats
//!
//! Command-line arguments and configuration values parse into these enums
//! instead of being matched as strings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Image format a chart is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    /// Raster image through the bitmap backend
    Png,
    /// Vector image through the SVG backend
    Svg,
}

impl ImageFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// Group of planning tables that are always exported together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ReportKind {
    /// Core features, ingredient analysis, recommendation rules, price sources
    ProductAnalysis,
    /// Visual features, recognition stages, misidentification guards, minimal info
    VisualRecognition,
}

impl ReportKind {
    /// Banner printed before the report's tables are written
    pub fn title(&self) -> &'static str {
        match self {
            Self::ProductAnalysis => "CosmicScan 서비스 핵심 목표 재정의",
            Self::VisualRecognition => "CosmicScan 제품 외형 인식 시스템 설계",
        }
    }
}

/// Static chart in the planning workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ChartKind {
    /// Horizontal bar chart of recognition accuracy per visual feature
    FeatureImportance,
    /// Flow diagram of the scanning user journey
    UserJourney,
}

impl ChartKind {
    /// Output file stem; each format appends its own extension
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::FeatureImportance => "feature_importance",
            Self::UserJourney => "cosmicscan_flow",
        }
    }
}

/// Shape of a flow diagram node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum NodeShape {
    /// Rectangular process step
    #[default]
    Box,
    /// Diamond decision point
    Decision,
}
