//! Static chart rendering
//!
//! Charts are plain data ([`BarChart`], [`FlowDiagram`]) drawn with
//! [`plotters`] onto either a bitmap (PNG) or SVG backend. Drawing code is
//! generic over the backend so both formats share one implementation.
//! Text in both formats is laid out with the bundled DejaVu Sans face.

pub mod bar;
pub mod catalog;
pub mod flow;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{PlanningError, Result};
use crate::types::ImageFormat;

pub use bar::BarChart;
pub use flow::{Arrow, EdgeLabel, FlowDiagram, FlowNode, FlowPalette};

/// Family name every chart draws its text with
pub const FONT_FAMILY: &str = "sans-serif";

const SANS_SERIF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

/// Register the bundled face as [`FONT_FAMILY`]; later calls are no-ops
pub fn register_fonts() -> Result<()> {
    let registered = *FONT_REGISTERED
        .get_or_init(|| register_font(FONT_FAMILY, FontStyle::Normal, SANS_SERIF).is_ok());

    if registered {
        Ok(())
    } else {
        Err(PlanningError::drawing("bundled sans-serif font could not be loaded"))
    }
}

/// Output image size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 700,
            height: 500,
        }
    }
}

/// Any chart the workspace can render
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Bar(BarChart),
    Flow(FlowDiagram),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Self::Bar(chart) => &chart.title,
            Self::Flow(diagram) => &diagram.title,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Bar(chart) => chart.validate(),
            Self::Flow(diagram) => diagram.validate(),
        }
    }

    /// Render into `path` in the given format
    ///
    /// A failed render removes whatever the backend flushed to `path`.
    pub fn render(&self, path: &Path, format: ImageFormat, size: ChartSize) -> Result<()> {
        self.validate()?;
        register_fonts()?;

        let result = match format {
            ImageFormat::Png => self.render_with(BitMapBackend::new(path, (size.width, size.height))),
            ImageFormat::Svg => self.render_with(SVGBackend::new(path, (size.width, size.height))),
        };

        if result.is_err() && path.exists() {
            fs::remove_file(path)?;
        }
        result
    }

    fn render_with<DB: DrawingBackend>(&self, backend: DB) -> Result<()> {
        let root = backend.into_drawing_area();
        self.draw(&root)?;
        root.present().map_err(drawing_error)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        match self {
            Self::Bar(chart) => chart.draw(root),
            Self::Flow(diagram) => diagram.draw(root),
        }
    }
}

/// Parse a `#RRGGBB` color literal
pub fn parse_hex_color(hex: &str) -> Result<RGBColor> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.is_ascii())
        .ok_or_else(|| PlanningError::chart(format!("invalid color '{hex}'")))?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| PlanningError::chart(format!("invalid color '{hex}'")))
    };

    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub(crate) fn drawing_error<E: std::error::Error + Send + Sync>(
    err: DrawingAreaErrorKind<E>,
) -> PlanningError {
    PlanningError::drawing(err.to_string())
}
