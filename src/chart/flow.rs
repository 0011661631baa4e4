//! Hand-laid flow diagram
//!
//! Node positions, arrow endpoints and edge label positions are literal data
//! coordinates. Nothing is laid out automatically: the diagram is drawn on a
//! fixed axis range with hidden axes.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::collections::HashSet;
use std::ops::Range;

use super::{FONT_FAMILY, drawing_error, parse_hex_color};
use crate::error::{PlanningError, Result};
use crate::types::NodeShape;

/// Half extents of a box node, in data units
pub const BOX_HALF_WIDTH: f64 = 0.4;
pub const BOX_HALF_HEIGHT: f64 = 0.15;
/// Half extents of a decision diamond, in data units
pub const DIAMOND_HALF_WIDTH: f64 = 0.4;
pub const DIAMOND_HALF_HEIGHT: f64 = 0.2;

/// Arrowhead length and half width as fractions of the plot span
const HEAD_LENGTH: f64 = 0.022;
const HEAD_HALF_WIDTH: f64 = 0.009;

#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub shape: NodeShape,
}

impl FlowNode {
    pub fn new(label: &str, x: f64, y: f64) -> Self {
        Self {
            label: label.to_string(),
            x,
            y,
            shape: NodeShape::Box,
        }
    }

    pub fn decision(label: &str, x: f64, y: f64) -> Self {
        Self {
            shape: NodeShape::Decision,
            ..Self::new(label, x, y)
        }
    }

    /// Outline vertices, closed back to the first point
    pub fn outline(&self) -> Vec<(f64, f64)> {
        let (x, y) = (self.x, self.y);
        match self.shape {
            NodeShape::Box => vec![
                (x - BOX_HALF_WIDTH, y - BOX_HALF_HEIGHT),
                (x + BOX_HALF_WIDTH, y - BOX_HALF_HEIGHT),
                (x + BOX_HALF_WIDTH, y + BOX_HALF_HEIGHT),
                (x - BOX_HALF_WIDTH, y + BOX_HALF_HEIGHT),
                (x - BOX_HALF_WIDTH, y - BOX_HALF_HEIGHT),
            ],
            NodeShape::Decision => vec![
                (x - DIAMOND_HALF_WIDTH, y),
                (x, y + DIAMOND_HALF_HEIGHT),
                (x + DIAMOND_HALF_WIDTH, y),
                (x, y - DIAMOND_HALF_HEIGHT),
                (x - DIAMOND_HALF_WIDTH, y),
            ],
        }
    }
}

/// Straight connector with a head at `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl Arrow {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            from: (x1, y1),
            to: (x2, y2),
        }
    }
}

/// Free-standing branch annotation such as "Yes" or "No"
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl EdgeLabel {
    pub fn new(text: &str, x: f64, y: f64) -> Self {
        Self {
            text: text.to_string(),
            x,
            y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowPalette {
    pub border: String,
    pub box_fill: String,
    pub decision_fill: String,
    pub text: String,
    pub arrow: String,
}

impl Default for FlowPalette {
    fn default() -> Self {
        Self {
            border: "#21808d".to_string(),
            box_fill: "#e8f4f5".to_string(),
            decision_fill: "#f3f3ee".to_string(),
            text: "#13343b".to_string(),
            arrow: "#333333".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowDiagram {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub nodes: Vec<FlowNode>,
    pub arrows: Vec<Arrow>,
    pub labels: Vec<EdgeLabel>,
    pub palette: FlowPalette,
}

impl FlowDiagram {
    pub fn node(&self, label: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.label == label)
    }

    fn contains(&self, (x, y): (f64, f64)) -> bool {
        self.x_range.contains(&x) && self.y_range.contains(&y)
    }

    /// Node labels are unique and every coordinate lies inside the axes
    pub fn validate(&self) -> Result<()> {
        if self.x_range.is_empty() || self.y_range.is_empty() {
            return Err(PlanningError::chart(format!(
                "'{}' has an empty axis range",
                self.title
            )));
        }

        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.label.as_str()) {
                return Err(PlanningError::chart(format!(
                    "'{}' declares node '{}' twice",
                    self.title, node.label
                )));
            }
            if !node.outline().into_iter().all(|p| self.contains(p)) {
                return Err(PlanningError::chart(format!(
                    "node '{}' at ({}, {}) falls outside the plot",
                    node.label, node.x, node.y
                )));
            }
        }

        for arrow in &self.arrows {
            if !self.contains(arrow.from) || !self.contains(arrow.to) {
                return Err(PlanningError::chart(format!(
                    "arrow {:?} -> {:?} falls outside the plot",
                    arrow.from, arrow.to
                )));
            }
        }

        for label in &self.labels {
            if !self.contains((label.x, label.y)) {
                return Err(PlanningError::chart(format!(
                    "label '{}' falls outside the plot",
                    label.text
                )));
            }
        }

        for color in [
            &self.palette.border,
            &self.palette.box_fill,
            &self.palette.decision_fill,
            &self.palette.text,
            &self.palette.arrow,
        ] {
            parse_hex_color(color)?;
        }

        Ok(())
    }

    /// Triangle vertices of the head of `arrow`: tip first, then both barbs
    ///
    /// Computed in span-normalized space so heads look the same whatever the
    /// axis aspect ratio. Zero-length arrows have no head.
    pub fn arrow_head(&self, arrow: &Arrow) -> Option<[(f64, f64); 3]> {
        let sx = self.x_range.end - self.x_range.start;
        let sy = self.y_range.end - self.y_range.start;
        let dx = (arrow.to.0 - arrow.from.0) / sx;
        let dy = (arrow.to.1 - arrow.from.1) / sy;
        let len = dx.hypot(dy);
        if len == 0.0 {
            return None;
        }

        let (ux, uy) = (dx / len, dy / len);
        let base_x = arrow.to.0 - ux * HEAD_LENGTH * sx;
        let base_y = arrow.to.1 - uy * HEAD_LENGTH * sy;
        let (px, py) = (-uy * HEAD_HALF_WIDTH * sx, ux * HEAD_HALF_WIDTH * sy);

        Some([
            arrow.to,
            (base_x + px, base_y + py),
            (base_x - px, base_y - py),
        ])
    }

    pub(super) fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        let border = parse_hex_color(&self.palette.border)?;
        let box_fill = parse_hex_color(&self.palette.box_fill)?;
        let decision_fill = parse_hex_color(&self.palette.decision_fill)?;
        let text = parse_hex_color(&self.palette.text)?;
        let arrow_color = parse_hex_color(&self.palette.arrow)?;
        let centered = Pos::new(HPos::Center, VPos::Center);

        root.fill(&WHITE).map_err(drawing_error)?;

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, (FONT_FAMILY, 22))
            .margin(15)
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())
            .map_err(drawing_error)?;

        for node in &self.nodes {
            let (fill, font_size) = match node.shape {
                NodeShape::Box => (box_fill, 13),
                NodeShape::Decision => (decision_fill, 12),
            };
            let outline = node.outline();

            chart
                .draw_series(std::iter::once(Polygon::new(outline.clone(), fill.filled())))
                .map_err(drawing_error)?;
            chart
                .draw_series(std::iter::once(PathElement::new(
                    outline,
                    border.stroke_width(2),
                )))
                .map_err(drawing_error)?;
            chart
                .draw_series(std::iter::once(Text::new(
                    node.label.clone(),
                    (node.x, node.y),
                    (FONT_FAMILY, font_size)
                        .into_font()
                        .color(&text)
                        .pos(centered),
                )))
                .map_err(drawing_error)?;
        }

        for arrow in &self.arrows {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![arrow.from, arrow.to],
                    arrow_color.stroke_width(2),
                )))
                .map_err(drawing_error)?;
            if let Some(head) = self.arrow_head(arrow) {
                chart
                    .draw_series(std::iter::once(Polygon::new(
                        head.to_vec(),
                        arrow_color.filled(),
                    )))
                    .map_err(drawing_error)?;
            }
        }

        chart
            .draw_series(self.labels.iter().map(|label| {
                Text::new(
                    label.text.clone(),
                    (label.x, label.y),
                    (FONT_FAMILY, 11).into_font().color(&text).pos(centered),
                )
            }))
            .map_err(drawing_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagram() -> FlowDiagram {
        FlowDiagram {
            title: "flow".to_string(),
            x_range: 0.0..4.0,
            y_range: 0.0..4.0,
            nodes: vec![FlowNode::new("A", 2.0, 3.0), FlowNode::decision("B?", 2.0, 1.0)],
            arrows: vec![Arrow::new(2.0, 3.0, 2.0, 1.2)],
            labels: vec![EdgeLabel::new("Yes", 2.5, 2.0)],
            palette: FlowPalette::default(),
        }
    }

    #[test]
    fn test_valid_diagram() {
        assert!(diagram().validate().is_ok());
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut d = diagram();
        d.nodes.push(FlowNode::new("A", 1.0, 1.0));
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_node_outside_plot_rejected() {
        let mut d = diagram();
        d.nodes.push(FlowNode::new("edge", 3.8, 1.0));
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_arrow_outside_plot_rejected() {
        let mut d = diagram();
        d.arrows.push(Arrow::new(2.0, 3.0, 5.0, 3.0));
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_outlines_are_closed() {
        for node in diagram().nodes {
            let outline = node.outline();
            assert_eq!(outline.first(), outline.last());
        }
    }

    #[test]
    fn test_arrow_head_points_backwards_from_tip() {
        let d = diagram();
        let head = d.arrow_head(&d.arrows[0]).unwrap();
        assert_eq!(head[0], (2.0, 1.2));
        // downward arrow: barbs sit above the tip, symmetric around x = 2
        assert!(head[1].1 > 1.2 && head[2].1 > 1.2);
        assert!(((head[1].0 + head[2].0) / 2.0 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_length_arrow_has_no_head() {
        let d = diagram();
        assert!(d.arrow_head(&Arrow::new(1.0, 1.0, 1.0, 1.0)).is_none());
    }
}
