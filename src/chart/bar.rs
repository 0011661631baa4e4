//! Horizontal bar chart
//!
//! Categories run up the Y axis (first category at the bottom), values along
//! the X axis, one fill color per bar.

use plotters::coord::Shift;
use plotters::coord::ranged1d::SegmentedCoord;
use plotters::coord::types::RangedCoordusize;
use plotters::prelude::*;

use super::{FONT_FAMILY, drawing_error, parse_hex_color};
use crate::error::{PlanningError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

impl BarChart {
    pub fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(PlanningError::chart(format!(
                "'{}' has no categories",
                self.title
            )));
        }

        if self.values.len() != self.labels.len() || self.colors.len() != self.labels.len() {
            return Err(PlanningError::chart(format!(
                "'{}' has {} labels, {} values and {} colors",
                self.title,
                self.labels.len(),
                self.values.len(),
                self.colors.len()
            )));
        }

        if let Some(bad) = self.values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(PlanningError::chart(format!(
                "'{}' has invalid value {bad}",
                self.title
            )));
        }

        for color in &self.colors {
            parse_hex_color(color)?;
        }

        Ok(())
    }

    /// Upper end of the value axis, with headroom past the longest bar
    pub fn axis_max(&self) -> f64 {
        let max = self.values.iter().copied().fold(0.0, f64::max);
        if max > 0.0 { max * 1.1 } else { 1.0 }
    }

    /// Category axis with exactly one band per label
    ///
    /// Integer ranges are inclusive at both ends, so `count` labels span
    /// `0..count - 1`.
    pub fn category_axis(&self) -> SegmentedCoord<RangedCoordusize> {
        (0usize..self.labels.len().saturating_sub(1)).into_segmented()
    }

    pub(super) fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        let colors = self
            .colors
            .iter()
            .map(|c| parse_hex_color(c))
            .collect::<Result<Vec<_>>>()?;
        let count = self.labels.len();

        root.fill(&WHITE).map_err(drawing_error)?;

        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, (FONT_FAMILY, 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(140)
            .build_cartesian_2d(0f64..self.axis_max(), self.category_axis())
            .map_err(drawing_error)?;

        let category = |value: &SegmentValue<usize>| match value {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                self.labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        };

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc(self.x_title.as_str())
            .y_desc(self.y_title.as_str())
            .y_labels(count)
            .y_label_formatter(&category)
            .label_style((FONT_FAMILY, 13))
            .draw()
            .map_err(drawing_error)?;

        chart
            .draw_series(self.values.iter().zip(&colors).enumerate().map(
                |(i, (&value, color))| {
                    let (bottom, top) = bar_extent(i, count);
                    let mut bar = Rectangle::new([(0.0, bottom), (value, top)], color.filled());
                    bar.set_margin(6, 6, 0, 0);
                    bar
                },
            ))
            .map_err(drawing_error)?;

        Ok(())
    }
}

/// Lower and upper edge of bar `index`; the topmost bar closes on the axis end
fn bar_extent(index: usize, count: usize) -> (SegmentValue<usize>, SegmentValue<usize>) {
    let top = if index + 1 < count {
        SegmentValue::Exact(index + 1)
    } else {
        SegmentValue::Last
    };
    (SegmentValue::Exact(index), top)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> BarChart {
        BarChart {
            title: "t".to_string(),
            x_title: "x".to_string(),
            y_title: "y".to_string(),
            labels: vec!["a".to_string(), "b".to_string()],
            values: vec![30.0, 25.0],
            colors: vec!["#1FB8CD".to_string(), "#DB4545".to_string()],
        }
    }

    #[test]
    fn test_valid_chart() {
        assert!(chart().validate().is_ok());
    }

    #[test]
    fn test_mismatched_series_rejected() {
        let mut c = chart();
        c.colors.pop();
        assert!(matches!(c.validate(), Err(PlanningError::Chart(_))));
    }

    #[test]
    fn test_negative_value_rejected() {
        let mut c = chart();
        c.values[1] = -1.0;
        assert!(c.validate().is_err());
        c.values[1] = f64::NAN;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_category_axis_has_one_band_per_label() {
        let mut c = chart();
        c.labels = (0..7).map(|i| i.to_string()).collect();
        let axis = c.category_axis();

        // 7 bands of 100px over a 700px axis, the last one ending at the edge
        assert_eq!(axis.map(&SegmentValue::Exact(0), (0, 700)), 0);
        assert_eq!(axis.map(&SegmentValue::Exact(6), (0, 700)), 600);
        assert_eq!(axis.map(&SegmentValue::Last, (0, 700)), 700);
    }

    #[test]
    fn test_bar_extent_closes_last_bar_on_axis_end() {
        assert!(matches!(
            bar_extent(0, 7),
            (SegmentValue::Exact(0), SegmentValue::Exact(1))
        ));
        assert!(matches!(
            bar_extent(6, 7),
            (SegmentValue::Exact(6), SegmentValue::Last)
        ));
    }

    #[test]
    fn test_axis_max_leaves_headroom() {
        assert!((chart().axis_max() - 33.0).abs() < 1e-9);
        let mut c = chart();
        c.values = vec![0.0, 0.0];
        assert_eq!(c.axis_max(), 1.0);
    }
}
