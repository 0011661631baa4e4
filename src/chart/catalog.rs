//! The charts of the planning workspace

use super::{Arrow, BarChart, Chart, EdgeLabel, FlowDiagram, FlowNode, FlowPalette};
use crate::datasets::visual_recognition::{self, ACCURACY_CONTRIBUTION};
use crate::error::{PlanningError, Result};
use crate::types::ChartKind;

pub fn chart(kind: ChartKind) -> Result<Chart> {
    match kind {
        ChartKind::FeatureImportance => feature_importance().map(Chart::Bar),
        ChartKind::UserJourney => Ok(Chart::Flow(user_journey())),
    }
}

/// Accuracy contribution per visual cue
///
/// Values come from the minimal-information table so the chart and the CSV
/// cannot drift apart; labels are the English names of its rows.
pub fn feature_importance() -> Result<BarChart> {
    let table = visual_recognition::minimal_info()?;
    let values = table
        .column(ACCURACY_CONTRIBUTION)
        .and_then(|c| c.integers())
        .ok_or_else(|| {
            PlanningError::chart(format!(
                "{} has no numeric '{ACCURACY_CONTRIBUTION}' column",
                table.file_name()
            ))
        })?
        .iter()
        .map(|&v| v as f64)
        .collect();

    Ok(BarChart {
        title: "Feature Importance for Product Recognition".to_string(),
        x_title: "Accuracy (%)".to_string(),
        y_title: "Features".to_string(),
        labels: [
            "Brand Logo",
            "Product Name Text",
            "Package Shape",
            "Primary Color",
            "Volume Info",
            "Product Category",
            "Unique Design",
        ]
        .map(String::from)
        .to_vec(),
        values,
        colors: [
            "#1FB8CD", "#DB4545", "#2E8B57", "#5D878F", "#D2BA4C", "#B4413C", "#964325",
        ]
        .map(String::from)
        .to_vec(),
    })
}

/// Scan-to-purchase user journey
pub fn user_journey() -> FlowDiagram {
    let nodes = vec![
        FlowNode::new("Take Photo", 2.0, 10.0),
        FlowNode::new("Extract Text", 2.0, 9.0),
        FlowNode::decision("Text Found?", 2.0, 8.0),
        FlowNode::new("Retake", 0.5, 7.0),
        FlowNode::new("Analyze Safety", 2.0, 7.0),
        FlowNode::decision("Harmful?", 2.0, 6.0),
        FlowNode::new("Show Warning", 0.5, 5.0),
        FlowNode::new("Show Safe", 3.5, 5.0),
        FlowNode::new("Check Certs", 2.0, 4.0),
        FlowNode::new("Find Similar", 2.0, 3.0),
        FlowNode::new("Check Compat", 2.0, 2.0),
        FlowNode::new("Search Prices", 2.0, 1.0),
        FlowNode::decision("Price Found?", 2.0, 0.0),
        FlowNode::new("Compare Prices", 0.5, -1.0),
        FlowNode::new("Search Links", 3.5, -1.0),
        FlowNode::new("Buy Links", 2.0, -2.0),
    ];

    let arrows = vec![
        Arrow::new(2.0, 10.0, 2.0, 9.0),
        Arrow::new(2.0, 9.0, 2.0, 8.0),
        // Text Found? -> Retake, then loop back to Take Photo
        Arrow::new(1.6, 8.0, 0.9, 7.0),
        Arrow::new(0.5, 7.15, 2.0, 9.85),
        Arrow::new(2.0, 7.8, 2.0, 7.2),
        Arrow::new(2.0, 7.0, 2.0, 6.2),
        Arrow::new(1.6, 6.0, 0.9, 5.2),
        Arrow::new(2.4, 6.0, 3.1, 5.2),
        Arrow::new(0.5, 4.85, 1.6, 4.2),
        Arrow::new(3.5, 4.85, 2.4, 4.2),
        Arrow::new(2.0, 4.0, 2.0, 3.0),
        Arrow::new(2.0, 3.0, 2.0, 2.0),
        Arrow::new(2.0, 2.0, 2.0, 1.0),
        Arrow::new(2.0, 1.0, 2.0, 0.2),
        Arrow::new(1.6, 0.0, 0.9, -0.8),
        Arrow::new(2.4, 0.0, 3.1, -0.8),
        Arrow::new(0.5, -1.15, 1.6, -1.8),
        Arrow::new(3.5, -1.15, 2.4, -1.8),
    ];

    let labels = vec![
        EdgeLabel::new("No", 1.2, 7.5),
        EdgeLabel::new("Yes", 2.8, 7.5),
        EdgeLabel::new("Yes", 1.2, 5.5),
        EdgeLabel::new("No", 2.8, 5.5),
        EdgeLabel::new("Yes", 1.2, -0.5),
        EdgeLabel::new("No", 2.8, -0.5),
    ];

    FlowDiagram {
        title: "CosmicScan User Journey Flow".to_string(),
        x_range: -0.5..4.5,
        y_range: -2.5..10.5,
        nodes,
        arrows,
        labels,
        palette: FlowPalette::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeShape;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_chart_validates() {
        for kind in ChartKind::iter() {
            chart(kind).unwrap().validate().unwrap();
        }
    }

    #[test]
    fn test_feature_importance_matches_table() {
        let chart = feature_importance().unwrap();
        assert_eq!(chart.values, vec![30.0, 25.0, 20.0, 10.0, 8.0, 5.0, 2.0]);
        assert_eq!(chart.labels.first().map(String::as_str), Some("Brand Logo"));
    }

    #[test]
    fn test_user_journey_shape_counts() {
        let flow = user_journey();
        assert_eq!(flow.nodes.len(), 16);
        assert_eq!(flow.arrows.len(), 18);
        assert_eq!(flow.labels.len(), 6);

        let decisions: Vec<_> = flow
            .nodes
            .iter()
            .filter(|n| n.shape == NodeShape::Decision)
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(decisions, vec!["Text Found?", "Harmful?", "Price Found?"]);
    }

    #[test]
    fn test_journey_starts_and_ends() {
        let flow = user_journey();
        assert_eq!(flow.node("Take Photo").map(|n| n.y), Some(10.0));
        assert_eq!(flow.node("Buy Links").map(|n| n.y), Some(-2.0));
    }
}
