//! Chart.js configuration for the weekly sparkline.

use serde::Serialize;

pub const SPARKLINE_CANVAS_ID: &str = "sparkline";
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Fixed values for the first six days. Only the last point comes from the summary.
pub const PLACEHOLDER_SERIES: [f64; 6] = [1200.0, 1500.0, 1000.0, 1700.0, 1300.0, 1800.0];

const LINE_COLOR: &str = "#007bff";
const LINE_TENSION: f64 = 0.3;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<f64>,
    pub border_color: String,
    pub fill: bool,
    pub tension: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChartOptions {
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Plugins {
    pub legend: Visibility,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Scales {
    pub x: Visibility,
    pub y: Visibility,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Visibility {
    pub display: bool,
}

impl Visibility {
    pub const HIDDEN: Self = Self { display: false };
}

impl ChartConfig {
    /// Values of the first dataset, or an empty slice for a chart without data.
    pub fn series(&self) -> &[f64] {
        self.data
            .datasets
            .first()
            .map(|dataset| dataset.data.as_slice())
            .unwrap_or_default()
    }
}

/// Builds the sparkline: six placeholder days followed by today's revenue.
pub fn sparkline_config(revenue: f64) -> ChartConfig {
    let mut series = Vec::with_capacity(WEEKDAY_LABELS.len());
    series.extend_from_slice(&PLACEHOLDER_SERIES);
    series.push(revenue);

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: WEEKDAY_LABELS.iter().map(ToString::to_string).collect(),
            datasets: vec![Dataset {
                data: series,
                border_color: LINE_COLOR.to_string(),
                fill: false,
                tension: LINE_TENSION,
            }],
        },
        options: ChartOptions {
            plugins: Plugins {
                legend: Visibility::HIDDEN,
            },
            scales: Scales {
                x: Visibility::HIDDEN,
                y: Visibility::HIDDEN,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn last_point_is_revenue() {
        let config = sparkline_config(2100.0);
        assert_eq!(
            config.series(),
            &[1200.0, 1500.0, 1000.0, 1700.0, 1300.0, 1800.0, 2100.0]
        );
        assert_eq!(
            config.data.labels,
            vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        );
    }

    #[test]
    fn placeholders_do_not_depend_on_revenue() {
        for revenue in [0.0, -50.0, 1e9, 0.25] {
            let config = sparkline_config(revenue);
            assert_eq!(&config.series()[..6], &PLACEHOLDER_SERIES);
            assert_eq!(config.series().len(), 7);
        }
    }

    #[test]
    fn legend_and_axes_are_hidden() {
        let config = sparkline_config(10.0);
        assert!(!config.options.plugins.legend.display);
        assert!(!config.options.scales.x.display);
        assert!(!config.options.scales.y.display);
    }

    #[test]
    fn serializes_to_chartjs_shape() {
        let value = serde_json::to_value(sparkline_config(2100.0)).unwrap();
        assert_eq!(value["type"], json!("line"));
        assert_eq!(value["data"]["datasets"][0]["borderColor"], json!("#007bff"));
        assert_eq!(value["data"]["datasets"][0]["fill"], json!(false));
        assert_eq!(value["data"]["datasets"][0]["tension"], json!(0.3));
        assert_eq!(value["data"]["datasets"][0]["data"][6], json!(2100.0));
        assert_eq!(
            value["options"],
            json!({
                "plugins": { "legend": { "display": false } },
                "scales": { "x": { "display": false }, "y": { "display": false } }
            })
        );
    }
}
