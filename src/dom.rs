use crate::chart::{ChartConfig, SPARKLINE_CANVAS_ID};
use anyhow::{Result, anyhow};

/// Text elements the dashboard writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTarget {
    TotalSales,
    BestItem,
    TrendIcon,
}

impl TextTarget {
    pub const ALL: [Self; 3] = [Self::TotalSales, Self::BestItem, Self::TrendIcon];

    pub const fn element_id(self) -> &'static str {
        match self {
            Self::TotalSales => "total-sales",
            Self::BestItem => "best-item",
            Self::TrendIcon => "trend-icon",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalSales => "Total sales",
            Self::BestItem => "Best seller",
            Self::TrendIcon => "Trend",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::TotalSales => 0,
            Self::BestItem => 1,
            Self::TrendIcon => 2,
        }
    }
}

pub trait TextTargets {
    fn set_text(&mut self, target: TextTarget, text: &str);
}

/// Stand-in for the chart library constructor: binds a configuration to a canvas.
pub trait ChartBinding {
    fn mount(&mut self, canvas_id: &str, config: ChartConfig) -> Result<()>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextFields {
    values: [String; 3],
}

impl TextFields {
    pub fn get(&self, target: TextTarget) -> &str {
        &self.values[target.index()]
    }
}

impl TextTargets for TextFields {
    fn set_text(&mut self, target: TextTarget, text: &str) {
        let slot = &mut self.values[target.index()];
        slot.clear();
        slot.push_str(text);
    }
}

#[derive(Debug, Clone)]
struct Canvas {
    id: &'static str,
    chart: Option<ChartConfig>,
}

/// Canvases present on the page, each holding at most one chart.
#[derive(Debug, Clone)]
pub struct Canvases {
    canvases: Vec<Canvas>,
}

impl Canvases {
    pub fn new(ids: &[&'static str]) -> Self {
        let canvases = ids.iter().map(|&id| Canvas { id, chart: None }).collect();
        Self { canvases }
    }

    pub fn chart(&self, canvas_id: &str) -> Option<&ChartConfig> {
        self.canvases
            .iter()
            .find(|canvas| canvas.id == canvas_id)
            .and_then(|canvas| canvas.chart.as_ref())
    }
}

impl ChartBinding for Canvases {
    fn mount(&mut self, canvas_id: &str, config: ChartConfig) -> Result<()> {
        let canvas = self
            .canvases
            .iter_mut()
            .find(|canvas| canvas.id == canvas_id)
            .ok_or_else(|| anyhow!("canvas #{canvas_id} not found on the page"))?;
        if canvas.chart.is_some() {
            return Err(anyhow!(
                "canvas #{canvas_id} is already in use; a chart is already mounted on it"
            ));
        }
        canvas.chart = Some(config);
        Ok(())
    }
}

/// In-memory page carrying the dashboard's element contract.
#[derive(Debug, Clone)]
pub struct HostPage {
    pub texts: TextFields,
    pub canvases: Canvases,
}

impl HostPage {
    pub fn new() -> Self {
        Self {
            texts: TextFields::default(),
            canvases: Canvases::new(&[SPARKLINE_CANVAS_ID]),
        }
    }

    pub fn text(&self, target: TextTarget) -> &str {
        self.texts.get(target)
    }

    pub fn sparkline(&self) -> Option<&ChartConfig> {
        self.canvases.chart(SPARKLINE_CANVAS_ID)
    }
}

impl Default for HostPage {
    fn default() -> Self {
        Self::new()
    }
}
