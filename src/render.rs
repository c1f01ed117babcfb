use crate::chart::{SPARKLINE_CANVAS_ID, sparkline_config};
use crate::dom::{ChartBinding, TextTarget, TextTargets};
use crate::model::SalesSummary;
use anyhow::{Context, Result};

/// Writes the summary into the three text targets and mounts the sparkline.
pub fn render_dashboard<T, C>(summary: &SalesSummary, texts: &mut T, charts: &mut C) -> Result<()>
where
    T: TextTargets + ?Sized,
    C: ChartBinding + ?Sized,
{
    texts.set_text(TextTarget::TotalSales, &summary.total_sales.to_string());
    texts.set_text(TextTarget::BestItem, &summary.best_selling);
    texts.set_text(TextTarget::TrendIcon, summary.trend.glyph());

    charts
        .mount(SPARKLINE_CANVAS_ID, sparkline_config(summary.revenue))
        .context("failed to mount sparkline chart")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartConfig;
    use crate::dom::HostPage;
    use crate::model::{DisplayValue, Trend};
    use anyhow::anyhow;

    #[derive(Default)]
    struct RecordingTexts {
        writes: Vec<(TextTarget, String)>,
    }

    impl TextTargets for RecordingTexts {
        fn set_text(&mut self, target: TextTarget, text: &str) {
            self.writes.push((target, text.to_string()));
        }
    }

    #[derive(Default)]
    struct RecordingCharts {
        mounted: Vec<(String, ChartConfig)>,
    }

    impl ChartBinding for RecordingCharts {
        fn mount(&mut self, canvas_id: &str, config: ChartConfig) -> Result<()> {
            self.mounted.push((canvas_id.to_string(), config));
            Ok(())
        }
    }

    struct BrokenCanvas;

    impl ChartBinding for BrokenCanvas {
        fn mount(&mut self, _canvas_id: &str, _config: ChartConfig) -> Result<()> {
            Err(anyhow!("no 2d context"))
        }
    }

    fn widget_summary(trend: Trend) -> SalesSummary {
        SalesSummary {
            total_sales: DisplayValue::Number(4200.into()),
            best_selling: "Widget".to_string(),
            trend,
            revenue: 2100.0,
        }
    }

    #[test]
    fn renders_widget_summary() {
        let mut texts = RecordingTexts::default();
        let mut charts = RecordingCharts::default();

        render_dashboard(&widget_summary(Trend::Up), &mut texts, &mut charts).unwrap();

        assert_eq!(
            texts.writes,
            vec![
                (TextTarget::TotalSales, "4200".to_string()),
                (TextTarget::BestItem, "Widget".to_string()),
                (TextTarget::TrendIcon, "🔼".to_string()),
            ]
        );
        assert_eq!(charts.mounted.len(), 1);
        let (canvas, config) = &charts.mounted[0];
        assert_eq!(canvas, "sparkline");
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
    fn down_trend_uses_down_glyph() {
        let mut page = HostPage::new();
        render_dashboard(
            &widget_summary(Trend::Down),
            &mut page.texts,
            &mut page.canvases,
        )
        .unwrap();
        assert_eq!(page.text(TextTarget::TrendIcon), "🔽");
        assert_eq!(page.text(TextTarget::TotalSales), "4200");
        assert!(page.sparkline().is_some());
    }

    #[test]
    fn rendering_twice_on_one_page_fails() {
        let mut page = HostPage::new();
        let summary = widget_summary(Trend::Up);
        render_dashboard(&summary, &mut page.texts, &mut page.canvases).unwrap();
        assert!(render_dashboard(&summary, &mut page.texts, &mut page.canvases).is_err());
    }

    #[test]
    fn chart_failure_is_reported() {
        let mut texts = RecordingTexts::default();
        let err = render_dashboard(&widget_summary(Trend::Up), &mut texts, &mut BrokenCanvas)
            .unwrap_err();
        assert_eq!(err.to_string(), "failed to mount sparkline chart");
        assert_eq!(texts.writes.len(), 3);
    }
}
