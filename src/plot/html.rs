use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use plotly::common::{DashType, Fill, Line, Marker, MarkerSymbol, Mode, Title};
use plotly::layout::{Axis, AxisType, Layout, Legend};
use plotly::{Plot, Scatter};

use crate::metrics::summary::SeriesSummary;
use crate::plot::render::{output_path, Renderer};
use crate::plot::style::{DashStyle, MarkerShape, SeriesStyle, BAND_OPACITY, X_LABEL, Y_LABEL};

/// Interactive plotly page with the same series as the SVG chart.
#[derive(Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn marker_symbol(shape: MarkerShape) -> MarkerSymbol {
    match shape {
        MarkerShape::Circle => MarkerSymbol::Circle,
        MarkerShape::Cross => MarkerSymbol::X,
        MarkerShape::Square => MarkerSymbol::Square,
        MarkerShape::Plus => MarkerSymbol::Cross,
        MarkerShape::Diamond => MarkerSymbol::Diamond,
        MarkerShape::Triangle => MarkerSymbol::TriangleUp,
    }
}

fn dash_type(dash: DashStyle) -> DashType {
    match dash {
        DashStyle::Solid => DashType::Solid,
        DashStyle::Dashed => DashType::Dash,
        DashStyle::Dotted => DashType::Dot,
        DashStyle::DashDot => DashType::DashDot,
    }
}

// Band first (upper edge, then lower edge filled up to it), median on top.
fn add_series(plot: &mut Plot, series: &SeriesSummary, style: &SeriesStyle) {
    let xs: Vec<u64> = series.points.iter().map(|p| p.target).collect();
    let group = series.algorithm.as_str();

    let upper = Scatter::new(xs.clone(), series.points.iter().map(|p| p.upper).collect::<Vec<f64>>())
        .mode(Mode::Lines)
        .line(Line::new().width(0.0).color(style.css_color(0.0)))
        .legend_group(group)
        .show_legend(false);
    let lower = Scatter::new(xs.clone(), series.points.iter().map(|p| p.lower).collect::<Vec<f64>>())
        .mode(Mode::Lines)
        .line(Line::new().width(0.0).color(style.css_color(0.0)))
        .fill(Fill::ToNextY)
        .fill_color(style.css_color(BAND_OPACITY))
        .legend_group(group)
        .show_legend(false);
    let median = Scatter::new(xs, series.points.iter().map(|p| p.median).collect::<Vec<f64>>())
        .mode(Mode::LinesMarkers)
        .name(group)
        .legend_group(group)
        .line(Line::new().color(style.css_color(1.0)).dash(dash_type(style.dash)))
        .marker(Marker::new().symbol(marker_symbol(style.marker)).color(style.css_color(1.0)));

    plot.add_trace(upper);
    plot.add_trace(lower);
    plot.add_trace(median);
}

fn framed_axis(title: &str) -> Axis {
    Axis::new()
        .title(Title::new(title))
        .show_line(true)
        .line_color("black")
        .mirror(true)
        .zero_line(false)
}

pub fn build_plot(summary: &[SeriesSummary], title: &str) -> Plot {
    let mut plot = Plot::new();
    for (i, series) in summary.iter().enumerate() {
        add_series(&mut plot, series, &SeriesStyle::nth(i));
    }
    let layout = Layout::new()
        .title(Title::new(title))
        .x_axis(framed_axis(X_LABEL))
        .y_axis(framed_axis(Y_LABEL).type_(AxisType::Log))
        .legend(Legend::new().x(0.01).y(0.99).border_width(0));
    plot.set_layout(layout);
    plot
}

impl Renderer for HtmlRenderer {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, summary: &[SeriesSummary], base: &Path) -> Result<PathBuf> {
        if summary.iter().all(|s| s.points.is_empty()) {
            bail!("nothing to plot for {}", base.display());
        }
        let path = output_path(base, self.extension());
        let title = base
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        // This already contains <div id="..."> + <script>...</script>
        let plot_html = build_plot(summary, &title).to_inline_html(None);
        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="https://cdn.plot.ly/plotly-latest.min.js"></script>
</head>
<body>
{plot_html}
</body>
</html>
"#,
            title = title,
            plot_html = plot_html,
        );
        fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
