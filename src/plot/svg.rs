use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::metrics::summary::SeriesSummary;
use crate::plot::render::{output_path, Renderer};
use crate::plot::style::{MarkerShape, SeriesStyle, BAND_OPACITY, X_LABEL, Y_LABEL};

const LABEL_SIZE: f64 = 8.0;
const DESC_SIZE: f64 = 9.0;
const MARKER_SIZE: i32 = 2;

/// Square SVG chart with a log runtime axis.
pub struct SvgRenderer {
    size_px: u32,
}

impl SvgRenderer {
    pub fn new(size_px: u32) -> Self {
        Self { size_px }
    }
}

impl Renderer for SvgRenderer {
    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, summary: &[SeriesSummary], base: &Path) -> Result<PathBuf> {
        let path = output_path(base, self.extension());
        let (x_range, y_range) = match axis_ranges(summary) {
            Some(ranges) => ranges,
            None => bail!("nothing to plot for {}", base.display()),
        };

        {
            let root = SVGBackend::new(&path, (self.size_px, self.size_px)).into_drawing_area();
            draw_chart(&root, summary, x_range, y_range)
                .with_context(|| format!("failed to draw {}", path.display()))?;
            root.present()
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        Ok(path)
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    summary: &[SeriesSummary],
    (x_lo, x_hi): (f64, f64),
    (y_lo, y_hi): (f64, f64),
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(4)
        .x_label_area_size(24)
        .y_label_area_size(34)
        .build_cartesian_2d(x_lo..x_hi, (y_lo..y_hi).log_scale())?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .x_labels(5)
        .y_labels(5)
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0e}", v))
        .label_style(font(LABEL_SIZE))
        .axis_desc_style(font(DESC_SIZE))
        .axis_style(BLACK)
        .bold_line_style(BLACK.mix(0.12))
        .light_line_style(TRANSPARENT)
        .draw()?;

    let clamp = |v: f64| v.max(y_lo);

    for (i, series) in summary.iter().enumerate() {
        let style = SeriesStyle::nth(i);
        let color = rgb(&style);
        let mut band: Vec<(f64, f64)> =
            series.points.iter().map(|p| (p.target as f64, clamp(p.upper))).collect();
        band.extend(series.points.iter().rev().map(|p| (p.target as f64, clamp(p.lower))));
        chart.draw_series(std::iter::once(Polygon::new(band, color.mix(BAND_OPACITY).filled())))?;
    }

    for (i, series) in summary.iter().enumerate() {
        let style = SeriesStyle::nth(i);
        let color = rgb(&style);
        let pixels: Vec<(i32, i32)> = series
            .points
            .iter()
            .map(|p| chart.backend_coord(&(p.target as f64, clamp(p.median))))
            .collect();
        for segment in dash_segments(&pixels, style.dash.pattern()) {
            root.draw(&PathElement::new(segment, color.stroke_width(1)))?;
        }
        for &pixel in &pixels {
            draw_marker(root, pixel, style.marker, color)?;
        }
    }

    // matplotlib-style frame: all four sides solid black
    let plotting_area = chart.plotting_area().strip_coord_spec();
    let (w, h) = plotting_area.dim_in_pixel();
    plotting_area.draw(&Rectangle::new([(0, 0), (w as i32 - 1, h as i32 - 1)], BLACK.stroke_width(1)))?;

    draw_legend(root, summary, chart.backend_coord(&(x_lo, y_hi)))?;
    Ok(())
}

/// Legend in the upper left corner of the plotting area, without a frame.
fn draw_legend<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    summary: &[SeriesSummary],
    (left, top): (i32, i32),
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let line_len = 14;
    let row_height = LABEL_SIZE as i32 + 3;
    for (i, series) in summary.iter().enumerate() {
        let style = SeriesStyle::nth(i);
        let color = rgb(&style);
        let y = top + 6 + i as i32 * row_height;
        let x = left + 4;
        for segment in dash_segments(&[(x, y), (x + line_len, y)], style.dash.pattern()) {
            root.draw(&PathElement::new(segment, color.stroke_width(1)))?;
        }
        draw_marker(root, (x + line_len / 2, y), style.marker, color)?;
        root.draw(&Text::new(
            series.algorithm.clone(),
            (x + line_len + 3, y - LABEL_SIZE as i32 / 2),
            font(LABEL_SIZE).color(&BLACK),
        ))?;
    }
    Ok(())
}

fn draw_marker<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    (x, y): (i32, i32),
    shape: MarkerShape,
    color: RGBColor,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let s = MARKER_SIZE;
    match shape {
        MarkerShape::Circle => root.draw(&Circle::new((x, y), s, color.filled()))?,
        MarkerShape::Square => root.draw(&Rectangle::new([(x - s, y - s), (x + s, y + s)], color.filled()))?,
        MarkerShape::Diamond => root.draw(&Polygon::new(
            vec![(x, y - s - 1), (x + s + 1, y), (x, y + s + 1), (x - s - 1, y)],
            color.filled(),
        ))?,
        MarkerShape::Triangle => root.draw(&TriangleMarker::new((x, y), s + 1, color.filled()))?,
        MarkerShape::Cross => {
            root.draw(&PathElement::new(vec![(x - s, y - s), (x + s, y + s)], color.stroke_width(1)))?;
            root.draw(&PathElement::new(vec![(x - s, y + s), (x + s, y - s)], color.stroke_width(1)))?;
        }
        MarkerShape::Plus => {
            root.draw(&PathElement::new(vec![(x - s - 1, y), (x + s + 1, y)], color.stroke_width(1)))?;
            root.draw(&PathElement::new(vec![(x, y - s - 1), (x, y + s + 1)], color.stroke_width(1)))?;
        }
    }
    Ok(())
}

fn font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::Serif, size, FontStyle::Normal)
}

fn rgb(style: &SeriesStyle) -> RGBColor {
    let (r, g, b) = style.color;
    RGBColor(r, g, b)
}

/// Target and runtime ranges covering every point, padded for the log axis.
fn axis_ranges(summary: &[SeriesSummary]) -> Option<((f64, f64), (f64, f64))> {
    let points: Vec<_> = summary.iter().flat_map(|s| s.points.iter()).collect();
    if points.is_empty() {
        return None;
    }
    let x_min = points.iter().map(|p| p.target as f64).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.target as f64).fold(f64::NEG_INFINITY, f64::max);
    let pad = if x_max > x_min { (x_max - x_min) * 0.03 } else { 1.0 };

    let positive = points
        .iter()
        .flat_map(|p| [p.lower, p.median, p.upper])
        .filter(|v| v.is_finite() && *v > 0.0);
    let (y_min, y_max) = positive.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let (y_lo, y_hi) = if y_min.is_finite() { (y_min / 1.5, y_max * 1.5) } else { (0.5, 2.0) };

    Some(((x_min - pad, x_max + pad), (y_lo, y_hi)))
}

/// Splits a polyline into the "on" pieces of a repeating on/off dash pattern.
pub fn dash_segments(points: &[(i32, i32)], pattern: &[u32]) -> Vec<Vec<(i32, i32)>> {
    if points.len() < 2 {
        return Vec::new();
    }
    if pattern.iter().all(|&p| p == 0) {
        return vec![points.to_vec()];
    }

    let round = |(x, y): (f64, f64)| (x.round() as i32, y.round() as i32);
    let mut out = Vec::new();
    let mut current: Vec<(i32, i32)> = Vec::new();
    let mut idx = 0;
    let mut left = pattern[0] as f64;

    for edge in points.windows(2) {
        let (x0, y0) = (edge[0].0 as f64, edge[0].1 as f64);
        let (x1, y1) = (edge[1].0 as f64, edge[1].1 as f64);
        let len = (x1 - x0).hypot(y1 - y0);
        let at = |d: f64| (x0 + (x1 - x0) * d / len, y0 + (y1 - y0) * d / len);
        let mut pos = 0.0;
        while pos < len {
            let step = left.min(len - pos);
            if idx % 2 == 0 {
                if current.is_empty() {
                    current.push(round(at(pos)));
                }
                current.push(round(at(pos + step)));
            }
            pos += step;
            left -= step;
            if left <= 1e-9 {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
                idx = (idx + 1) % pattern.len();
                left = pattern[idx] as f64;
            }
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
