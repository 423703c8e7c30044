// ============================================================
// CHART BACKEND
// ============================================================
// plotters-based drawing of the five chart kinds to PNG files

use std::path::Path;

use plotters::prelude::*;

use crate::domain::error::{AppError, Result};
use crate::domain::render_config::RenderConfig;

use super::stats::{bin_densities, histogram_bins, kde_curve, Bin};

const CAPTION_FONT: (&str, u32) = ("sans-serif", 24);
const LABEL_AREA_X: u32 = 44;
const LABEL_AREA_Y: u32 = 64;

/// Slice colors cycled across pie charts
const PIE_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

fn render_err(err: impl std::fmt::Display) -> AppError {
    AppError::Render(err.to_string())
}

/// Padded axis range for a series; constant series get a unit of slack
fn padded_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}

/// Draw a line chart of (x, y) points in row order
pub fn draw_line(
    path: &Path,
    config: &RenderConfig,
    title: &str,
    xlabel: &str,
    ylabel: &str,
    points: &[(f64, f64)],
) -> Result<()> {
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(12)
        .x_label_area_size(LABEL_AREA_X)
        .y_label_area_size(LABEL_AREA_Y)
        .build_cartesian_2d(
            padded_range(points.iter().map(|p| p.0)),
            padded_range(points.iter().map(|p| p.1)),
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(xlabel)
        .y_desc(ylabel)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Draw a scatter chart of (x, y) points
pub fn draw_scatter(
    path: &Path,
    config: &RenderConfig,
    title: &str,
    xlabel: &str,
    ylabel: &str,
    points: &[(f64, f64)],
) -> Result<()> {
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(12)
        .x_label_area_size(LABEL_AREA_X)
        .y_label_area_size(LABEL_AREA_Y)
        .build_cartesian_2d(
            padded_range(points.iter().map(|p| p.0)),
            padded_range(points.iter().map(|p| p.1)),
        )
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(xlabel)
        .y_desc(ylabel)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            points
                .iter()
                .map(|p| Circle::new(*p, 3, BLUE.mix(0.7).filled())),
        )
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Draw a histogram of raw counts
pub fn draw_histogram(
    path: &Path,
    config: &RenderConfig,
    title: &str,
    xlabel: &str,
    values: &[f64],
) -> Result<()> {
    let bins = histogram_bins(values, config.bins);
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(12)
        .x_label_area_size(LABEL_AREA_X)
        .y_label_area_size(LABEL_AREA_Y)
        .build_cartesian_2d(bin_range(&bins), 0.0..max_count * 1.05)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(xlabel)
        .y_desc("Frequency")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(bins.iter().map(|b| {
            Rectangle::new(
                [(b.start, 0.0), (b.end, b.count as f64)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Draw a normalized histogram with a kernel density overlay
pub fn draw_density(
    path: &Path,
    config: &RenderConfig,
    title: &str,
    xlabel: &str,
    values: &[f64],
) -> Result<()> {
    let bins = histogram_bins(values, config.bins);
    let densities = bin_densities(&bins, values.len());
    let curve = kde_curve(values, 200);

    let y_max = densities
        .iter()
        .map(|(_, _, d)| *d)
        .chain(curve.iter().map(|(_, y)| *y))
        .fold(0.0f64, f64::max);
    let x_range = padded_range(
        curve
            .iter()
            .map(|(x, _)| *x)
            .chain(bins.iter().flat_map(|b| [b.start, b.end])),
    );

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, CAPTION_FONT)
        .margin(12)
        .x_label_area_size(LABEL_AREA_X)
        .y_label_area_size(LABEL_AREA_Y)
        .build_cartesian_2d(x_range, 0.0..y_max * 1.1)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(xlabel)
        .y_desc("Density")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(densities.iter().map(|(start, end, density)| {
            Rectangle::new([(*start, 0.0), (*end, *density)], BLUE.mix(0.35).filled())
        }))
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(curve, RED.stroke_width(2)))
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Draw a pie chart from labeled slice weights, with percentage labels
pub fn draw_pie(
    path: &Path,
    config: &RenderConfig,
    title: &str,
    slices: &[(String, f64)],
) -> Result<()> {
    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;
    let root = root.titled(title, CAPTION_FONT).map_err(render_err)?;

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.38;

    let sizes: Vec<f64> = slices.iter().map(|(_, weight)| *weight).collect();
    let labels: Vec<String> = slices.iter().map(|(label, _)| label.clone()).collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|i| PIE_PALETTE[i % PIE_PALETTE.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 16).into_font());
    pie.percentages(("sans-serif", 14).into_font().color(&WHITE));

    root.draw(&pie).map_err(render_err)?;
    root.present().map_err(render_err)?;
    Ok(())
}

fn bin_range(bins: &[Bin]) -> std::ops::Range<f64> {
    match (bins.first(), bins.last()) {
        (Some(first), Some(last)) => first.start..last.end,
        _ => 0.0..1.0,
    }
}
