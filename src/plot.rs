use std::f64::consts::PI;

use anyhow::{bail, Context, Result};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::color::Rgb;
use crate::config::Config;
use crate::polar::{self, PolarPoint};
use crate::sequence::SequenceStats;

/// Sample count for the tick arcs; alternating segments give the dotted look.
const ARC_SAMPLES: usize = 180;
/// Radial tick labels sit along the 22.5 degree direction, off the spokes.
const LABEL_THETA: f64 = PI / 8.0;

const SPOKES: [(f64, &str); 5] = [
    (0.0, "0"),
    (PI / 4.0, "π/4"),
    (PI / 2.0, "π/2"),
    (3.0 * PI / 4.0, "3π/4"),
    (PI, "π"),
];

/// Render the trajectory into the configured output file.
///
/// The backend is chosen by extension: `.svg` draws vector output,
/// anything else a bitmap. The summary must already have been printed by
/// the caller; nothing here touches stdout.
pub fn render(sequence: &[u128], config: &Config) -> Result<()> {
    if sequence.is_empty() {
        bail!("cannot render an empty sequence");
    }

    let path = &config.output.path;
    let size = (config.plot.width, config.plot.height);
    match path.extension().and_then(|e| e.to_str()) {
        Some("svg") => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_pit(&root, sequence, config)?;
            root.present()
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        _ => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_pit(&root, sequence, config)?;
            root.present()
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
    }
    Ok(())
}

fn draw_err<E: std::fmt::Display>(e: E) -> anyhow::Error {
    anyhow::anyhow!("drawing failed: {}", e)
}

fn rgb((r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

fn draw_pit<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    sequence: &[u128],
    config: &Config,
) -> Result<()> {
    let stats = SequenceStats::from_sequence(sequence);
    let points = polar::map_sequence(sequence);
    let r_max = points.iter().map(|p| p.radius).fold(0.0f64, f64::max);
    // Headroom so the rim, labels and a degenerate [1] run all stay visible.
    let r_lim = r_max.max(1.0) * 1.15;
    debug!(
        "drawing pit: {} edges, r_max {:.2}",
        sequence.len() - 1,
        r_max
    );

    let scheme = config.plot.color_scheme;
    let frame = rgb(scheme.frame_color());
    let ascend = rgb(scheme.edge_color(true));
    let descend = rgb(scheme.edge_color(false));
    let marker = config.plot.marker_size as i32;

    let caption = config.plot.title.clone().unwrap_or_else(|| {
        format!(
            "Binary Logarithmic Antlion's Pit | Start: {} | Max: {} | Steps: {}",
            stats.start, stats.max_value, stats.steps
        )
    });

    root.fill(&WHITE).map_err(draw_err)?;
    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", 24))
        .margin(12)
        .build_cartesian_2d(-r_lim..r_lim, (-0.08 * r_lim)..r_lim)
        .map_err(draw_err)?;

    let label_style = ("sans-serif", 13).into_font().color(&frame);

    // Upper-half polar frame: dotted arcs at every power-of-two gridline.
    for &tick in &polar::radial_ticks(r_max) {
        let arc: Vec<(f64, f64)> = (0..=ARC_SAMPLES)
            .map(|i| {
                let theta = PI * i as f64 / ARC_SAMPLES as f64;
                (f64::from(tick) * theta.cos(), f64::from(tick) * theta.sin())
            })
            .collect();
        chart
            .draw_series(
                arc.windows(2)
                    .step_by(2)
                    .map(|w| PathElement::new(w.to_vec(), frame.mix(0.4))),
            )
            .map_err(draw_err)?;
        chart
            .draw_series(std::iter::once(Text::new(
                format!("2^{}", tick),
                (
                    f64::from(tick) * LABEL_THETA.cos(),
                    f64::from(tick) * LABEL_THETA.sin(),
                ),
                label_style.clone(),
            )))
            .map_err(draw_err)?;
    }

    // Spokes with angle labels in pi notation.
    for &(theta, label) in &SPOKES {
        let rim = (r_lim * 0.97 * theta.cos(), r_lim * 0.97 * theta.sin());
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, 0.0), rim],
                frame.mix(0.25),
            )))
            .map_err(draw_err)?;
        chart
            .draw_series(std::iter::once(Text::new(
                label,
                rim,
                label_style.clone(),
            )))
            .map_err(draw_err)?;
    }

    // Central dashed axis: the 2^n tower the trajectory funnels around.
    if config.plot.central_axis {
        let top = (r_max * 1.1).min(r_lim).max(1.0);
        let dash = top / 40.0;
        let dashes = (0..40).step_by(2).map(|i| {
            let y = f64::from(i) * dash;
            PathElement::new(vec![(0.0, y), (0.0, y + dash)], frame.mix(0.5))
        });
        chart.draw_series(dashes).map_err(draw_err)?;
    }

    // Trajectory edges, colored by direction. A single-element run has no
    // edges and draws only the frame and the endpoint markers.
    let mut ascent_labeled = false;
    let mut descent_labeled = false;
    for (pair, coords) in sequence.windows(2).zip(points.windows(2)) {
        let ascending = pair[1] > pair[0];
        let color = if ascending { ascend } else { descend };
        let segment: Vec<(f64, f64)> =
            vec![coords[0].to_cartesian(), coords[1].to_cartesian()];

        let series = chart
            .draw_series(std::iter::once(PathElement::new(
                segment.clone(),
                color.mix(0.6),
            )))
            .map_err(draw_err)?;
        if ascending && !ascent_labeled {
            series.label("3n+1 ascent").legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], ascend)
            });
            ascent_labeled = true;
        } else if !ascending && !descent_labeled {
            series.label("n/2 descent").legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], descend)
            });
            descent_labeled = true;
        }

        chart
            .draw_series(
                segment
                    .into_iter()
                    .map(|c| Circle::new(c, marker, color.mix(0.6).filled())),
            )
            .map_err(draw_err)?;
    }

    draw_endpoints(&mut chart, &points, &stats, config)?;

    if config.plot.legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .border_style(frame.mix(0.5))
            .background_style(WHITE.mix(0.85))
            .draw()
            .map_err(draw_err)?;
    }

    Ok(())
}

fn draw_endpoints<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    points: &[PolarPoint],
    stats: &SequenceStats,
    config: &Config,
) -> Result<()> {
    let scheme = config.plot.color_scheme;
    let start = rgb(scheme.start_color());
    let exit = rgb(scheme.exit_color());
    let size = config.plot.marker_size as i32 * 3 + 2;

    let start_pt = points[0].to_cartesian();
    let exit_pt = points[points.len() - 1].to_cartesian();

    chart
        .draw_series(std::iter::once(Circle::new(start_pt, size, start.filled())))
        .map_err(draw_err)?
        .label(format!("Start: {}", stats.start))
        .legend(move |(x, y)| Circle::new((x + 9, y), 4, start.filled()));
    chart
        .draw_series(std::iter::once(Circle::new(exit_pt, size, exit.filled())))
        .map_err(draw_err)?
        .label("Exit (1)")
        .legend(move |(x, y)| Circle::new((x + 9, y), 4, exit.filled()));

    let note_style = ("sans-serif", 15).into_font().color(&BLACK);
    chart
        .draw_series(std::iter::once(Text::new(
            format!("  Entry: {}", stats.start),
            start_pt,
            note_style.clone(),
        )))
        .map_err(draw_err)?;
    chart
        .draw_series(std::iter::once(Text::new(
            "  Goal",
            exit_pt,
            note_style,
        )))
        .map_err(draw_err)?;

    Ok(())
}
