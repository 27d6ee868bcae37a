//! # Phasor plotting
//!
//! Draws the reference geometry and phasor scatter data onto a
//! `plotters` chart. Only compiled with the `plot` feature. The numeric
//! work all lives elsewhere: these helpers take precomputed geometry,
//! never validate, and only surface the backend's drawing errors.

use ndarray::prelude::*;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::geometry::{semicircle_locus, LifetimeLocus};

/// The chart the helpers draw onto: plain (G, S) axes.
pub type PhasorChart<'a, DB : DrawingBackend> =
    ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Overlays the universal semicircle as a translucent grey arc.
pub fn add_phasor_circle<'a, DB>(
    chart : &mut PhasorChart<'a, DB>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB : DrawingBackend,
{
    let (g, s) = semicircle_locus();
    chart.draw_series(LineSeries::new(
        g.iter().zip(s.iter()).map(|(&g, &s)| (g, s)),
        &BLACK.mix(0.3),
    ))?;
    Ok(())
}

/// Marks each lifetime locus: an open circle on the semicircle plus the
/// ray from the origin out to it, one palette color per lifetime.
pub fn add_tau_lines<'a, DB>(
    chart : &mut PhasorChart<'a, DB>,
    loci : &[LifetimeLocus],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB : DrawingBackend,
{
    for (idx, locus) in loci.iter().enumerate() {
        let color = Palette99::pick(idx);
        chart.draw_series(std::iter::once(Circle::new(
            (locus.g, locus.s),
            4,
            color.stroke_width(1),
        )))?;
        chart.draw_series(LineSeries::new(
            locus.ray_g.iter().zip(locus.ray_s.iter()).map(|(&g, &s)| (g, s)),
            &color,
        ))?;
    }
    Ok(())
}

/// Scatters co-indexed pixelwise (G, S) pairs as open circles.
pub fn add_phasor_scatter<'a, DB>(
    chart : &mut PhasorChart<'a, DB>,
    g : &ArrayView2<f64>,
    s : &ArrayView2<f64>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB : DrawingBackend,
{
    chart.draw_series(
        g.iter().zip(s.iter())
            .map(|(&g, &s)| Circle::new((g, s), 3, BLUE.stroke_width(1))),
    )?;
    Ok(())
}
