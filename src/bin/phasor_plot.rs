//! Renders a phasor plot of synthetic decays to `phasor_plot.png`:
//! the universal semicircle, a marker and origin ray per lifetime, and
//! the phasor of each synthetic pixel scattered on top.

use corrophasor::plot::{add_phasor_circle, add_phasor_scatter, add_tau_lines};
use corrophasor::{
    build_time_axis, lifetime_loci, make_synthetic_flim, phasor_components,
};
use plotters::prelude::*;

const LASER_FREQUENCY_MHZ : f64 = 80.0;
const LIFETIMES_NS : [f64 ; 5] = [0.5, 1.0, 2.0, 4.0, 8.0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time_axis = build_time_axis(LASER_FREQUENCY_MHZ, 1000)?;
    let stack = make_synthetic_flim(&time_axis.view(), &[1.0], &LIFETIMES_NS)?;
    let phasors = phasor_components(&stack.view(), 1)?;
    let loci = lifetime_loci(&LIFETIMES_NS, LASER_FREQUENCY_MHZ)?;

    let root = BitMapBackend::new("phasor_plot.png", (800, 500))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Synthetic FLIM phasors", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..1.05, 0.0..0.6)?;
    chart.configure_mesh().x_desc("G").y_desc("S").draw()?;

    add_phasor_circle(&mut chart)?;
    add_tau_lines(&mut chart, &loci)?;
    add_phasor_scatter(&mut chart, &phasors.g.view(), &phasors.s.view())?;

    root.present()?;
    println!("Wrote phasor_plot.png");
    Ok(())
}
