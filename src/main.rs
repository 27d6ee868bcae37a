use corrophasor::{
    build_time_axis, lifetime_loci, make_synthetic_flim, phasor_components,
    CorrophasorError,
};

const LASER_FREQUENCY_MHZ : f64 = 80.0;
const LIFETIMES_NS : [f64 ; 5] = [0.5, 1.0, 2.0, 4.0, 8.0];

fn run() -> Result<(), CorrophasorError> {
    let time_axis = build_time_axis(LASER_FREQUENCY_MHZ, 1000)?;
    let stack = make_synthetic_flim(&time_axis.view(), &[1.0], &LIFETIMES_NS)?;
    let phasors = phasor_components(&stack.view(), 1)?;
    let loci = lifetime_loci(&LIFETIMES_NS, LASER_FREQUENCY_MHZ)?;

    println!("tau (ns)  G        S        theory G  theory S");
    for (pixel, locus) in loci.iter().enumerate() {
        println!(
            "{:<8}  {:.5}  {:.5}  {:.5}   {:.5}",
            locus.lifetime_ns,
            phasors.g[[0, pixel]],
            phasors.s[[0, pixel]],
            locus.g,
            locus.s,
        );
    }
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {},
        Err(e) => {
            println!(
                "Error: {}",
                e
            );
        }
    };
}
