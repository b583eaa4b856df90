//! Print the sky of a given instant.
//!
//! ```text
//! RUST_LOG=debug cargo run --example sky_positions -- "2020-10-13T00:00:00 UTC" 48.85 2.35
//! ```
//!
//! Arguments are optional: instant (defaults to J2000.0), observer latitude and longitude in
//! degrees (default 0, 0).
use std::{env, error::Error};

use orrery::{orrery::Orrery, time::Instant};

fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::Builder::from_default_env().try_init();

    let mut args = env::args().skip(1);
    let instant: Instant = match args.next() {
        Some(s) => s.parse()?,
        None => Instant::J2000,
    };
    let latitude: f64 = args.next().map_or(Ok(0.0), |s| s.parse())?;
    let longitude: f64 = args.next().map_or(Ok(0.0), |s| s.parse())?;

    let orrery = Orrery::new();

    println!("Sky at {instant} (JD {:.5})\n", instant.julian_date());
    for (body, result) in orrery.compute_all_positions(&instant) {
        match result {
            Ok(position) => {
                let scene = position.scene_position(100.0);
                println!("{position}");
                println!(
                    "  xyz  = ({:.2}, {:.2}, {:.2})\n",
                    scene.x, scene.y, scene.z
                );
            }
            Err(e) => println!("{body}: {e}\n"),
        }
    }

    let zenith = orrery.compute_zenith(&instant, latitude, longitude)?;
    println!(
        "Zenith at ({latitude}°, {longitude}°): RA = {:.4}h, Dec = {:.4}°",
        zenith.ra_hours, zenith.dec_deg
    );
    Ok(())
}
