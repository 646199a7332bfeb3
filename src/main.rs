#[macro_use]
extern crate derive_new;

mod body;
mod config;
mod error;
mod render;
mod simulation;
mod solar_system;
mod tools;
mod trails;

use config::{DisplayConfig, PhysicsConfig};
use error::SimResult;
use render::PistonFrontend;
use simulation::Simulation;

pub type Float = f64;

pub const GRAV_CONST: Float = 6.67428e-11;
pub const AU: Float = 149.6e9;              // Metres
pub const SCALE: Float = 62.5 / AU;         // 1 AU = 62.5 pixels
pub const TIMESTEP: Float = 3600.0 * 24.0;  // 1 day

pub const WINDOW_DIMS: (u32, u32) = (800, 800);
pub const FPS: u64 = 60;
pub const TRAIL_WIDTH: f64 = 2.0;

fn run() -> SimResult<()> {
    let physics = PhysicsConfig::default();
    let display = DisplayConfig::default();

    let mut sim = Simulation::new(solar_system::bodies(display.au)?, physics, display.fps)?;
    for b in sim.bodies() {
        println!(
            "{:<8} mass {:.4e} kg at ({:.3e}, {:.3e}) m",
            b.name(),
            b.mass(),
            b.position.x,
            b.position.y
        );
    }

    let mut frontend = PistonFrontend::new("Planet Simulation", display)?;
    let ticks = sim.run(&mut frontend);
    drop(frontend);

    println!("Stopped after {} days", ticks);
    for b in sim.bodies().iter().filter(|b| !b.is_primary()) {
        println!("{:<8} {:.4} AU from the sun", b.name(), b.distance_to_primary() / display.au);
    }
    let p = sim.total_momentum();
    println!("Total momentum: ({:.4e}, {:.4e}) kg m/s", p.x, p.y);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("planet_sim: {}", e);
        std::process::exit(1);
    }
}
