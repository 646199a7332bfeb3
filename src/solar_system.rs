use nalgebra::{Point2, Vector2};

use crate::body::{Body, Rgb, Role};
use crate::error::SimResult;
use crate::Float;

pub const SUN_YELLOW: Rgb = Rgb { r: 254, g: 217, b: 54 };
pub const EARTH_BLUE: Rgb = Rgb { r: 8, g: 23, b: 57 };
pub const MERCURY_GRAY: Rgb = Rgb { r: 141, g: 152, b: 181 };
pub const VENUS: Rgb = Rgb { r: 196, g: 163, b: 105 };
pub const MARS: Rgb = Rgb { r: 209, g: 128, b: 53 };
pub const JUPITER: Rgb = Rgb { r: 219, g: 206, b: 178 };

pub const SUN_MASS: Float = 1.98892e30;

struct Planet {
    name: &'static str,
    distance_au: Float,
    speed_kms: Float,   // Initial velocity, all along y
    mass: Float,
    radius: f64,
    color: Rgb,
}

// Outer planets past jupiter don't fit at this scale.
const PLANETS: [Planet; 5] = [
    Planet { name: "earth", distance_au: 1.0, speed_kms: -29.783, mass: 5.9724e24, radius: 10.0, color: EARTH_BLUE },
    Planet { name: "mercury", distance_au: -0.4, speed_kms: 47.4, mass: 3.285e23, radius: 4.0, color: MERCURY_GRAY },
    Planet { name: "venus", distance_au: -0.7, speed_kms: 35.02, mass: 4.867e24, radius: 9.5, color: VENUS },
    Planet { name: "mars", distance_au: -1.5, speed_kms: 24.077, mass: 6.39e23, radius: 5.0, color: MARS },
    Planet { name: "jupiter", distance_au: 5.2, speed_kms: -13.06, mass: 1.898e27, radius: 15.0, color: JUPITER },
];

/// The sun at the origin followed by the inner planets and jupiter, all
/// starting on the x axis. This is also the update order.
pub fn bodies(au: Float) -> SimResult<Vec<Body>> {
    let mut bodies = Vec::with_capacity(PLANETS.len() + 1);
    bodies.push(Body::new(
        "sun",
        Point2::origin(),
        Vector2::zeros(),
        SUN_MASS,
        20.0,
        SUN_YELLOW,
        Role::Primary,
    )?);

    for planet in PLANETS.iter() {
        bodies.push(Body::new(
            planet.name,
            Point2::new(planet.distance_au * au, 0.0),
            Vector2::new(0.0, planet.speed_kms * 1000.0),
            planet.mass,
            planet.radius,
            planet.color,
            Role::Orbiting,
        )?);
    }

    Ok(bodies)
}
