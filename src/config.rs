use crate::{Float, AU, FPS, GRAV_CONST, SCALE, TIMESTEP, TRAIL_WIDTH, WINDOW_DIMS};

/// Constants the integrator depends on. Nothing display related lives here.
#[derive(new, Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    pub grav_const: Float,
    pub timestep: Float,  // Seconds of simulated time per tick
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new(GRAV_CONST, TIMESTEP)
    }
}

/// Constants used only when projecting bodies onto the window.
#[derive(new, Debug, Clone, Copy, PartialEq)]
pub struct DisplayConfig {
    pub au: Float,
    pub scale: Float,       // Pixels per metre
    pub width: u32,
    pub height: u32,
    pub fps: u64,
    pub trail_width: f64,
}

impl DisplayConfig {
    #[inline]
    pub fn centre(&self) -> (Float, Float) {
        (self.width as Float / 2.0, self.height as Float / 2.0)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(AU, SCALE, WINDOW_DIMS.0, WINDOW_DIMS.1, FPS, TRAIL_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_scale_maps_one_au_to_62_and_a_half_pixels() {
        let display = DisplayConfig::default();
        assert_relative_eq!(display.au * display.scale, 62.5, max_relative = 1e-12);
        assert_eq!(display.centre(), (400.0, 400.0));
    }

    #[test]
    fn default_timestep_is_one_day() {
        assert_relative_eq!(PhysicsConfig::default().timestep, 86_400.0);
    }
}
