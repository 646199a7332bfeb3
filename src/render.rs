use glutin_window::GlutinWindow;
use graphics::{clear, ellipse, line_from_to};
use nalgebra::Point2;
use opengl_graphics::{GlGraphics, OpenGL};
use piston::event_loop::{EventLoop, EventSettings, Events};
use piston::input::{CloseEvent, RenderArgs, RenderEvent};
use piston::window::{Window, WindowSettings};

use crate::body::Body;
use crate::config::DisplayConfig;
use crate::error::{SimError, SimResult};
use crate::simulation::Frontend;
use crate::Float;

const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Metres to window pixels, origin in the middle of the window.
#[inline]
pub fn project(pos: &Point2<Float>, display: &DisplayConfig) -> [f64; 2] {
    let (cx, cy) = display.centre();
    [pos.x * display.scale + cx, pos.y * display.scale + cy]
}

/// Everything needed to draw one body, already in window coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub color: [f32; 4],
    pub trail: Vec<[f64; 2]>,   // Empty when the trail shouldn't be drawn
    pub centre: [f64; 2],
    pub radius: f64,
}

impl Sprite {
    pub fn of(body: &Body, display: &DisplayConfig) -> Sprite {
        let trail = if !body.is_primary() && body.trail().len() > 2 {
            body.trail().points().map(|p| project(p, display)).collect()
        } else {
            Vec::new()
        };

        Sprite {
            color: body.color.to_rgba(),
            trail,
            centre: project(&body.position, display),
            radius: body.radius,
        }
    }
}

/// Window, GL context and event loop. Frames are buffered between `present`
/// calls and flushed in `finish_frame`, since piston only lets us draw inside
/// a render event.
pub struct PistonFrontend {
    window: GlutinWindow,
    gl: GlGraphics,
    events: Events,
    display: DisplayConfig,
    render_args: Option<RenderArgs>,
    sprites: Vec<Sprite>,
    closed: bool,
}

impl PistonFrontend {
    pub fn new(title: &str, display: DisplayConfig) -> SimResult<PistonFrontend> {
        let opengl = OpenGL::V3_2;
        let window: GlutinWindow = WindowSettings::new(title, [display.width, display.height])
            .graphics_api(opengl)
            .exit_on_esc(true)
            .resizable(false)
            .build()
            .map_err(|e| SimError::Window(e.to_string()))?;

        Ok(PistonFrontend {
            window,
            gl: GlGraphics::new(opengl),
            events: Events::new(EventSettings::new().max_fps(display.fps).ups(display.fps)),
            display,
            render_args: None,
            sprites: Vec::new(),
            closed: false,
        })
    }
}

impl Frontend for PistonFrontend {
    fn pace(&mut self, target_fps: u64) {
        if self.events.get_event_settings().max_fps != target_fps {
            self.events.set_max_fps(target_fps);
            self.events.set_ups(target_fps);
        }

        // Blocks inside the event loop until the next frame is due
        while let Some(e) = self.events.next(&mut self.window) {
            if e.close_args().is_some() {
                self.closed = true;
                return
            }
            if let Some(args) = e.render_args() {
                self.render_args = Some(args);
                return
            }
        }
        self.closed = true;
    }

    fn poll_quit(&mut self) -> bool {
        self.closed || self.window.should_close()
    }

    fn present(&mut self, body: &Body) {
        self.sprites.push(Sprite::of(body, &self.display));
    }

    fn finish_frame(&mut self) {
        if let Some(args) = self.render_args.take() {
            let sprites = &self.sprites;
            let line_radius = self.display.trail_width / 2.0;

            self.gl.draw(args.viewport(), |c, g| {
                clear(BLACK, g);
                for sprite in sprites.iter() {
                    for seg in sprite.trail.windows(2) {
                        line_from_to(sprite.color, line_radius, seg[0], seg[1], c.transform, g);
                    }
                    ellipse(
                        sprite.color,
                        ellipse::circle(sprite.centre[0], sprite.centre[1], sprite.radius),
                        c.transform,
                        g,
                    );
                }
            });
        }
        self.sprites.clear();
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    use super::*;
    use crate::body::{Rgb, Role};
    use crate::config::PhysicsConfig;

    fn planet() -> Body {
        Body::new(
            "planet",
            Point2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            1.0,
            5.0,
            Rgb::new(255, 0, 0),
            Role::Orbiting,
        )
        .unwrap()
    }

    #[test]
    fn one_au_lands_62_and_a_half_pixels_right_of_centre() {
        let display = DisplayConfig::default();
        let [x, y] = project(&Point2::new(display.au, -display.au), &display);
        assert_relative_eq!(x, 462.5, max_relative = 1e-12);
        assert_relative_eq!(y, 337.5, max_relative = 1e-12);
    }

    #[test]
    fn trail_drawn_only_past_two_points() {
        let display = DisplayConfig::new(1.0, 1.0, 100, 100, 60, 2.0);
        let physics = PhysicsConfig::new(1.0, 1.0);
        let mut body = planet();
        let none: Vec<Body> = Vec::new();

        body.update(none.iter(), &physics);
        body.update(none.iter(), &physics);
        assert!(Sprite::of(&body, &display).trail.is_empty());

        body.update(none.iter(), &physics);
        let sprite = Sprite::of(&body, &display);
        assert_eq!(sprite.trail, vec![[51.0, 50.0], [52.0, 50.0], [53.0, 50.0]]);
        assert_eq!(sprite.centre, [53.0, 50.0]);
        assert_eq!(sprite.radius, 5.0);
        assert_eq!(sprite.color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn primary_trail_never_drawn() {
        let display = DisplayConfig::new(1.0, 1.0, 100, 100, 60, 2.0);
        let physics = PhysicsConfig::new(1.0, 1.0);
        let mut star = Body::new("star", Point2::origin(), Vector2::new(0.0, 1.0), 1.0, 20.0, Rgb::new(1, 2, 3), Role::Primary)
            .unwrap();
        let none: Vec<Body> = Vec::new();
        for _ in 0..5 {
            star.update(none.iter(), &physics);
        }
        assert_eq!(star.trail().len(), 5);
        assert!(Sprite::of(&star, &display).trail.is_empty());
    }
}
