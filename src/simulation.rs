use nalgebra::Vector2;

use crate::body::{self, Body};
use crate::config::PhysicsConfig;
use crate::error::{SimError, SimResult};
use crate::{tools, Float};

/// What the loop needs from whoever owns the window.
pub trait Frontend {
    /// Blocks until it is time for the next frame.
    fn pace(&mut self, target_fps: u64);
    /// True once something asked the program to stop. Must not block.
    fn poll_quit(&mut self) -> bool;
    /// Called with each body right after it was stepped.
    fn present(&mut self, body: &Body);
    /// Called once every body of the tick has been presented.
    fn finish_frame(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

pub struct Simulation {
    bodies: Vec<Body>,
    physics: PhysicsConfig,
    fps: u64,
    state: RunState,
    ticks: u64,
}

impl Simulation {
    /// Fails if more than one body is the primary, or if two bodies start on
    /// top of each other.
    pub fn new(bodies: Vec<Body>, physics: PhysicsConfig, fps: u64) -> SimResult<Simulation> {
        let mut primary: Option<&Body> = None;
        for b in bodies.iter().filter(|b| b.is_primary()) {
            if let Some(first) = primary {
                return Err(SimError::MultiplePrimaries {
                    first: first.name().to_owned(),
                    second: b.name().to_owned(),
                });
            }
            primary = Some(b);
        }

        for (i, b1) in bodies.iter().enumerate() {
            for b2 in bodies[i + 1..].iter() {
                if b1.position == b2.position {
                    return Err(SimError::CoincidentBodies {
                        first: b1.name().to_owned(),
                        second: b2.name().to_owned(),
                    });
                }
            }
        }

        Ok(Simulation {
            bodies,
            physics,
            fps,
            state: RunState::Running,
            ticks: 0,
        })
    }

    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn total_momentum(&self) -> Vector2<Float> {
        tools::total_momentum(&self.bodies)
    }

    /// Steps every body once, in order, presenting each as soon as it moved.
    /// Later bodies see earlier ones at their new positions.
    pub fn step(&mut self, frontend: &mut impl Frontend) {
        for i in 0..self.bodies.len() {
            body::step(&mut self.bodies, i, &self.physics);
            frontend.present(&self.bodies[i]);
        }
        frontend.finish_frame();
        self.ticks += 1;
    }

    /// One frame: wait, check for quit, then step. Quitting is only noticed
    /// here, so a started step always completes.
    pub fn tick(&mut self, frontend: &mut impl Frontend) -> RunState {
        if self.state == RunState::Stopped {
            return RunState::Stopped;
        }

        frontend.pace(self.fps);
        if frontend.poll_quit() {
            self.state = RunState::Stopped;
            return RunState::Stopped;
        }

        self.step(frontend);
        RunState::Running
    }

    /// Ticks until the frontend asks to quit. Returns the number of ticks run.
    pub fn run(&mut self, frontend: &mut impl Frontend) -> u64 {
        while self.tick(frontend) == RunState::Running {}
        self.ticks
    }
}
