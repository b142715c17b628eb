use fastrand::Rng;
use log::info;

use crate::host::{Host, SHOW_CLASS};
use crate::sim::{FrameReport, Simulation};
use crate::surface::Surface;

/// Id of the page element revealed once the intro burst happens.
pub const CONTENT_ID: &str = "content";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Only the intro shell flies; the content is hidden.
    Intro,
    /// Ambient launches run forever. `since` is the frame time the intro
    /// shell burst, used as the ambient clock's origin.
    Ambient { since: f64 },
}

/// Sequences the one-off intro firework into the endless ambient show.
pub struct Show<H: Host> {
    phase: Phase,
    sim: Simulation,
    host: H,
}

impl<H: Host> Show<H> {
    /// Hides the content and launches the intro shell.
    pub fn new(mut host: H, rng: Rng, surface: &impl Surface) -> Self {
        host.hide(CONTENT_ID);

        let mut sim = Simulation::new(rng);
        sim.launch_intro(surface);
        info!(
            "intro firework launched on a {:.0}x{:.0} surface",
            surface.width(),
            surface.height()
        );

        Self {
            phase: Phase::Intro,
            sim,
            host,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Runs one frame at `now` (frame-clock milliseconds).
    pub fn frame(&mut self, now: f64, surface: &mut impl Surface) -> FrameReport {
        match self.phase {
            Phase::Intro => {
                let report = self.sim.intro_tick(surface);
                if report.intro_exploded {
                    self.enter_ambient(now);
                }
                report
            }
            Phase::Ambient { since } => self.sim.tick(now - since, surface),
        }
    }

    fn enter_ambient(&mut self, now: f64) {
        if self.phase != Phase::Intro {
            return;
        }

        self.host.reveal(CONTENT_ID);
        self.host.add_class(CONTENT_ID, SHOW_CLASS);
        self.phase = Phase::Ambient { since: now };
        info!("intro complete at t={now:.0}, starting ambient fireworks");
    }
}
