use fastrand::Rng;
use log::{debug, trace};

use crate::color::Color;
use crate::firework::{Firework, Step};
use crate::surface::Surface;

/// Minimum time between two ambient launches, in frame-clock milliseconds.
pub const SPAWN_INTERVAL: f64 = 1000.0;

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub spawned: bool,
    pub explosions: usize,
    pub intro_exploded: bool,
    pub pruned: usize,
}

/// Owns every live firework and advances them one frame at a time.
pub struct Simulation {
    fireworks: Vec<Firework>,
    last_spawn: f64,
    spawned: usize,
    rng: Rng,
}

impl Simulation {
    pub fn new(rng: Rng) -> Self {
        Self {
            fireworks: Vec::with_capacity(16),
            last_spawn: 0.0,
            spawned: 0,
            rng,
        }
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    /// Number of ambient fireworks launched so far.
    pub fn spawned(&self) -> usize {
        self.spawned
    }

    pub fn last_spawn(&self) -> f64 {
        self.last_spawn
    }

    pub fn launch(&mut self, firework: Firework) {
        self.fireworks.push(firework);
    }

    /// Launches the intro shell from the middle of the bottom edge towards
    /// the center of the surface.
    pub fn launch_intro(&mut self, surface: &impl Surface) {
        let center_x = surface.width() / 2.0;
        let center_y = surface.height() / 2.0;
        self.launch(Firework::new(center_x, surface.height(), center_x, center_y, true));
    }

    /// One steady-state frame: fade, maybe launch, then advance everything.
    pub fn tick(&mut self, now: f64, surface: &mut impl Surface) -> FrameReport {
        fade(surface);
        let spawned = self.spawn_if_due(now, &*surface);
        FrameReport {
            spawned,
            ..self.advance(surface)
        }
    }

    /// One intro frame: like `tick` but never launches anything.
    pub fn intro_tick(&mut self, surface: &mut impl Surface) -> FrameReport {
        fade(surface);
        self.advance(surface)
    }

    fn spawn_if_due(&mut self, now: f64, surface: &impl Surface) -> bool {
        if now - self.last_spawn <= SPAWN_INTERVAL {
            return false;
        }

        // Dimensions are re-read on every launch since the viewport may have changed
        let (width, height) = (surface.width(), surface.height());
        let start_x = self.rng.f32() * width;
        let target_x = self.rng.f32() * width;
        let target_y = height * self.rng.f32() * 0.5;

        debug!(
            "launching firework from ({:.1}, {:.1}) to ({:.1}, {:.1}) at t={:.0}",
            start_x, height, target_x, target_y, now
        );
        self.launch(Firework::new(start_x, height, target_x, target_y, false));
        self.last_spawn = now;
        self.spawned += 1;
        true
    }

    fn advance(&mut self, surface: &mut impl Surface) -> FrameReport {
        let mut report = FrameReport::default();
        let rng = &mut self.rng;

        self.fireworks.retain_mut(|firework| {
            if firework.update(surface, rng) == Step::Exploded {
                report.explosions += 1;
                report.intro_exploded |= firework.is_intro();
            }
            if firework.is_spent() {
                report.pruned += 1;
                return false;
            }
            true
        });

        if report.pruned > 0 {
            trace!("pruned {} spent fireworks, {} live", report.pruned, self.fireworks.len());
        }
        report
    }
}

/// Paints a translucent black layer over the whole surface instead of
/// clearing it, so moving shells and sparks leave trails.
pub fn fade(surface: &mut impl Surface) {
    let (width, height) = (surface.width(), surface.height());
    surface.set_fill_color(Color::TRAIL);
    surface.fill_rect(0.0, 0.0, width, height);
}
