use std::f32::consts::TAU;

use fastrand::Rng;
use log::debug;

use crate::color::Color;
use crate::particle::Particle;
use crate::surface::Surface;

pub const SPEED: f32 = 2.0;
pub const ARRIVAL_TOLERANCE: f32 = 5.0;
const SHELL_RADIUS: f32 = 2.0;

const INTRO_PARTICLES: usize = 150;
const AMBIENT_PARTICLES: usize = 100;

/// What a single `Firework::update` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still climbing towards the target.
    Flying,
    /// Reached the target on this update and burst. Reported exactly once.
    Exploded,
    /// Already burst; only the particles moved.
    Fading,
}

/// A shell flying in a straight line at constant speed towards its target,
/// then bursting into particles.
#[derive(Debug, Clone)]
pub struct Firework {
    pub x: f32,
    pub y: f32,
    target_x: f32,
    target_y: f32,
    vx: f32,
    vy: f32,
    intro: bool,
    alive: bool,
    particles: Vec<Particle>,
}

impl Firework {
    pub fn new(x: f32, y: f32, target_x: f32, target_y: f32, intro: bool) -> Self {
        let angle = (target_y - y).atan2(target_x - x);

        Self {
            x,
            y,
            target_x,
            target_y,
            vx: angle.cos() * SPEED,
            vy: angle.sin() * SPEED,
            intro,
            alive: true,
            particles: Vec::new(),
        }
    }

    pub fn is_intro(&self) -> bool {
        self.intro
    }

    /// `true` while in flight, `false` forever after the burst.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Burst and every particle faded out; the owner can drop it.
    pub fn is_spent(&self) -> bool {
        !self.alive && self.particles.is_empty()
    }

    pub fn target(&self) -> (f32, f32) {
        (self.target_x, self.target_y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn update(&mut self, surface: &mut impl Surface, rng: &mut Rng) -> Step {
        if !self.alive {
            self.particles.retain_mut(|particle| {
                particle.update();
                if particle.is_spent() {
                    return false;
                }
                particle.draw(surface);
                true
            });
            return Step::Fading;
        }

        self.x += self.vx;
        self.y += self.vy;

        // Never fly past the target, whatever the frame rate
        let overshot = (self.target_x - self.x) * self.vx + (self.target_y - self.y) * self.vy < 0.0;
        if overshot {
            self.x = self.target_x;
            self.y = self.target_y;
        }

        surface.set_fill_color(if self.intro { Color::GOLD } else { Color::WHITE });
        surface.fill_circle(self.x, self.y, SHELL_RADIUS);

        if (self.x - self.target_x).abs() < ARRIVAL_TOLERANCE
            && (self.y - self.target_y).abs() < ARRIVAL_TOLERANCE
        {
            self.explode(rng);
            self.alive = false;
            return Step::Exploded;
        }

        Step::Flying
    }

    fn explode(&mut self, rng: &mut Rng) {
        let count = if self.intro { INTRO_PARTICLES } else { AMBIENT_PARTICLES };
        let angle_step = TAU / count as f32;

        self.particles.reserve(count);
        for i in 0..count {
            let angle = angle_step * i as f32;
            let (speed, color) = if self.intro {
                (rng.f32() * 3.0 + 1.0, Color::GOLD)
            } else {
                (rng.f32() * 2.0, Color::hsl(rng.f32() * 360.0, 0.5, 0.5))
            };

            self.particles.push(Particle::new(
                self.x,
                self.y,
                angle.cos() * speed,
                angle.sin() * speed,
                color,
            ));
        }

        debug!(
            "{} firework burst at ({:.1}, {:.1}) into {} particles",
            if self.intro { "intro" } else { "ambient" },
            self.x,
            self.y,
            count
        );
    }
}
