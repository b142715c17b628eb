use crate::color::Color;
use crate::surface::Surface;

pub const DECAY: f32 = 0.015;
pub const GRAVITY: f32 = 0.02;
const RADIUS: f32 = 1.0;

/// A spark thrown out by an exploding firework. Fades linearly until its
/// opacity reaches zero, at which point its owner drops it.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Color,
    pub opacity: f32,
    decay: f32,
}

impl Particle {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, color: Color) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            color,
            opacity: 1.0,
            decay: DECAY,
        }
    }

    pub fn update(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += GRAVITY;
        self.opacity -= self.decay;
    }

    pub fn is_spent(&self) -> bool {
        self.opacity <= 0.0
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.save();
        surface.set_global_alpha(self.opacity);
        surface.set_fill_color(self.color);
        surface.fill_circle(self.x, self.y, RADIUS);
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Recorder;

    #[test]
    fn update_moves_falls_and_fades() {
        let mut p = Particle::new(10.0, 10.0, 1.0, -1.0, Color::WHITE);
        p.update();

        assert_eq!((p.x, p.y), (11.0, 9.0));
        assert!((p.vy - (-1.0 + GRAVITY)).abs() < 1e-6);
        assert!((p.opacity - (1.0 - DECAY)).abs() < 1e-6);
    }

    #[test]
    fn opacity_strictly_decreases_until_spent() {
        let mut p = Particle::new(0.0, 0.0, 0.0, 0.0, Color::WHITE);
        let mut frames = 0;
        while !p.is_spent() {
            let before = p.opacity;
            p.update();
            assert!(p.opacity < before);
            frames += 1;
        }
        assert_eq!(frames, 67);
    }

    #[test]
    fn draw_scopes_its_paint_state() {
        let mut surface = Recorder::new(100.0, 100.0);
        surface.set_fill_color(Color::TRAIL);

        let mut p = Particle::new(5.0, 6.0, 0.0, 0.0, Color::GOLD);
        p.opacity = 0.4;
        p.draw(&mut surface);

        let (x, y, radius, paint) = surface.circles().next().unwrap();
        assert_eq!((x, y, radius), (5.0, 6.0, 1.0));
        assert_eq!(paint.fill, Color::GOLD);
        assert!((paint.global_alpha - 0.4).abs() < 1e-6);

        assert_eq!(surface.state().fill, Color::TRAIL);
        assert_eq!(surface.state().global_alpha, 1.0);
        assert_eq!(surface.save_depth(), 0);
    }
}
