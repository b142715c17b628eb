use crate::color::Color;
use crate::surface::{PaintState, Surface};

/// Software RGB framebuffer. Channels are kept as floats so the per-frame
/// trail overlay can fade pixels smoothly instead of snapping to zero.
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<[f32; 3]>,
    state: PaintState,
    stack: Vec<PaintState>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 3]; width * height],
            state: PaintState::default(),
            stack: Vec::new(),
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Changes the pixel dimensions, keeping whatever overlaps the old area.
    pub fn resize(&mut self, width: usize, height: usize) {
        if (width, height) == (self.width, self.height) {
            return;
        }

        let mut pixels = vec![[0.0; 3]; width * height];
        for y in 0..height.min(self.height) {
            let keep = width.min(self.width);
            pixels[y * width..y * width + keep]
                .copy_from_slice(&self.pixels[y * self.width..y * self.width + keep]);
        }

        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }

    pub fn pixel(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let [r, g, b] = self.pixels[y * self.width + x];
        (to_u8(r), to_u8(g), to_u8(b))
    }

    fn blend(&mut self, x: usize, y: usize, color: Color, alpha: f32) {
        let pixel = &mut self.pixels[y * self.width + x];
        let src = [color.r as f32, color.g as f32, color.b as f32];
        for (dst, src) in pixel.iter_mut().zip(src) {
            *dst = *dst * (1.0 - alpha) + src * alpha;
        }
    }

    /// Clamps a float span to pixel indices, `None` when fully outside.
    fn span(lo: f32, hi: f32, limit: usize) -> Option<(usize, usize)> {
        let lo = lo.floor().max(0.0);
        let hi = hi.ceil().min(limit as f32);
        if !(lo < hi) {
            return None;
        }
        Some((lo as usize, hi as usize))
    }
}

impl Surface for Canvas {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.state.global_alpha = alpha;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let (fill, alpha) = (self.state.fill, self.state.effective_alpha());
        let Some((x0, x1)) = Self::span(x, x + w, self.width) else { return };
        let Some((y0, y1)) = Self::span(y, y + h, self.height) else { return };

        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, fill, alpha);
            }
        }
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        let (fill, alpha) = (self.state.fill, self.state.effective_alpha());
        if alpha <= 0.0 || !x.is_finite() || !y.is_finite() {
            return;
        }
        let Some((x0, x1)) = Self::span(x - radius, x + radius, self.width) else { return };
        let Some((y0, y1)) = Self::span(y - radius, y + radius, self.height) else { return };

        let mut covered = false;
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - x;
                let dy = py as f32 + 0.5 - y;
                if dx * dx + dy * dy <= radius * radius {
                    self.blend(px, py, fill, alpha);
                    covered = true;
                }
            }
        }

        // Tiny disks still light the pixel they sit in
        if !covered && x >= 0.0 && y >= 0.0 && (x as usize) < self.width && (y as usize) < self.height {
            self.blend(x as usize, y as usize, fill, alpha);
        }
    }
}

fn to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
