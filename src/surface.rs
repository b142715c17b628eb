use crate::color::Color;

/// The 2D drawing surface the show paints on.
///
/// Dimensions are read every frame and may change between frames when the
/// viewport is resized, so callers must never cache them.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Pushes the current paint state (fill color and global alpha).
    fn save(&mut self);
    /// Pops the last saved paint state. No-op when nothing was saved.
    fn restore(&mut self);

    fn set_global_alpha(&mut self, alpha: f32);
    fn set_fill_color(&mut self, color: Color);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);
}

/// Paint state shared by surface implementations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintState {
    pub fill: Color,
    pub global_alpha: f32,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            global_alpha: 1.0,
        }
    }
}

impl PaintState {
    pub fn effective_alpha(&self) -> f32 {
        (self.fill.a * self.global_alpha).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Rect { x: f32, y: f32, w: f32, h: f32, paint: PaintState },
    Circle { x: f32, y: f32, radius: f32, paint: PaintState },
}

/// Headless surface that records every fill instead of rasterizing it.
#[derive(Debug, Clone)]
pub struct Recorder {
    width: f32,
    height: f32,
    state: PaintState,
    stack: Vec<PaintState>,
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            state: PaintState::default(),
            stack: Vec::new(),
            ops: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn circles(&self) -> impl Iterator<Item = (f32, f32, f32, PaintState)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Circle { x, y, radius, paint } => Some((x, y, radius, paint)),
            DrawOp::Rect { .. } => None,
        })
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Surface for Recorder {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
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
        self.ops.push(DrawOp::Rect { x, y, w, h, paint: self.state });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.ops.push(DrawOp::Circle { x, y, radius, paint: self.state });
    }
}
