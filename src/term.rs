use std::io::{self, Write};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::host::Page;

// Canvas pixels per terminal cell. Each cell shows two stacked samples
// through a half-block glyph, each sample picked from a 2x2 pixel block.
pub const CELL_PIXELS_X: usize = 2;
pub const CELL_PIXELS_Y: usize = 4;

const HALF_BLOCK: &str = "\u{2584}";
const TITLE_COLOR: Color = Color::GOLD;
const TEXT_COLOR: Color = Color::WHITE;

/// Canvas dimensions matching a terminal of `cols` x `rows` cells.
pub fn canvas_size(cols: u16, rows: u16) -> (usize, usize) {
    (cols as usize * CELL_PIXELS_X, rows as usize * CELL_PIXELS_Y)
}

type Rgb = (u8, u8, u8);

struct Overlay {
    row: usize,
    col: usize,
    text: Vec<char>,
    color: Color,
    opacity: f32,
}

/// Turns the canvas plus the visible page elements into ANSI truecolor
/// output, one half-block glyph per cell.
pub struct Presenter {
    bg_color: Rgb,
    output_buf: Vec<u8>,
}

impl Presenter {
    pub fn new(bg_color: Rgb) -> Self {
        Self {
            bg_color,
            output_buf: Vec::new(),
        }
    }

    pub fn render(&mut self, canvas: &Canvas, page: &Page, out: &mut impl Write) -> io::Result<()> {
        let (width, height) = canvas.size();
        let cols = width / CELL_PIXELS_X;
        let rows = height / CELL_PIXELS_Y;

        self.output_buf.clear();
        self.output_buf.reserve(cols * rows * 25);
        self.output_buf.extend_from_slice(b"\x1b[H");

        let overlays = layout(page, cols, rows);

        let mut prev_top: Option<Rgb> = None;
        let mut prev_bot: Option<Rgb> = None;

        for row in 0..rows {
            for col in 0..cols {
                let top = self.shade(brightest(canvas, col * CELL_PIXELS_X, row * CELL_PIXELS_Y));
                let bot = self.shade(brightest(canvas, col * CELL_PIXELS_X, row * CELL_PIXELS_Y + 2));

                if let Some((ch, fg)) = glyph_at(&overlays, row, col, top, bot) {
                    let bg = mix(top, bot, 0.5);
                    write!(
                        self.output_buf,
                        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{}",
                        bg.0, bg.1, bg.2, fg.0, fg.1, fg.2, ch
                    )?;
                    prev_top = None;
                    prev_bot = None;
                    continue;
                }

                if prev_top != Some(top) {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", top.0, top.1, top.2)?;
                    prev_top = Some(top);
                }
                if prev_bot != Some(bot) {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", bot.0, bot.1, bot.2)?;
                    prev_bot = Some(bot);
                }
                self.output_buf.extend_from_slice(HALF_BLOCK.as_bytes());
            }

            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_top = None;
            prev_bot = None;
            if row + 1 < rows {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        out.write_all(&self.output_buf)?;
        out.flush()
    }

    // Light on a dark canvas: add it over the background, dimming the
    // background where the light is strong.
    fn shade(&self, light: Rgb) -> Rgb {
        let strength = light.0.max(light.1).max(light.2) as f32 / 255.0;
        let channel = |bg: u8, l: u8| (bg as f32 * (1.0 - strength) + l as f32).min(255.0) as u8;
        (
            channel(self.bg_color.0, light.0),
            channel(self.bg_color.1, light.1),
            channel(self.bg_color.2, light.2),
        )
    }
}

/// Brightest pixel of the 2x2 block at (x, y), clipped to the canvas.
fn brightest(canvas: &Canvas, x: usize, y: usize) -> Rgb {
    let (width, height) = canvas.size();
    let mut best = (0, 0, 0);
    let mut best_sum = 0u32;
    for py in y..(y + 2).min(height) {
        for px in x..(x + 2).min(width) {
            let p = canvas.pixel(px, py);
            let sum = p.0 as u32 + p.1 as u32 + p.2 as u32;
            if sum > best_sum {
                best = p;
                best_sum = sum;
            }
        }
    }
    best
}

fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let channel = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
    (channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
}

/// Centers every visible element's lines on screen, stacked in page order.
fn layout(page: &Page, cols: usize, rows: usize) -> Vec<Overlay> {
    let mut overlays = Vec::new();
    for (id, element) in page.visible() {
        let opacity = page.opacity(id);
        if opacity <= 0.0 {
            continue;
        }
        for (i, line) in element.lines.iter().enumerate() {
            let text: Vec<char> = line.chars().take(cols).collect();
            overlays.push(Overlay {
                row: 0,
                col: (cols - text.len()) / 2,
                text,
                color: if i == 0 { TITLE_COLOR } else { TEXT_COLOR },
                opacity,
            });
        }
    }

    let top = rows.saturating_sub(overlays.len()) / 2;
    for (i, overlay) in overlays.iter_mut().enumerate() {
        overlay.row = top + i;
    }
    overlays.retain(|o| o.row < rows);
    overlays
}

fn glyph_at(overlays: &[Overlay], row: usize, col: usize, top: Rgb, bot: Rgb) -> Option<(char, Rgb)> {
    let overlay = overlays.iter().find(|o| o.row == row)?;
    let ch = *overlay.text.get(col.checked_sub(overlay.col)?)?;
    let bg = mix(top, bot, 0.5);
    Some((ch, mix(bg, overlay.color.to_rgb(), overlay.opacity)))
}
