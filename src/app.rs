use std::io::{BufWriter, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, Show as ShowCursor},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use fastrand::Rng;
use log::{debug, info};

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::host::{Element, Page};
use crate::phase::{CONTENT_ID, Show};
use crate::term::{Presenter, canvas_size};

// One simulation frame per display refresh at 60 Hz
const FIXED_DT: f32 = 1.0 / 60.0;
const MAX_STEPS_PER_FRAME: f32 = 3.0;

pub struct Options {
    pub bg_color: (u8, u8, u8),
    pub seed: Option<u64>,
    pub content: Vec<String>,
}

/// Takes over the terminal, plays the show until the user quits and always
/// hands the terminal back, even when the show fails.
pub fn run(options: &Options) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    if cols == 0 || rows == 0 {
        return Err(Error::EmptySurface { cols, rows });
    }

    let mut stdout = BufWriter::with_capacity(1024 * 64, stdout());

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;

    let result = play(&mut stdout, cols, rows, options);

    let restored = execute!(stdout, ShowCursor, LeaveAlternateScreen)
        .and_then(|()| terminal::disable_raw_mode());
    result?;
    restored?;
    Ok(())
}

fn play(stdout: &mut impl Write, cols: u16, rows: u16, options: &Options) -> Result<()> {
    let (width, height) = canvas_size(cols, rows);
    let mut canvas = Canvas::new(width, height);

    let mut page = Page::new();
    page.insert(CONTENT_ID, Element::new(options.content.clone()));

    let rng = match options.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };
    let mut show = Show::new(page, rng, &canvas);
    let mut presenter = Presenter::new(options.bg_color);

    let mut clock_ms = 0.0f64;
    let mut last_frame = Instant::now();
    let mut accumulator = 0.0f32;

    loop {
        if event::poll(Duration::from_millis(1))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    let quit = matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
                    if quit {
                        break;
                    }
                }
                Event::Resize(cols, rows) => {
                    let (width, height) = canvas_size(cols, rows);
                    debug!("terminal resized to {cols}x{rows}, canvas now {width}x{height}");
                    canvas.resize(width, height);
                    execute!(stdout, Clear(ClearType::All))?;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        accumulator += now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        accumulator = accumulator.min(FIXED_DT * MAX_STEPS_PER_FRAME);

        while accumulator >= FIXED_DT {
            clock_ms += f64::from(FIXED_DT) * 1000.0;
            show.host_mut().set_clock(clock_ms);
            show.frame(clock_ms, &mut canvas);
            accumulator -= FIXED_DT;
        }

        presenter.render(&canvas, show.host(), stdout)?;
    }

    info!(
        "show stopped at t={:.0} after {} ambient launches",
        clock_ms,
        show.simulation().spawned()
    );
    Ok(())
}
