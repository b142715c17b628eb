//! A firework show for the terminal.
//!
//! A single gold intro shell climbs to the middle of the screen. When it
//! bursts, the page content fades in and an endless stream of ambient
//! fireworks takes over. The simulation only talks to the outside world
//! through [`surface::Surface`] (where to paint) and [`host::Host`] (what to
//! reveal), so it runs just as well against [`surface::Recorder`] as against
//! the terminal [`canvas::Canvas`].

pub mod app;
pub mod canvas;
pub mod color;
pub mod error;
pub mod firework;
pub mod host;
pub mod particle;
pub mod phase;
pub mod sim;
pub mod surface;
pub mod term;

pub use color::Color;
pub use error::{Error, Result};
pub use firework::{Firework, Step};
pub use host::{Host, Page};
pub use particle::Particle;
pub use phase::{Phase, Show};
pub use sim::{FrameReport, Simulation};
pub use surface::{Recorder, Surface};
