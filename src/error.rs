use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid hex color `{0}`, expected RRGGBB (e.g. 1a1b26)")]
    InvalidColor(String),

    #[error("terminal reports an empty drawing area ({cols}x{rows})")]
    EmptySurface { cols: u16, rows: u16 },
}

pub type Result<T> = std::result::Result<T, Error>;
