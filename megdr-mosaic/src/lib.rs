use std::fmt;

mod assembler;
mod consts;
mod grid;
mod raster;
mod reader;
mod writer;

pub use assembler::{assemble, assemble_to_file, MosaicSummary};
pub use consts::{DEFAULT_OUTPUT_FILENAME, MEGDR_TILE_COLS, MEGDR_TILE_ROWS};
pub use grid::{GridSpec, TilePlacement};
pub use raster::Raster;
pub use reader::read_tile;
pub use writer::write_raster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosaicErrorCode {
    InvalidGridSpec,
    InvalidDimensions,
    TileMissing,
    TileSizeMismatch,
    TileRead,
    MosaicWrite,
}

impl MosaicErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidGridSpec => "INVALID_GRID_SPEC",
            Self::InvalidDimensions => "INVALID_DIMENSIONS",
            Self::TileMissing => "TILE_MISSING",
            Self::TileSizeMismatch => "TILE_SIZE_MISMATCH",
            Self::TileRead => "TILE_READ_FAILED",
            Self::MosaicWrite => "MOSAIC_WRITE_FAILED",
        }
    }
}

impl fmt::Display for MosaicErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicError {
    pub code: MosaicErrorCode,
    pub message: String,
}

impl MosaicError {
    pub fn new(code: MosaicErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for MosaicError {}

pub type Result<T> = std::result::Result<T, MosaicError>;
