use std::mem;

pub const MEGDR_TILE_ROWS: usize = 5632;
pub const MEGDR_TILE_COLS: usize = 11520;

pub const DEFAULT_OUTPUT_FILENAME: &str = "megdr-128-stiched.img";

pub(crate) const SAMPLE_BYTES: usize = mem::size_of::<i16>();

pub(crate) const MEGDR_PREFIX: &str = "megr";
pub(crate) const MEGDR_SUFFIX: &str = "hb.img";

// Band codes name the north/west edge of each tile; list order is mosaic
// order, top-to-bottom and west-to-east.
pub(crate) const MEGDR_LATITUDE_BANDS: [&str; 4] = ["88n", "44n", "00n", "44s"];
pub(crate) const MEGDR_LONGITUDE_BANDS: [&str; 4] = ["000", "090", "180", "270"];
