use std::ops::Range;

use crate::consts::{
    MEGDR_LATITUDE_BANDS, MEGDR_LONGITUDE_BANDS, MEGDR_PREFIX, MEGDR_SUFFIX, MEGDR_TILE_COLS,
    MEGDR_TILE_ROWS,
};
use crate::{MosaicError, MosaicErrorCode, Result};

/// Geometry and naming of one tile grid: per-tile dimensions plus the ordered
/// band codes that drive both filenames and mosaic placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSpec {
    pub tile_rows: usize,
    pub tile_cols: usize,
    pub latitude_bands: Vec<String>,
    pub longitude_bands: Vec<String>,
    pub prefix: String,
    pub suffix: String,
}

/// One cell of the assembly sequence: which tile file goes into which
/// sub-rectangle of the mosaic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlacement {
    pub lat_index: usize,
    pub long_index: usize,
    pub filename: String,
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl GridSpec {
    /// The 4x4 MEGDR planetary-radius grid at 128 px/deg (`megr..hb.img`).
    pub fn megdr_128() -> Self {
        Self {
            tile_rows: MEGDR_TILE_ROWS,
            tile_cols: MEGDR_TILE_COLS,
            latitude_bands: MEGDR_LATITUDE_BANDS
                .iter()
                .map(|band| band.to_string())
                .collect(),
            longitude_bands: MEGDR_LONGITUDE_BANDS
                .iter()
                .map(|band| band.to_string())
                .collect(),
            prefix: MEGDR_PREFIX.to_string(),
            suffix: MEGDR_SUFFIX.to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.latitude_bands.is_empty() || self.longitude_bands.is_empty() {
            return Err(MosaicError::new(
                MosaicErrorCode::InvalidGridSpec,
                "At least one latitude band and one longitude band are required.",
            ));
        }
        if self.tile_rows == 0 || self.tile_cols == 0 {
            return Err(MosaicError::new(
                MosaicErrorCode::InvalidGridSpec,
                "tile_rows and tile_cols must be > 0.",
            ));
        }
        self.mosaic_samples()?;
        Ok(())
    }

    pub fn grid_rows(&self) -> usize {
        self.latitude_bands.len()
    }

    pub fn grid_cols(&self) -> usize {
        self.longitude_bands.len()
    }

    pub fn mosaic_rows(&self) -> Result<usize> {
        self.tile_rows.checked_mul(self.grid_rows()).ok_or_else(|| {
            MosaicError::new(MosaicErrorCode::InvalidGridSpec, "Mosaic row count overflow.")
        })
    }

    pub fn mosaic_cols(&self) -> Result<usize> {
        self.tile_cols.checked_mul(self.grid_cols()).ok_or_else(|| {
            MosaicError::new(
                MosaicErrorCode::InvalidGridSpec,
                "Mosaic column count overflow.",
            )
        })
    }

    pub fn mosaic_samples(&self) -> Result<usize> {
        self.mosaic_rows()?
            .checked_mul(self.mosaic_cols()?)
            .ok_or_else(|| {
                MosaicError::new(
                    MosaicErrorCode::InvalidGridSpec,
                    "Grid dimensions resulting in overflowed sample count.",
                )
            })
    }

    /// The full assembly sequence in placement order: latitude bands outer
    /// (top-to-bottom), longitude bands inner (west-to-east).
    pub fn placements(&self) -> Result<Vec<TilePlacement>> {
        self.validate()?;

        let mut placements = Vec::with_capacity(self.grid_rows() * self.grid_cols());
        for (lat_index, lat_band) in self.latitude_bands.iter().enumerate() {
            for (long_index, long_band) in self.longitude_bands.iter().enumerate() {
                let row_start = lat_index * self.tile_rows;
                let col_start = long_index * self.tile_cols;
                placements.push(TilePlacement {
                    lat_index,
                    long_index,
                    filename: format!("{}{lat_band}{long_band}{}", self.prefix, self.suffix),
                    rows: row_start..row_start + self.tile_rows,
                    cols: col_start..col_start + self.tile_cols,
                });
            }
        }
        Ok(placements)
    }
}
