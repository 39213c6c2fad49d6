use crate::{MosaicError, MosaicErrorCode, Result};

/// Row-major i16 raster. `samples.len() == rows * cols` always holds; both
/// constructors enforce it so placement arithmetic can index without checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    rows: usize,
    cols: usize,
    samples: Vec<i16>,
}

impl Raster {
    pub fn zeroed(rows: usize, cols: usize) -> Result<Self> {
        let sample_count = checked_sample_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            samples: vec![0_i16; sample_count],
        })
    }

    pub fn from_samples(rows: usize, cols: usize, samples: Vec<i16>) -> Result<Self> {
        let sample_count = checked_sample_count(rows, cols)?;
        if samples.len() != sample_count {
            return Err(MosaicError::new(
                MosaicErrorCode::InvalidDimensions,
                format!(
                    "Sample count does not match dimensions. expected={sample_count} got={}",
                    samples.len()
                ),
            ));
        }
        Ok(Self {
            rows,
            cols,
            samples,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [i16] {
        &mut self.samples
    }

    pub fn sample(&self, row: usize, col: usize) -> i16 {
        self.samples[row * self.cols + col]
    }

    /// Copies `tile` into the sub-rectangle whose top-left corner is
    /// (`row_offset`, `col_offset`), overwriting prior content.
    pub fn place(&mut self, tile: &Raster, row_offset: usize, col_offset: usize) -> Result<()> {
        let row_end = row_offset.checked_add(tile.rows);
        let col_end = col_offset.checked_add(tile.cols);
        let in_bounds = match (row_end, col_end) {
            (Some(row_end), Some(col_end)) => row_end <= self.rows && col_end <= self.cols,
            _ => false,
        };
        if !in_bounds {
            return Err(MosaicError::new(
                MosaicErrorCode::InvalidDimensions,
                format!(
                    "Placement rectangle out of bounds. target={}x{} tile={}x{} offset=({row_offset}, {col_offset})",
                    self.rows, self.cols, tile.rows, tile.cols
                ),
            ));
        }

        for (tile_row, source) in tile.samples.chunks_exact(tile.cols).enumerate() {
            let start = (row_offset + tile_row) * self.cols + col_offset;
            self.samples[start..start + tile.cols].copy_from_slice(source);
        }
        Ok(())
    }

    /// Full scan over every sample. Dimensions are non-zero by construction,
    /// so the result is always the true extrema.
    pub fn value_range(&self) -> (i16, i16) {
        self.samples
            .iter()
            .fold((i16::MAX, i16::MIN), |(lo, hi), &value| {
                (lo.min(value), hi.max(value))
            })
    }
}

fn checked_sample_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MosaicError::new(
            MosaicErrorCode::InvalidDimensions,
            "rows and cols must be > 0.",
        ));
    }
    rows.checked_mul(cols).ok_or_else(|| {
        MosaicError::new(
            MosaicErrorCode::InvalidDimensions,
            "Raster dimensions resulting in overflowed sample count.",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_raster_is_all_zero() {
        let raster = Raster::zeroed(3, 4).expect("zeroed raster");
        assert_eq!(raster.rows(), 3);
        assert_eq!(raster.cols(), 4);
        assert!(raster.samples().iter().all(|&value| value == 0));
    }

    #[test]
    fn rejects_sample_count_mismatch() {
        let error = Raster::from_samples(2, 3, vec![1, 2, 3]).expect_err("should reject");
        assert_eq!(error.code, MosaicErrorCode::InvalidDimensions);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let error = Raster::zeroed(0, 4).expect_err("should reject");
        assert_eq!(error.code, MosaicErrorCode::InvalidDimensions);
    }

    #[test]
    fn place_writes_the_target_rectangle_only() {
        let mut target = Raster::zeroed(4, 6).expect("target");
        let tile = Raster::from_samples(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("tile");

        target.place(&tile, 1, 2).expect("place");

        #[rustfmt::skip]
        let expected = vec![
            0, 0, 0, 0, 0, 0,
            0, 0, 1, 2, 3, 0,
            0, 0, 4, 5, 6, 0,
            0, 0, 0, 0, 0, 0,
        ];
        assert_eq!(target.samples(), expected.as_slice());
    }

    #[test]
    fn place_rejects_out_of_bounds_rectangle() {
        let mut target = Raster::zeroed(4, 6).expect("target");
        let tile = Raster::from_samples(2, 3, vec![1, 2, 3, 4, 5, 6]).expect("tile");

        let error = target.place(&tile, 3, 0).expect_err("should reject");
        assert_eq!(error.code, MosaicErrorCode::InvalidDimensions);
    }

    #[test]
    fn value_range_reports_extrema() {
        let raster = Raster::from_samples(2, 2, vec![-7, 0, 12, 3]).expect("raster");
        assert_eq!(raster.value_range(), (-7, 12));
    }
}
