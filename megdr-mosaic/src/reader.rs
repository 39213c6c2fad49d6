use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};

use crate::consts::SAMPLE_BYTES;
use crate::raster::Raster;
use crate::{MosaicError, MosaicErrorCode, Result};

/// Loads one raw tile file: `rows * cols` big-endian i16 samples, row-major,
/// no header. The byte length is checked against the declared dimensions
/// before any sample is decoded.
pub fn read_tile(path: &Path, rows: usize, cols: usize) -> Result<Raster> {
    let mut raster = Raster::zeroed(rows, cols)?;
    let expected_samples = raster.samples().len() as u64;
    let expected_bytes = expected_samples
        .checked_mul(SAMPLE_BYTES as u64)
        .ok_or_else(|| {
            MosaicError::new(MosaicErrorCode::InvalidDimensions, "Tile byte length overflow.")
        })?;

    let metadata = fs::metadata(path).map_err(|err| read_error(path, err))?;
    let actual_bytes = metadata.len();
    if !actual_bytes.is_multiple_of(SAMPLE_BYTES as u64) {
        return Err(MosaicError::new(
            MosaicErrorCode::TileSizeMismatch,
            format!(
                "Tile byte length {actual_bytes} for {} is not divisible by {SAMPLE_BYTES}.",
                path.display()
            ),
        ));
    }
    if actual_bytes != expected_bytes {
        return Err(MosaicError::new(
            MosaicErrorCode::TileSizeMismatch,
            format!(
                "Tile sample count mismatch for {}. expected={expected_samples} got={}",
                path.display(),
                actual_bytes / SAMPLE_BYTES as u64
            ),
        ));
    }

    let file = File::open(path).map_err(|err| read_error(path, err))?;
    let mut reader = BufReader::new(file);
    reader
        .read_i16_into::<BigEndian>(raster.samples_mut())
        .map_err(|err| read_error(path, err))?;

    Ok(raster)
}

fn read_error(path: &Path, err: io::Error) -> MosaicError {
    if err.kind() == io::ErrorKind::NotFound {
        MosaicError::new(
            MosaicErrorCode::TileMissing,
            format!("Tile file not found: {}", path.display()),
        )
    } else {
        MosaicError::new(
            MosaicErrorCode::TileRead,
            format!("Could not read tile {}: {err}", path.display()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_be(path: &Path, samples: &[i16]) {
        let mut bytes = Vec::with_capacity(samples.len() * SAMPLE_BYTES);
        for sample in samples {
            bytes.extend_from_slice(&sample.to_be_bytes());
        }
        fs::write(path, bytes).expect("write fixture");
    }

    #[test]
    fn reads_big_endian_samples_row_major() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tile.img");
        let samples = [-2_i16, 513, 7, i16::MIN, i16::MAX, 0];
        write_be(&path, &samples);

        let raster = read_tile(&path, 2, 3).expect("read tile");
        assert_eq!(raster.rows(), 2);
        assert_eq!(raster.cols(), 3);
        assert_eq!(raster.samples(), samples.as_slice());
        assert_eq!(raster.sample(1, 0), i16::MIN);
    }

    #[test]
    fn missing_tile_reports_tile_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.img");

        let error = read_tile(&path, 2, 3).expect_err("should fail");
        assert_eq!(error.code, MosaicErrorCode::TileMissing);
    }

    #[test]
    fn rejects_truncated_tile() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("short.img");
        write_be(&path, &[1, 2, 3, 4, 5]);

        let error = read_tile(&path, 2, 3).expect_err("should fail");
        assert_eq!(error.code, MosaicErrorCode::TileSizeMismatch);
    }

    #[test]
    fn rejects_oversized_tile() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("long.img");
        write_be(&path, &[1, 2, 3, 4, 5, 6, 7]);

        let error = read_tile(&path, 2, 3).expect_err("should fail");
        assert_eq!(error.code, MosaicErrorCode::TileSizeMismatch);
    }

    #[test]
    fn rejects_odd_byte_length() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("odd.img");
        fs::write(&path, [0_u8; 11]).expect("write fixture");

        let error = read_tile(&path, 2, 3).expect_err("should fail");
        assert_eq!(error.code, MosaicErrorCode::TileSizeMismatch);
    }
}
