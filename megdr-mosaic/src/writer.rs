use std::fs::File;
use std::io::Write;
use std::path::Path;

use byteorder::{BigEndian, ByteOrder};

use crate::consts::SAMPLE_BYTES;
use crate::raster::Raster;
use crate::{MosaicError, MosaicErrorCode, Result};

/// Serializes a raster to disk as flat big-endian i16, row-major, no header.
/// Rows are encoded through one reusable row buffer so the full mosaic is
/// never materialized a second time as bytes.
pub fn write_raster(path: &Path, raster: &Raster) -> Result<()> {
    let mut file = File::create(path).map_err(|err| write_error(path, err))?;

    let mut row_bytes = vec![0_u8; raster.cols() * SAMPLE_BYTES];
    for row in raster.samples().chunks_exact(raster.cols()) {
        BigEndian::write_i16_into(row, &mut row_bytes);
        file.write_all(&row_bytes)
            .map_err(|err| write_error(path, err))?;
    }
    Ok(())
}

fn write_error(path: &Path, err: std::io::Error) -> MosaicError {
    MosaicError::new(
        MosaicErrorCode::MosaicWrite,
        format!("Could not write mosaic {}: {err}", path.display()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn writes_big_endian_row_major_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.img");
        let raster =
            Raster::from_samples(2, 2, vec![1, -1, 256, i16::MIN]).expect("raster");

        write_raster(&path, &raster).expect("write raster");

        let bytes = fs::read(&path).expect("read back");
        assert_eq!(
            bytes,
            vec![0x00, 0x01, 0xff, 0xff, 0x01, 0x00, 0x80, 0x00]
        );
    }

    #[test]
    fn unwritable_path_reports_mosaic_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("no-such-dir").join("out.img");
        let raster = Raster::zeroed(1, 1).expect("raster");

        let error = write_raster(&path, &raster).expect_err("should fail");
        assert_eq!(error.code, MosaicErrorCode::MosaicWrite);
    }
}
