use std::path::Path;

use log::info;

use crate::grid::GridSpec;
use crate::raster::Raster;
use crate::reader::read_tile;
use crate::writer::write_raster;
use crate::Result;

/// Shape and value range of an assembled mosaic, reported after the full
/// placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicSummary {
    pub rows: usize,
    pub cols: usize,
    pub min: i16,
    pub max: i16,
}

/// Assembles the full mosaic in memory: every tile named by `grid` is loaded
/// from `input_dir` and copied into its cell. Any missing, unreadable, or
/// wrongly sized tile aborts the run.
pub fn assemble(grid: &GridSpec, input_dir: &Path) -> Result<Raster> {
    let placements = grid.placements()?;
    let mut mosaic = Raster::zeroed(grid.mosaic_rows()?, grid.mosaic_cols()?)?;

    for placement in &placements {
        let path = input_dir.join(&placement.filename);
        let tile = read_tile(&path, grid.tile_rows, grid.tile_cols)?;
        mosaic.place(&tile, placement.rows.start, placement.cols.start)?;
        info!(
            "Placed {} at rows {}..{}, cols {}..{} ({}x{} samples)",
            placement.filename,
            placement.rows.start,
            placement.rows.end,
            placement.cols.start,
            placement.cols.end,
            tile.rows(),
            tile.cols()
        );
    }
    Ok(mosaic)
}

/// Assembles the mosaic and serializes it to `output_path`, reporting its
/// shape and value range. The output file is only created once every tile
/// has been placed.
pub fn assemble_to_file(
    grid: &GridSpec,
    input_dir: &Path,
    output_path: &Path,
) -> Result<MosaicSummary> {
    let mosaic = assemble(grid, input_dir)?;
    let (min, max) = mosaic.value_range();
    let summary = MosaicSummary {
        rows: mosaic.rows(),
        cols: mosaic.cols(),
        min,
        max,
    };

    info!(
        "Saving mosaic of size {}x{} with values in [{min}, {max}].",
        summary.rows, summary.cols
    );
    write_raster(output_path, &mosaic)?;
    Ok(summary)
}
