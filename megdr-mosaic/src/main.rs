use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use log::error;

use megdr_mosaic::{assemble_to_file, GridSpec, DEFAULT_OUTPUT_FILENAME};

#[derive(Parser, Debug)]
#[command(
    name = "megdr-mosaic",
    about = "Stitch the 16 MOLA MEGDR 128 px/deg tiles into a single heightmap raster"
)]
struct Args {
    /// Directory containing the 16 megr..hb.img tile files
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// Output path for the assembled raster
    #[arg(long, default_value = DEFAULT_OUTPUT_FILENAME)]
    output: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let grid = GridSpec::megdr_128();
    if let Err(err) = assemble_to_file(&grid, &args.input_dir, &args.output) {
        error!("{err}");
        process::exit(1);
    }
}
