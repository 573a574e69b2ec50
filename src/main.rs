use clap::Parser;

use textured_cube_viewer::config::{Args, ViewerConfig};

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = textured_cube_viewer::run(ViewerConfig::from(args)) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
