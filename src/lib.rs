pub mod animation;
pub mod app;
pub mod atlas;
pub mod config;
pub mod cube;
pub mod dialogs;
pub mod error;
pub mod lighting;
pub mod matrix_operations;
pub mod overlay;
pub mod render;
pub mod transform;
pub mod viewer;

use std::error::Error;

use winit::event_loop::EventLoop;

use crate::app::App;
use crate::config::ViewerConfig;

/// Opens the viewer window and runs until it is closed.
pub fn run(config: ViewerConfig) -> Result<(), Box<dyn Error>> {
    log::info!("starting viewer with {config:?}");
    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    match app.take_fatal_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
