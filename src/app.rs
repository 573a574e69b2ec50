mod events;
mod ui;

use crate::animation::Ticker;
use crate::atlas;
use crate::config::ViewerConfig;
use crate::overlay;
use crate::render::{CubeUniforms, RenderContext, UiFrame};
use crate::viewer::{MenuAction, Viewer, WHEEL_UNITS_PER_NOTCH};
use image::RgbaImage;
use std::error::Error;
use std::sync::Arc;
use web_time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

pub const WINDOW_TITLE: &str = "Textured Cube";

pub struct App {
    config: ViewerConfig,
    tiles: Vec<RgbaImage>,
    viewer: Viewer,
    egui_ctx: egui::Context,
    egui_winit_state: Option<egui_winit::State>,
    rcx: Option<RenderContext>,
    spin_ticker: Ticker,
    texture_ticker: Ticker,
    cursor: [f32; 2],
    fatal_error: Option<Box<dyn Error>>,
}

impl App {
    pub fn new(config: ViewerConfig) -> Self {
        let tiles = atlas::load_tiles_or_empty(&config.texture_path);
        let viewer = Viewer::new(&config, tiles.len());
        let now = Instant::now();
        Self {
            spin_ticker: Ticker::start(config.spin_interval, now),
            texture_ticker: Ticker::start(config.texture_interval, now),
            config,
            tiles,
            viewer,
            egui_ctx: egui::Context::default(),
            egui_winit_state: None,
            rcx: None,
            cursor: [0.0, 0.0],
            fatal_error: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn take_fatal_error(&mut self) -> Option<Box<dyn Error>> {
        self.fatal_error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Box<dyn Error>) {
        self.fatal_error = Some(err);
        event_loop.exit();
    }

    fn window(&self) -> Option<Arc<Window>> {
        self.rcx.as_ref().map(|rcx| rcx.window().clone())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window() else {
            return;
        };
        let Some(ui_frame) = self.run_ui_frame(&window) else {
            return;
        };
        let uniforms = CubeUniforms::new(self.viewer.transform(), self.viewer.lighting());
        let tile = self.viewer.current_tile();
        let Some(rcx) = self.rcx.as_mut() else {
            return;
        };
        match rcx.render_frame(&uniforms, tile, ui_frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                rcx.reconfigure();
                window.request_redraw();
            }
            Err(wgpu::SurfaceError::Timeout) => log::warn!("timed out acquiring the next frame"),
            Err(err) => self.fail(event_loop, err.into()),
        }
    }
}
