mod context_init;
mod cube_pass;
mod texture_pool;
mod types;

use self::cube_pass::{CubeBindings, CubePass};
use self::texture_pool::TexturePool;
pub use self::types::*;
use crate::cube::{Vertex, CUBE_VERTICES};
use crate::error::GpuInitError;
use crate::lighting::{
    Lighting, GLOSS_THRESHOLD_HIGH, GLOSS_THRESHOLD_LOW, LIGHT_DIRECTION, UNTEXTURED_BASE_COLOR,
};
use crate::matrix_operations::flatten_4x4_matrix_for_wgpu;
use crate::transform::TransformState;
use bytemuck::{Pod, Zeroable};
use image::RgbaImage;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

pub struct RenderContext {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    cube_pass: CubePass,
    cube_bindings: CubeBindings,
    textures: TexturePool,
    egui_renderer: egui_wgpu::Renderer,
}

impl RenderContext {
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn tile_count(&self) -> usize {
        self.textures.len()
    }

    /// Draws the cube with the given tile (untextured when `None`), then the UI on top.
    pub fn render_frame(
        &mut self,
        uniforms: &CubeUniforms,
        tile: Option<usize>,
        ui: UiFrame,
    ) -> Result<(), wgpu::SurfaceError> {
        let UiFrame {
            paint_jobs,
            textures_delta,
            pixels_per_point,
        } = ui;

        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        self.queue.write_buffer(
            &self.cube_bindings.uniform_buffer,
            0,
            bytemuck::bytes_of(uniforms),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point,
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Cube Frame Encoder"),
            });
        let ui_commands = self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Cube Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.cube_pass
                .record(&mut rpass, &self.cube_bindings, self.textures.bind_group(tile));
            self.egui_renderer
                .render(&mut rpass.forget_lifetime(), &paint_jobs, &screen_descriptor);
        }

        self.queue
            .submit(ui_commands.into_iter().chain(Some(encoder.finish())));
        self.window.pre_present_notify();
        frame.present();

        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        Ok(())
    }
}
