use super::*;

impl RenderContext {
    pub async fn new(window: Arc<Window>, tiles: &[RgbaImage]) -> Result<RenderContext, GpuInitError> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                // Request an adapter which can render to our surface
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or(GpuInitError::NoAdapter)?;
        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Cube Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::MemoryUsage,
                },
                None,
            )
            .await?;

        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or(GpuInitError::UnsupportedSurface)?;
        // Shading works on raw texel values, so write them out without sRGB encoding.
        let capabilities = surface.get_capabilities(&adapter);
        if let Some(format) = capabilities.formats.iter().copied().find(|f| !f.is_srgb()) {
            config.format = format;
        }
        surface.configure(&device, &config);
        log::info!("surface configured {}x{} {:?}", width, height, config.format);

        let depth_view = create_depth_view(&device, width, height);
        let cube_pass = CubePass::new(&device, config.format);
        let cube_bindings = CubeBindings::new(&device, &cube_pass);
        let textures = TexturePool::new(&device, &queue, &cube_pass, tiles);
        let egui_renderer =
            egui_wgpu::Renderer::new(&device, config.format, Some(DEPTH_FORMAT), 1, false);

        Ok(RenderContext {
            window,
            surface,
            device,
            queue,
            config,
            depth_view,
            cube_pass,
            cube_bindings,
            textures,
            egui_renderer,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, self.config.width, self.config.height);
    }

    /// Reconfigures the surface at its current size after it was lost or outdated.
    pub fn reconfigure(&mut self) {
        self.resize(self.config.width, self.config.height);
    }
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
