use super::*;

/// One GPU texture and bind group per atlas tile.
pub(super) struct TexturePool {
    bind_groups: Vec<wgpu::BindGroup>,
}

impl TexturePool {
    pub(super) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pass: &CubePass,
        tiles: &[RgbaImage],
    ) -> Self {
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Tile Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_groups = tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| {
                let view = upload_tile(device, queue, tile);
                device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("Tile {i} Bind Group")),
                    layout: &pass.texture_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: wgpu::BindingResource::TextureView(&view),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::Sampler(&sampler),
                        },
                    ],
                })
            })
            .collect::<Vec<_>>();
        log::debug!("uploaded {} tile textures", bind_groups.len());

        Self { bind_groups }
    }

    pub(super) fn len(&self) -> usize {
        self.bind_groups.len()
    }

    pub(super) fn bind_group(&self, index: Option<usize>) -> Option<&wgpu::BindGroup> {
        index.and_then(|i| self.bind_groups.get(i))
    }
}

fn upload_tile(device: &wgpu::Device, queue: &wgpu::Queue, tile: &RgbaImage) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width: tile.width(),
        height: tile.height(),
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Tile Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        // Unorm keeps texel values as stored; gloss thresholds are defined on them.
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::ImageCopyTexture {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        tile.as_raw(),
        wgpu::ImageDataLayout {
            offset: 0,
            bytes_per_row: Some(4 * tile.width()),
            rows_per_image: Some(tile.height()),
        },
        size,
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
