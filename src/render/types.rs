use super::*;

pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.27,
    g: 0.41,
    b: 0.56,
    a: 1.0,
};

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Per-frame uniform block. Layout matches `CubeUniforms` in `cube.wgsl`.
#[repr(C)]
#[derive(Default, Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CubeUniforms {
    pub mvp: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    pub view_pos: [f32; 4],
    pub light_dir: [f32; 4],
    pub lighting: [f32; 4],
    pub gloss_range: [f32; 4],
}

impl CubeUniforms {
    pub fn new(transform: &TransformState, lighting: Lighting) -> Self {
        let eye = transform.eye();
        let [lx, ly, lz] = LIGHT_DIRECTION;
        Self {
            mvp: flatten_4x4_matrix_for_wgpu(transform.combined()),
            model: flatten_4x4_matrix_for_wgpu(transform.model()),
            normal_matrix: flatten_4x4_matrix_for_wgpu(transform.normal_matrix()),
            view_pos: [eye.x, eye.y, eye.z, 1.0],
            light_dir: [lx, ly, lz, 0.0],
            lighting: lighting.packed(),
            gloss_range: [
                GLOSS_THRESHOLD_LOW,
                GLOSS_THRESHOLD_HIGH,
                UNTEXTURED_BASE_COLOR[0],
                0.0,
            ],
        }
    }
}

/// Egui output for one frame, ready to be painted over the cube.
pub struct UiFrame {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}
