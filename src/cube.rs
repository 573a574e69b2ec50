use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Default, Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

const fn v(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Vertex {
    Vertex {
        position,
        normal,
        tex_coord,
    }
}

const N_FRONT: [f32; 3] = [0.0, 0.0, 1.0];
const N_BACK: [f32; 3] = [0.0, 0.0, -1.0];
const N_LEFT: [f32; 3] = [-1.0, 0.0, 0.0];
const N_RIGHT: [f32; 3] = [1.0, 0.0, 0.0];
const N_TOP: [f32; 3] = [0.0, 1.0, 0.0];
const N_BOTTOM: [f32; 3] = [0.0, -1.0, 0.0];

/// Unit cube centred on the origin: two counter-clockwise triangles per face.
pub const CUBE_VERTICES: [Vertex; 36] = [
    // Front
    v([-0.5, -0.5, 0.5], N_FRONT, [0.0, 0.0]),
    v([0.5, -0.5, 0.5], N_FRONT, [1.0, 0.0]),
    v([0.5, 0.5, 0.5], N_FRONT, [1.0, 1.0]),
    v([0.5, 0.5, 0.5], N_FRONT, [1.0, 1.0]),
    v([-0.5, 0.5, 0.5], N_FRONT, [0.0, 1.0]),
    v([-0.5, -0.5, 0.5], N_FRONT, [0.0, 0.0]),
    // Back
    v([-0.5, -0.5, -0.5], N_BACK, [1.0, 0.0]),
    v([-0.5, 0.5, -0.5], N_BACK, [1.0, 1.0]),
    v([0.5, 0.5, -0.5], N_BACK, [0.0, 1.0]),
    v([0.5, 0.5, -0.5], N_BACK, [0.0, 1.0]),
    v([0.5, -0.5, -0.5], N_BACK, [0.0, 0.0]),
    v([-0.5, -0.5, -0.5], N_BACK, [1.0, 0.0]),
    // Left
    v([-0.5, 0.5, 0.5], N_LEFT, [1.0, 0.0]),
    v([-0.5, 0.5, -0.5], N_LEFT, [1.0, 1.0]),
    v([-0.5, -0.5, -0.5], N_LEFT, [0.0, 1.0]),
    v([-0.5, -0.5, -0.5], N_LEFT, [0.0, 1.0]),
    v([-0.5, -0.5, 0.5], N_LEFT, [0.0, 0.0]),
    v([-0.5, 0.5, 0.5], N_LEFT, [1.0, 0.0]),
    // Right
    v([0.5, 0.5, 0.5], N_RIGHT, [1.0, 0.0]),
    v([0.5, -0.5, -0.5], N_RIGHT, [0.0, 1.0]),
    v([0.5, 0.5, -0.5], N_RIGHT, [1.0, 1.0]),
    v([0.5, -0.5, -0.5], N_RIGHT, [0.0, 1.0]),
    v([0.5, 0.5, 0.5], N_RIGHT, [1.0, 0.0]),
    v([0.5, -0.5, 0.5], N_RIGHT, [0.0, 0.0]),
    // Top
    v([-0.5, 0.5, -0.5], N_TOP, [0.0, 1.0]),
    v([-0.5, 0.5, 0.5], N_TOP, [0.0, 0.0]),
    v([0.5, 0.5, 0.5], N_TOP, [1.0, 0.0]),
    v([0.5, 0.5, 0.5], N_TOP, [1.0, 0.0]),
    v([0.5, 0.5, -0.5], N_TOP, [1.0, 1.0]),
    v([-0.5, 0.5, -0.5], N_TOP, [0.0, 1.0]),
    // Bottom
    v([-0.5, -0.5, -0.5], N_BOTTOM, [1.0, 1.0]),
    v([0.5, -0.5, -0.5], N_BOTTOM, [0.0, 1.0]),
    v([0.5, -0.5, 0.5], N_BOTTOM, [0.0, 0.0]),
    v([0.5, -0.5, 0.5], N_BOTTOM, [0.0, 0.0]),
    v([-0.5, -0.5, 0.5], N_BOTTOM, [1.0, 0.0]),
    v([-0.5, -0.5, -0.5], N_BOTTOM, [1.0, 1.0]),
];
