use crate::camera::Camera;
use crate::math::{Matrix4, Vector3};

/// Uniform block shared by the vertex and fragment stages (group 0, binding 0).
///
/// Layout matches `SceneUniforms` in `shaders/scene.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub transform: Matrix4,
    pub projection: Matrix4,
    pub view: Matrix4,
    pub camera_position: Vector3,
    pub _pad: f32,
}

impl SceneUniforms {
    pub fn new(camera: &Camera, projection: &Matrix4) -> Self {
        Self {
            transform: *camera.transform(),
            projection: *projection,
            view: camera.view_matrix(),
            camera_position: camera.position,
            _pad: 0.0,
        }
    }

    /// Raw floats stored under a named slot
    pub fn slot(&self, slot: UniformSlot) -> &[f32] {
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(self));
        let start = slot.offset() / std::mem::size_of::<f32>();
        &floats[start..start + slot.len()]
    }
}

/// Named entries of the uniform block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniformSlot {
    Transform,
    Projection,
    View,
    CameraPosition,
}

impl UniformSlot {
    pub const ALL: [UniformSlot; 4] = [
        UniformSlot::Transform,
        UniformSlot::Projection,
        UniformSlot::View,
        UniformSlot::CameraPosition,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            UniformSlot::Transform => "uTransform",
            UniformSlot::Projection => "uProjection",
            UniformSlot::View => "uView",
            UniformSlot::CameraPosition => "uCameraPosition",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }

    /// Byte offset inside `SceneUniforms`
    pub const fn offset(self) -> usize {
        match self {
            UniformSlot::Transform => std::mem::offset_of!(SceneUniforms, transform),
            UniformSlot::Projection => std::mem::offset_of!(SceneUniforms, projection),
            UniformSlot::View => std::mem::offset_of!(SceneUniforms, view),
            UniformSlot::CameraPosition => std::mem::offset_of!(SceneUniforms, camera_position),
        }
    }

    /// Number of floats
    pub const fn len(self) -> usize {
        match self {
            UniformSlot::CameraPosition => 3,
            _ => 16,
        }
    }
}

/// Vertex data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Unit quad one unit in front of the origin
pub const QUAD_VERTICES: [Vertex; 4] = [
    Vertex { position: [-0.5, -0.5, -1.0] },
    Vertex { position: [0.5, -0.5, -1.0] },
    Vertex { position: [0.5, 0.5, -1.0] },
    Vertex { position: [-0.5, 0.5, -1.0] },
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];
