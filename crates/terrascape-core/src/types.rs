use std::fmt::Debug;
use std::mem::size_of;

/// A vertex record that can be appended to a mesh and uploaded as raw bytes.
pub trait MeshVertex: bytemuck::Pod + Debug + Default + PartialEq {
    /// Size in bytes of one packed vertex record.
    const STRIDE: usize = size_of::<Self>();
}

/// Vertex used by cubes, 3D quads and terrain:
/// `position` (3 floats), `uv` (2 floats), `color` (3 floats), tightly packed.
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex3 {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 3],
}

/// Vertex used by the flat 2D quad emitter. Same layout as [`Vertex3`]
/// with a two-component position.
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex2 {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 3],
}

impl MeshVertex for Vertex3 {}
impl MeshVertex for Vertex2 {}

impl Vertex3 {
    pub fn new(position: [f32; 3], uv: [f32; 2], color: [f32; 3]) -> Self {
        Self {
            position,
            uv,
            color,
        }
    }

    pub fn from_glam(position: glam::Vec3, uv: glam::Vec2, color: glam::Vec3) -> Self {
        Self::new(position.to_array(), uv.to_array(), color.to_array())
    }
}

impl Vertex2 {
    pub fn new(position: [f32; 2], uv: [f32; 2], color: [f32; 3]) -> Self {
        Self {
            position,
            uv,
            color,
        }
    }

    pub fn from_glam(position: glam::Vec2, uv: glam::Vec2, color: glam::Vec3) -> Self {
        Self::new(position.to_array(), uv.to_array(), color.to_array())
    }
}
