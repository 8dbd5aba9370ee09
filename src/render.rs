use glam::Vec3;

use crate::handle::next_id;
use crate::math::AABB;

/// Identity of one allocated mesh
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(u64);

impl MeshHandle {
    fn allocate() -> Self {
        Self(next_id())
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Axis-aligned box centered on the mesh origin
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxGeometry {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl BoxGeometry {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth }
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size() * 0.5
    }
}

/// Physically based surface description
#[derive(Clone, Debug, PartialEq)]
pub struct StandardMaterial {
    pub color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
}

impl StandardMaterial {
    pub fn with_color(color: [f32; 3]) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

impl Default for StandardMaterial {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            roughness: 1.0,
            metalness: 0.0,
        }
    }
}

/// Renderable box. Not `Clone`: a copy would share the handle of the original.
#[derive(Debug)]
pub struct Mesh {
    handle: MeshHandle,
    pub geometry: BoxGeometry,
    pub material: StandardMaterial,
    pub position: Vec3,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Mesh {
    /// New mesh at the origin with shadows disabled
    pub fn new(geometry: BoxGeometry, material: StandardMaterial) -> Self {
        Self {
            handle: MeshHandle::allocate(),
            geometry,
            material,
            position: Vec3::ZERO,
            cast_shadow: false,
            receive_shadow: false,
        }
    }

    pub fn handle(&self) -> MeshHandle {
        self.handle
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_center_half_extents(self.position, self.geometry.half_extents())
    }
}
