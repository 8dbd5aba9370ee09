use std::fmt;
use std::sync::Arc;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::handle::next_id;
use crate::math::AABB;

/// Identity of one allocated rigid body
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(u64);

impl BodyHandle {
    fn allocate() -> Self {
        Self(next_id())
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Friction/restitution pair the solver uses when this body touches another.
/// Shared between bodies through `Arc`; never mutated once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactMaterial {
    pub name: String,
    #[serde(default = "default_friction")]
    pub friction: f32,
    #[serde(default)]
    pub restitution: f32,
}

fn default_friction() -> f32 {
    0.3
}

impl ContactMaterial {
    pub fn new(name: impl Into<String>, friction: f32, restitution: f32) -> Self {
        Self {
            name: name.into(),
            friction,
            restitution,
        }
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Engine fallback used when a body carries no material
impl Default for ContactMaterial {
    fn default() -> Self {
        Self::new("default", default_friction(), 0.0)
    }
}

/// Collision shape, expressed in body-local space
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Box { half_extents: Vec3 },
}

impl Shape {
    pub fn cuboid(half_extents: Vec3) -> Self {
        Shape::Box { half_extents }
    }

    pub fn half_extents(&self) -> Vec3 {
        match self {
            Shape::Box { half_extents } => *half_extents,
        }
    }
}

/// Non-empty label collision handlers use to tell bodies apart ("goal", "wall", ...)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BodyTag(String);

impl BodyTag {
    /// `None` for an empty label: an empty tag means "untagged"
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        if label.is_empty() {
            None
        } else {
            Some(Self(label))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BodyTag {
    type Error = &'static str;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        BodyTag::new(label).ok_or("body tag must not be empty")
    }
}

impl From<BodyTag> for String {
    fn from(tag: BodyTag) -> String {
        tag.0
    }
}

impl fmt::Display for BodyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rigid body as handed to the physics world. Not `Clone`, like `Mesh`.
#[derive(Debug)]
pub struct RigidBody {
    handle: BodyHandle,
    /// Zero means static: infinite inertia, never integrated
    pub mass: f32,
    pub position: Vec3,
    pub shape: Shape,
    pub material: Option<Arc<ContactMaterial>>,
    pub tag: Option<BodyTag>,
}

impl RigidBody {
    pub fn new(mass: f32, shape: Shape, position: Vec3) -> Self {
        Self {
            handle: BodyHandle::allocate(),
            mass,
            position,
            shape,
            material: None,
            tag: None,
        }
    }

    pub fn new_static(shape: Shape, position: Vec3) -> Self {
        Self::new(0.0, shape, position)
    }

    pub fn handle(&self) -> BodyHandle {
        self.handle
    }

    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    pub fn inverse_mass(&self) -> f32 {
        if self.is_static() {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_ref().map(BodyTag::as_str)
    }

    /// Material the solver will actually use: the attached one, else the engine default
    pub fn effective_material(&self) -> ContactMaterial {
        self.material
            .as_deref()
            .cloned()
            .unwrap_or_default()
    }

    pub fn bounds(&self) -> AABB {
        AABB::from_center_half_extents(self.position, self.shape.half_extents())
    }
}
