use std::sync::Arc;

use glam::Vec3;
use log::{debug, warn};

use crate::error::SceneError;
use crate::math::{rgb_from_hex_str, AABB};
use crate::physics::{BodyTag, ContactMaterial, RigidBody, Shape};
use crate::render::{BoxGeometry, Mesh, StandardMaterial};

pub const PLATFORM_WIDTH: f32 = 6.0;
pub const PLATFORM_HEIGHT: f32 = 0.8;
pub const PLATFORM_DEPTH: f32 = 6.0;
pub const PLATFORM_COLOR: &str = "#86d6d8";

const PLATFORM_GEOMETRY: BoxGeometry = BoxGeometry::new(PLATFORM_WIDTH, PLATFORM_HEIGHT, PLATFORM_DEPTH);

/// Placement and physics parameters for one platform
#[derive(Clone, Debug, Default)]
pub struct PlatformConfig {
    pub position: Vec3,
    pub contact_material: Option<Arc<ContactMaterial>>,
    pub tag: Option<BodyTag>,
}

impl PlatformConfig {
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            ..Self::default()
        }
    }

    pub fn with_material(mut self, material: Arc<ContactMaterial>) -> Self {
        self.contact_material = Some(material);
        self
    }

    /// An empty label leaves the platform untagged
    pub fn with_tag(mut self, label: impl Into<String>) -> Self {
        self.tag = BodyTag::new(label);
        self
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        for (axis, value) in [('x', self.position.x), ('y', self.position.y), ('z', self.position.z)] {
            if !value.is_finite() {
                return Err(SceneError::NonFinitePosition { axis });
            }
        }
        if self.contact_material.is_none() {
            return Err(SceneError::MissingContactMaterial);
        }
        Ok(())
    }
}

/// A visible box and the static body that collides in its place
#[derive(Debug)]
pub struct PlatformEntity {
    pub visual: Mesh,
    pub body: RigidBody,
}

impl PlatformEntity {
    /// Mesh and body still occupy the same spot
    pub fn in_sync(&self) -> bool {
        self.visual.position == self.body.position
    }

    pub fn bounds(&self) -> AABB {
        self.body.bounds()
    }

    pub fn tag(&self) -> Option<&str> {
        self.body.tag()
    }
}

fn platform_material() -> StandardMaterial {
    StandardMaterial::with_color(rgb_from_hex_str(PLATFORM_COLOR).unwrap_or([1.0, 1.0, 1.0]))
}

/// Builds the mesh/body pair for one platform. Never fails: a missing
/// contact material leaves the body on the engine's default response.
pub fn create_platform(config: PlatformConfig) -> PlatformEntity {
    let PlatformConfig {
        position,
        contact_material,
        tag,
    } = config;

    if contact_material.is_none() {
        warn!("platform at {} has no contact material, using engine default", position);
    }

    let mut visual = Mesh::new(PLATFORM_GEOMETRY, platform_material());
    visual.position = position;
    visual.cast_shadow = true;
    visual.receive_shadow = true;

    let mut body = RigidBody::new_static(Shape::cuboid(PLATFORM_GEOMETRY.half_extents()), position);
    body.material = contact_material;
    body.tag = tag;

    debug!(
        "platform mesh #{} / body #{} at {} tag={:?}",
        visual.handle().id(),
        body.handle().id(),
        position,
        body.tag()
    );

    PlatformEntity { visual, body }
}

/// Like [`create_platform`], but rejects a missing material or a non-finite position
pub fn try_create_platform(config: PlatformConfig) -> Result<PlatformEntity, SceneError> {
    config.validate()?;
    Ok(create_platform(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_origin_untagged() {
        let config = PlatformConfig::default();
        assert_eq!(config.position, Vec3::ZERO);
        assert!(config.contact_material.is_none());
        assert!(config.tag.is_none());
    }

    #[test]
    fn test_with_empty_tag_clears_tag() {
        let config = PlatformConfig::default().with_tag("goal").with_tag("");
        assert!(config.tag.is_none());
    }

    #[test]
    fn test_validate_reports_axis() {
        let config = PlatformConfig::at(0.0, f32::NAN, 0.0)
            .with_material(ContactMaterial::default().shared());
        match config.validate() {
            Err(SceneError::NonFinitePosition { axis }) => assert_eq!(axis, 'y'),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_platform_color() {
        let entity = create_platform(PlatformConfig::default());
        let expected = rgb_from_hex_str(PLATFORM_COLOR).unwrap();
        assert_eq!(entity.visual.material.color, expected);
    }

    #[test]
    fn test_body_half_extents() {
        let entity = create_platform(PlatformConfig::default());
        assert_eq!(entity.body.shape.half_extents(), Vec3::new(3.0, 0.4, 3.0));
    }
}
