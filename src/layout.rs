use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::physics::{BodyTag, ContactMaterial};
use crate::platform::PlatformConfig;

/// One platform entry of a level file. Omitted axes default to zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformPlacement {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    /// Name of an entry in `LevelLayout::materials`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Declarative level description:
///
/// ```json
/// {
///   "materials": [{ "name": "solid", "friction": 0.4, "restitution": 0.0 }],
///   "platforms": [{ "x": 0, "y": -1, "material": "solid" },
///                 { "z": -12, "material": "solid", "tag": "goal" }]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    #[serde(default)]
    pub materials: Vec<ContactMaterial>,
    #[serde(default)]
    pub platforms: Vec<PlatformPlacement>,
}

impl LevelLayout {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Each declared material is allocated once and shared by every platform naming it
    pub fn shared_materials(&self) -> Result<HashMap<&str, Arc<ContactMaterial>>, SceneError> {
        let mut shared = HashMap::with_capacity(self.materials.len());
        for material in &self.materials {
            if shared
                .insert(material.name.as_str(), Arc::new(material.clone()))
                .is_some()
            {
                return Err(SceneError::DuplicateMaterial(material.name.clone()));
            }
        }
        Ok(shared)
    }

    pub fn platform_configs(&self) -> Result<Vec<PlatformConfig>, SceneError> {
        let materials = self.shared_materials()?;

        self.platforms
            .iter()
            .map(|placement| {
                let contact_material = match &placement.material {
                    Some(name) => Some(
                        materials
                            .get(name.as_str())
                            .cloned()
                            .ok_or_else(|| SceneError::UnknownMaterial(name.clone()))?,
                    ),
                    None => None,
                };

                Ok(PlatformConfig {
                    position: Vec3::new(placement.x, placement.y, placement.z),
                    contact_material,
                    tag: placement.tag.clone().and_then(BodyTag::new),
                })
            })
            .collect()
    }
}

/// Loads a JSON level file
pub fn load_layout(path: impl AsRef<Path>) -> Result<LevelLayout> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .context(format!("Failed to read level layout: {:?}", path))?;
    let layout = LevelLayout::from_json(&json)
        .context(format!("Failed to parse level layout: {:?}", path))?;

    log::info!(
        "Loaded layout {:?}: {} materials, {} platforms",
        path,
        layout.materials.len(),
        layout.platforms.len()
    );
    Ok(layout)
}
