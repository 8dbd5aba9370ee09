mod bounce;

use serde::Serialize;

use crate::error::SceneError;
use crate::layout::LevelLayout;
use crate::lights::{create_light_rig, LightRig};
use crate::math::AABB;
use crate::platform::{create_platform, try_create_platform, PlatformEntity};

pub use bounce::{bounce_layout, create_bounce_scene};

/// Everything the scene assembler inserts: lights into the render list,
/// platform meshes into the render graph and bodies into the physics world
#[derive(Debug)]
pub struct SceneAssembly {
    pub lights: LightRig,
    pub platforms: Vec<PlatformEntity>,
}

impl SceneAssembly {
    pub fn find_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a PlatformEntity> + 'a {
        self.platforms.iter().filter(move |p| p.tag() == Some(tag))
    }

    /// Box enclosing every platform, `None` for an empty scene
    pub fn bounds(&self) -> Option<AABB> {
        self.platforms
            .iter()
            .map(PlatformEntity::bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            lights: self.lights.descriptors().len(),
            platforms: self
                .platforms
                .iter()
                .map(|p| PlatformSummary {
                    mesh: p.visual.handle().id(),
                    body: p.body.handle().id(),
                    position: p.body.position.to_array(),
                    material: p.body.material.as_ref().map(|m| m.name.clone()),
                    tag: p.tag().map(str::to_owned),
                })
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PlatformSummary {
    pub mesh: u64,
    pub body: u64,
    pub position: [f32; 3],
    pub material: Option<String>,
    pub tag: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SceneSummary {
    pub lights: usize,
    pub platforms: Vec<PlatformSummary>,
}

/// Builds a scene from a layout. In strict mode every platform must name a
/// material and sit at a finite position.
pub fn assemble(layout: &LevelLayout, strict: bool) -> Result<SceneAssembly, SceneError> {
    let configs = layout.platform_configs()?;

    let platforms = if strict {
        configs
            .into_iter()
            .map(try_create_platform)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        configs.into_iter().map(create_platform).collect()
    };

    log::info!(
        "Scene assembled: {} platforms{}",
        platforms.len(),
        if strict { " (strict)" } else { "" }
    );

    Ok(SceneAssembly {
        lights: create_light_rig(),
        platforms,
    })
}

/// Built-in scene lookup by name
pub fn scene_by_name(name: &str, strict: bool) -> Result<SceneAssembly, SceneError> {
    match name {
        "bounce" => create_bounce_scene(strict),
        _ => Err(SceneError::UnknownScene(name.to_string())),
    }
}
