use crate::error::SceneError;
use crate::layout::LevelLayout;

use super::{assemble, SceneAssembly};

/// Start pad, a staggered run of hops, two side walls and the goal
const BOUNCE_LEVEL: &str = include_str!("../../levels/bounce.json");

pub fn bounce_layout() -> Result<LevelLayout, SceneError> {
    LevelLayout::from_json(BOUNCE_LEVEL)
}

pub fn create_bounce_scene(strict: bool) -> Result<SceneAssembly, SceneError> {
    assemble(&bounce_layout()?, strict)
}
