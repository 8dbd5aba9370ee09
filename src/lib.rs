pub mod cli;
pub mod error;
mod handle;
pub mod layout;
pub mod lights;
pub mod math;
pub mod physics;
pub mod platform;
pub mod render;
pub mod scenes;

pub use error::SceneError;
pub use lights::{ambient_light, create_light_rig, directional_light, LightDescriptor, LightRig};
pub use platform::{create_platform, try_create_platform, PlatformConfig, PlatformEntity};
pub use scenes::{assemble, create_bounce_scene, SceneAssembly};
