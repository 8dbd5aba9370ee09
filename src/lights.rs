use glam::Vec3;

use crate::math::hex_to_rgb;

pub const AMBIENT_COLOR: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 0.5;

pub const SUN_COLOR: u32 = 0xffffff;
pub const SUN_INTENSITY: f32 = 1.5;
pub const SUN_POSITION: Vec3 = Vec3::new(15.0, 25.0, 10.0);

/// Covers the whole play area: 60 x 60 units across, 99.5 deep
pub const SHADOW_FRUSTUM: ShadowFrustum = ShadowFrustum {
    top: 30.0,
    bottom: -30.0,
    left: -30.0,
    right: 30.0,
    near: 0.5,
    far: 100.0,
};
pub const SHADOW_MAP_SIZE: (u32, u32) = (2048, 2048);

/// Orthographic volume the directional light renders its shadow map from
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadowFrustum {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
    pub near: f32,
    pub far: f32,
}

impl ShadowFrustum {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    pub fn depth(&self) -> f32 {
        self.far - self.near
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadowConfig {
    pub frustum: ShadowFrustum,
    pub map_size: (u32, u32),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
    /// `None` disables shadow casting
    pub shadow: Option<ShadowConfig>,
}

impl DirectionalLight {
    pub fn cast_shadow(&self) -> bool {
        self.shadow.is_some()
    }

    /// Direction light travels in, aimed at the world origin
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightDescriptor {
    Ambient(AmbientLight),
    Directional(DirectionalLight),
}

impl LightDescriptor {
    pub fn color(&self) -> [f32; 3] {
        match self {
            LightDescriptor::Ambient(light) => light.color,
            LightDescriptor::Directional(light) => light.color,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            LightDescriptor::Ambient(light) => light.intensity,
            LightDescriptor::Directional(light) => light.intensity,
        }
    }

    pub fn cast_shadow(&self) -> bool {
        match self {
            LightDescriptor::Ambient(_) => false,
            LightDescriptor::Directional(light) => light.cast_shadow(),
        }
    }
}

/// Fill light so unlit faces never go fully black
pub fn ambient_light() -> AmbientLight {
    AmbientLight {
        color: hex_to_rgb(AMBIENT_COLOR),
        intensity: AMBIENT_INTENSITY,
    }
}

/// Shadow-casting key light
pub fn directional_light() -> DirectionalLight {
    DirectionalLight {
        color: hex_to_rgb(SUN_COLOR),
        intensity: SUN_INTENSITY,
        position: SUN_POSITION,
        shadow: Some(ShadowConfig {
            frustum: SHADOW_FRUSTUM,
            map_size: SHADOW_MAP_SIZE,
        }),
    }
}

/// The scene's fixed ambient + directional pair. Built fresh on every call;
/// the caller owns the result.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
}

impl LightRig {
    pub fn descriptors(&self) -> [LightDescriptor; 2] {
        [
            LightDescriptor::Ambient(self.ambient),
            LightDescriptor::Directional(self.directional),
        ]
    }

    pub fn to_uniform(&self) -> LightUniform {
        let sun = &self.directional;
        let (frustum, map_size, cast_shadow) = match sun.shadow {
            Some(shadow) => (shadow.frustum, shadow.map_size, 1),
            None => (SHADOW_FRUSTUM, (0, 0), 0),
        };

        LightUniform {
            ambient_color: self.ambient.color,
            ambient_intensity: self.ambient.intensity,
            sun_position: sun.position.to_array(),
            sun_intensity: sun.intensity,
            sun_color: sun.color,
            cast_shadow,
            shadow_bounds: [frustum.left, frustum.right, frustum.bottom, frustum.top],
            shadow_depth: [frustum.near, frustum.far],
            shadow_map_size: [map_size.0, map_size.1],
        }
    }
}

pub fn create_light_rig() -> LightRig {
    LightRig {
        ambient: ambient_light(),
        directional: directional_light(),
    }
}

/// Light uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub sun_position: [f32; 3],
    pub sun_intensity: f32,
    pub sun_color: [f32; 3],
    pub cast_shadow: u32, // 1 if the sun casts shadows
    pub shadow_bounds: [f32; 4], // left, right, bottom, top
    pub shadow_depth: [f32; 2],  // near, far
    pub shadow_map_size: [u32; 2],
}
