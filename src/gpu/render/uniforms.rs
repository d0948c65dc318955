use bytemuck::{Pod, Zeroable};
use ultraviolet::Mat4;

use crate::gpu::camera::CameraState;
use crate::gpu::lighting::{PointLight, SHADOW_BIAS};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub _pad: f32,
}

impl Globals {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::identity().into(),
            camera_pos: [0.0, 0.0, 0.0],
            _pad: 0.0,
        }
    }

    pub fn update(&mut self, camera: &CameraState) {
        self.view_proj = camera.view_projection_matrix().into();
        self.camera_pos = camera.position.into();
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 3],
    pub far_plane: f32,
    pub color: [f32; 3],
    pub shadow_bias: f32,
    pub ambient: [f32; 3],
    pub shadows_enabled: f32,
    pub diffuse: [f32; 3],
    pub _pad0: f32,
    pub specular: [f32; 3],
    pub _pad1: f32,
}

impl PointLightUniform {
    pub fn from_light(light: &PointLight, shadows_enabled: bool) -> Self {
        Self {
            position: light.position.into(),
            far_plane: light.far,
            color: light.color.into(),
            shadow_bias: SHADOW_BIAS,
            ambient: light.ambient.into(),
            shadows_enabled: if shadows_enabled { 1.0 } else { 0.0 },
            diffuse: light.diffuse.into(),
            _pad0: 0.0,
            specular: light.specular.into(),
            _pad1: 0.0,
        }
    }
}

/// Матрица одной грани кубической карты + параметры света
/// для записи линейной глубины
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct FaceUniform {
    pub view_proj: [[f32; 4]; 4],
    pub light_pos: [f32; 3],
    pub far_plane: f32,
}

impl Default for FaceUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::identity().into(),
            light_pos: [0.0, 0.0, 0.0],
            far_plane: 1.0,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl Default for ModelUniform {
    fn default() -> Self {
        Self {
            model: Mat4::identity().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Размеры должны совпадать с WGSL-структурами (выравнивание 16)
    #[test]
    fn test_uniform_sizes_match_wgsl() {
        assert_eq!(std::mem::size_of::<Globals>(), 80);
        assert_eq!(std::mem::size_of::<PointLightUniform>(), 80);
        assert_eq!(std::mem::size_of::<FaceUniform>(), 80);
        assert_eq!(std::mem::size_of::<ModelUniform>(), 64);
    }

    #[test]
    fn test_shadow_toggle_encoded_as_float() {
        let light = PointLight::new();
        assert_eq!(PointLightUniform::from_light(&light, true).shadows_enabled, 1.0);
        assert_eq!(PointLightUniform::from_light(&light, false).shadows_enabled, 0.0);
    }
}
