// ============================================
// Point Light - Точечный источник в центре сцены
// ============================================
// Солнце сидит в начале координат и светит во все стороны.
// near/far задают глубинный диапазон кубической карты теней.

use ultraviolet::Vec3;

/// Точечный источник света
#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    /// Позиция света (центр сцены)
    pub position: Vec3,

    /// Ближняя плоскость проекций кубической карты (> 0)
    pub near: f32,

    /// Дальняя плоскость (должна перекрывать радиус сцены)
    pub far: f32,

    /// Цвет света
    pub color: Vec3,

    /// Ambient коэффициент
    pub ambient: Vec3,

    /// Diffuse коэффициент
    pub diffuse: Vec3,

    /// Specular коэффициент
    pub specular: Vec3,
}

impl PointLight {
    pub fn new() -> Self {
        Self {
            position: Vec3::zero(),
            near: 1.0,
            far: 25.0,
            color: Vec3::one(),
            ambient: Vec3::new(0.1, 0.1, 0.1),
            diffuse: Vec3::new(1.0, 1.0, 1.0),
            specular: Vec3::new(0.5, 0.5, 0.5),
        }
    }

    /// Проверка инвариантов. Нарушение не фатально:
    /// тени будут видимо неправильными, но рендер продолжится.
    pub fn validate(&self, scene_radius: f32) -> bool {
        let mut ok = true;

        if self.near <= 0.0 {
            log::warn!(
                "point light near plane {} <= 0, cube projection is degenerate",
                self.near
            );
            ok = false;
        }

        if self.far <= scene_radius {
            log::warn!(
                "point light far plane {} does not cover scene radius {}, cube map will clip",
                self.far,
                scene_radius
            );
            ok = false;
        }

        ok
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_light_covers_scene() {
        let light = PointLight::new();
        assert!(light.validate(4.5));
        assert_eq!(light.position, Vec3::zero());
    }

    #[test]
    fn test_validate_flags_bad_planes() {
        let mut light = PointLight::new();
        light.near = 0.0;
        assert!(!light.validate(4.5));

        let mut light = PointLight::new();
        light.far = 2.0;
        assert!(!light.validate(4.5));
    }
}
