// ============================================
// Shading - CPU-референс фрагментного контракта
// ============================================
// Зеркало того, что считает body.wgsl: Ламберт + Blinn-Phong
// + теневой тест по линейной дистанции. Держится в точном
// соответствии с шейдером, чтобы контракт освещения можно
// было проверять тестами без GPU.

use ultraviolet::Vec3;

use super::light::PointLight;

/// Смещение против shadow acne (самозатенения), в мировых единицах
pub const SHADOW_BIAS: f32 = 0.05;

/// Показатель блеска Blinn-Phong
pub const SHININESS: f32 = 32.0;

/// Кодирование глубины в грань кубической карты:
/// линейная дистанция до света, нормированная на far.
/// Насыщается на границах, никогда не заворачивается.
pub fn encode_depth(distance: f32, far: f32) -> f32 {
    (distance / far).clamp(0.0, 1.0)
}

/// Теневой множитель: 1.0 — освещён, 0.0 — в тени.
/// `sampled` — значение из кубической карты (нормированное),
/// `distance` — фактическая дистанция фрагмента до света.
pub fn shadow_factor(sampled: f32, distance: f32, far: f32) -> f32 {
    let closest = sampled * far;
    if distance - SHADOW_BIAS > closest {
        0.0
    } else {
        1.0
    }
}

/// Результат затенения одного фрагмента (до умножения на альбедо)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shade {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Shade {
    pub fn total(&self) -> Vec3 {
        self.ambient + self.diffuse + self.specular
    }
}

/// Полный расчёт фрагмента: ambient + diffuse + specular,
/// где diffuse и specular умножены на теневой множитель.
pub fn shade_fragment(
    light: &PointLight,
    world_pos: Vec3,
    normal: Vec3,
    eye_pos: Vec3,
    sampled_depth: f32,
) -> Shade {
    let n = normal.normalized();
    let to_light = light.position - world_pos;
    let distance = to_light.mag();
    let light_dir = to_light.normalized();

    let diff = n.dot(light_dir).max(0.0);

    let view_dir = (eye_pos - world_pos).normalized();
    let halfway = (light_dir + view_dir).normalized();
    let spec = n.dot(halfway).max(0.0).powf(SHININESS);

    let lit = shadow_factor(sampled_depth, distance, light.far);

    Shade {
        ambient: light.ambient * light.color,
        diffuse: light.diffuse * light.color * diff * lit,
        specular: light.specular * light.color * spec * lit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light() -> PointLight {
        PointLight::new()
    }

    #[test]
    fn test_occluder_kills_diffuse_and_specular() {
        // Объект на дистанции 5, заслонка на дистанции 2:
        // остаётся только ambient
        let l = light();
        let pos = Vec3::new(0.0, 0.0, 5.0);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let eye = Vec3::new(0.0, 1.0, 7.0);

        let occluded = shade_fragment(&l, pos, normal, eye, encode_depth(2.0, l.far));
        assert_eq!(occluded.diffuse, Vec3::zero());
        assert_eq!(occluded.specular, Vec3::zero());
        assert_eq!(occluded.ambient, l.ambient);

        // Заслонку убрали: в карте лежит глубина самого объекта
        let lit = shade_fragment(&l, pos, normal, eye, encode_depth(5.0, l.far));
        assert!(lit.diffuse.x > 0.0);
        assert_eq!(lit.ambient, occluded.ambient);
        assert!(lit.total().x > occluded.total().x);
    }

    #[test]
    fn test_far_plane_saturates() {
        // Дистанция за far: кодирование насыщается на 1.0,
        // сравнение не должно снова "включить" свет
        let l = light();
        assert_eq!(encode_depth(l.far * 2.0, l.far), 1.0);
        assert_eq!(encode_depth(-1.0, l.far), 0.0);

        // Фрагмент дальше far, в карте — максимум: он в тени
        let beyond = l.far + 5.0;
        assert_eq!(shadow_factor(1.0, beyond, l.far), 0.0);
    }

    #[test]
    fn test_bias_avoids_self_shadowing() {
        // Фрагмент сравнивается со своей же глубиной: bias
        // должен оставить его освещённым
        let l = light();
        let d = 5.0;
        assert_eq!(shadow_factor(encode_depth(d, l.far), d, l.far), 1.0);
    }

    #[test]
    fn test_lambert_clamped_at_zero() {
        // Нормаль от света: диффуз ноль, не отрицательный
        let l = light();
        let pos = Vec3::new(0.0, 0.0, 5.0);
        let normal = Vec3::new(0.0, 0.0, 1.0); // смотрит от света
        let eye = Vec3::new(0.0, 0.0, 7.0);

        let shade = shade_fragment(&l, pos, normal, eye, 1.0);
        assert_eq!(shade.diffuse, Vec3::zero());
        assert!(shade.ambient.x > 0.0);
    }

    #[test]
    fn test_shading_deterministic() {
        let l = light();
        let pos = Vec3::new(1.0, 2.0, 3.0);
        let normal = Vec3::new(0.3, -0.2, -0.9);
        let eye = Vec3::new(0.0, 1.0, 5.5);

        let a = shade_fragment(&l, pos, normal, eye, 0.7);
        let b = shade_fragment(&l, pos, normal, eye, 0.7);
        assert_eq!(a, b);
    }
}
