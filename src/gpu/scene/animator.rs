// ============================================
// Scene Animator - Орбитальное движение тел
// ============================================
// Чистая функция времени: одно и то же t всегда даёт
// побитово те же матрицы. Порядок композиции для луны
// (поворот вокруг родителя -> перенос -> собственное
// вращение) даёт связанную прецессию; менять его нельзя —
// изменится видимое движение.

use ultraviolet::{Mat4, Vec3};

/// Небесное тело сцены
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Sun,
    Earth,
    Moon,
}

// Орбитальные параметры (градусы в секунду, единицы сцены)
const EARTH_ORBIT_RATE: f32 = 50.0;
const EARTH_ORBIT_RADIUS: f32 = 3.0;
const EARTH_AXIAL_TILT: f32 = -113.4;
const EARTH_SPIN_RATE: f32 = 25.0;
const EARTH_SCALE: f32 = 0.5;

const SUN_TILT: f32 = -90.0;
const SUN_SCALE: f32 = 0.15;

const MOON_ORBIT_RATE: f32 = 80.0;
const MOON_ORBIT_RADIUS: f32 = 1.2;
const MOON_SPIN_RATE: f32 = 40.0;
const MOON_SCALE: f32 = 0.18;

/// Максимальный радиус сцены (для проверки far-плоскости света)
pub const SCENE_RADIUS: f32 = EARTH_ORBIT_RADIUS + MOON_ORBIT_RADIUS + EARTH_SCALE;

/// Аниматор сцены
pub struct SceneAnimator {
    /// Множитель скорости времени
    pub time_scale: f32,
}

impl SceneAnimator {
    pub fn new(time_scale: f32) -> Self {
        Self { time_scale }
    }

    /// Мировая матрица тела в момент времени `elapsed` (секунды)
    pub fn transform(&self, kind: BodyKind, elapsed: f32) -> Mat4 {
        let t = elapsed * self.time_scale;
        match kind {
            BodyKind::Sun => sun_transform(),
            BodyKind::Earth => earth_transform(t),
            BodyKind::Moon => moon_transform(t),
        }
    }
}

/// Солнце: статичная модель в центре, только выравнивание осей
fn sun_transform() -> Mat4 {
    Mat4::from_rotation_x(SUN_TILT.to_radians()) * Mat4::from_scale(SUN_SCALE)
}

/// Земля: орбита -> вынос на радиус -> наклон оси -> суточное вращение
fn earth_transform(t: f32) -> Mat4 {
    Mat4::from_rotation_y((EARTH_ORBIT_RATE * t).to_radians())
        * Mat4::from_translation(Vec3::new(0.0, 0.0, EARTH_ORBIT_RADIUS))
        * Mat4::from_rotation_x(EARTH_AXIAL_TILT.to_radians())
        * Mat4::from_rotation_z((EARTH_SPIN_RATE * t).to_radians())
        * Mat4::from_scale(EARTH_SCALE)
}

/// Луна: наследует орбитальный кадр Земли, затем поворот вокруг
/// родителя, вынос на радиус и собственное вращение
fn moon_transform(t: f32) -> Mat4 {
    Mat4::from_rotation_y((EARTH_ORBIT_RATE * t).to_radians())
        * Mat4::from_translation(Vec3::new(0.0, 0.0, EARTH_ORBIT_RADIUS))
        * Mat4::from_rotation_y((MOON_ORBIT_RATE * t).to_radians())
        * Mat4::from_translation(Vec3::new(0.0, 0.0, MOON_ORBIT_RADIUS))
        * Mat4::from_rotation_z((MOON_SPIN_RATE * t).to_radians())
        * Mat4::from_scale(MOON_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultraviolet::Vec4;

    const EPS: f32 = 1e-4;

    fn world_center(m: Mat4) -> Vec3 {
        let p = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
        Vec3::new(p.x, p.y, p.z)
    }

    #[test]
    fn test_deterministic_bit_exact() {
        let animator = SceneAnimator::new(1.0);
        for kind in [BodyKind::Sun, BodyKind::Earth, BodyKind::Moon] {
            let a: [[f32; 4]; 4] = animator.transform(kind, 17.32).into();
            let b: [[f32; 4]; 4] = animator.transform(kind, 17.32).into();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_earth_starts_on_orbit_radius() {
        let animator = SceneAnimator::new(1.0);
        let center = world_center(animator.transform(BodyKind::Earth, 0.0));
        assert!((center - Vec3::new(0.0, 0.0, EARTH_ORBIT_RADIUS)).mag() < EPS);
    }

    #[test]
    fn test_earth_orbit_radius_constant() {
        let animator = SceneAnimator::new(1.0);
        for i in 0..32 {
            let t = i as f32 * 0.37;
            let center = world_center(animator.transform(BodyKind::Earth, t));
            assert!((center.mag() - EARTH_ORBIT_RADIUS).abs() < EPS, "t={}", t);
            assert!(center.y.abs() < EPS);
        }
    }

    #[test]
    fn test_moon_distance_to_earth_constant() {
        let animator = SceneAnimator::new(1.0);
        for i in 0..32 {
            let t = i as f32 * 0.53;
            let earth = world_center(animator.transform(BodyKind::Earth, t));
            let moon = world_center(animator.transform(BodyKind::Moon, t));
            assert!(((moon - earth).mag() - MOON_ORBIT_RADIUS).abs() < EPS, "t={}", t);
        }
    }

    #[test]
    fn test_moon_precession_is_coupled() {
        // Порядок композиции связывает углы: смещение луны
        // относительно Земли вращается с суммарной скоростью
        // орбит Земли и Луны
        let animator = SceneAnimator::new(1.0);
        let t = 1.7;
        let earth = world_center(animator.transform(BodyKind::Earth, t));
        let moon = world_center(animator.transform(BodyKind::Moon, t));

        let total = ((EARTH_ORBIT_RATE + MOON_ORBIT_RATE) * t).to_radians();
        let expected = Mat4::from_rotation_y(total)
            * Vec4::new(0.0, 0.0, MOON_ORBIT_RADIUS, 1.0);
        let offset = moon - earth;
        assert!((offset.x - expected.x).abs() < EPS);
        assert!((offset.y - expected.y).abs() < EPS);
        assert!((offset.z - expected.z).abs() < EPS);
    }

    #[test]
    fn test_sun_static_at_origin() {
        let animator = SceneAnimator::new(1.0);
        let a: [[f32; 4]; 4] = animator.transform(BodyKind::Sun, 0.0).into();
        let b: [[f32; 4]; 4] = animator.transform(BodyKind::Sun, 123.4).into();
        assert_eq!(a, b);
        assert!(world_center(animator.transform(BodyKind::Sun, 5.0)).mag() < EPS);
    }

    #[test]
    fn test_scene_fits_inside_radius() {
        let animator = SceneAnimator::new(1.0);
        for i in 0..64 {
            let t = i as f32 * 0.29;
            for kind in [BodyKind::Sun, BodyKind::Earth, BodyKind::Moon] {
                let center = world_center(animator.transform(kind, t));
                assert!(center.mag() <= SCENE_RADIUS + EPS);
            }
        }
    }
}
