// ============================================
// Camera - Свободная камера (yaw/pitch)
// ============================================
// Позиция и ориентация мутируются только слоем ввода,
// рендер читает готовые матрицы раз в кадр.

use ultraviolet::{Mat4, Vec3};

/// Пределы вертикального угла, градусы
pub const PITCH_LIMIT: f32 = 89.0;

/// Пределы поля зрения, градусы
pub const FOV_MIN: f32 = 1.0;
pub const FOV_MAX: f32 = 45.0;

/// Состояние камеры
pub struct CameraState {
    /// Позиция в мире
    pub position: Vec3,

    /// Горизонтальный угол, градусы (-90 = взгляд вдоль -Z)
    pub yaw: f32,

    /// Вертикальный угол, градусы, всегда в [-89, 89]
    pub pitch: f32,

    /// Поле зрения, градусы, всегда в [1, 45]
    pub fov: f32,

    /// Параметры проекции
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraState {
    /// Камера в стартовой позиции: (0, 1, 5.5), взгляд на центр
    pub fn new(aspect: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 5.5),
            yaw: -90.0,
            pitch: -10.0,
            fov: 45.0,
            aspect,
            near: 0.1,
            far,
        }
    }

    /// Направление взгляда из yaw/pitch
    pub fn front(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalized()
    }

    /// Вектор вправо
    pub fn right(&self) -> Vec3 {
        self.front().cross(Vec3::unit_y()).normalized()
    }

    /// Матрица вида (View Matrix)
    pub fn view_matrix(&self) -> Mat4 {
        let target = self.position + self.front();
        Mat4::look_at(self.position, target, Vec3::unit_y())
    }

    /// Матрица проекции
    pub fn projection_matrix(&self) -> Mat4 {
        ultraviolet::projection::perspective_wgpu_dx(
            self.fov.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// Комбинированная матрица View-Projection
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultraviolet::Vec4;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_view_matrix_round_trip() {
        // view переводит позицию камеры в локальный ноль
        let camera = CameraState::new(16.0 / 9.0, 25.0);
        let view = camera.view_matrix();
        let p = camera.position;
        let origin = view * Vec4::new(p.x, p.y, p.z, 1.0);
        assert!(origin.x.abs() < EPS);
        assert!(origin.y.abs() < EPS);
        assert!(origin.z.abs() < EPS);
    }

    #[test]
    fn test_front_is_unit_length() {
        let mut camera = CameraState::new(1.0, 25.0);
        for (yaw, pitch) in [(-90.0, 0.0), (37.0, 45.0), (180.0, -89.0)] {
            camera.yaw = yaw;
            camera.pitch = pitch;
            assert!((camera.front().mag() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_resize_ignores_zero_size() {
        let mut camera = CameraState::new(2.0, 25.0);
        camera.resize(0, 100);
        assert_eq!(camera.aspect, 2.0);
        camera.resize(300, 100);
        assert_eq!(camera.aspect, 3.0);
    }
}
