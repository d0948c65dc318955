// ============================================
// Camera Controller - WASD + мышь + скролл
// ============================================
// Дельты мыши и скролла копятся между кадрами и
// применяются в update() строго в порядке:
// мышь -> скролл -> клавиатура. F переключает режим
// следования: ручное перемещение выключено, обзор
// мышью продолжает работать.

use ultraviolet::Vec3;
use winit::keyboard::KeyCode;

use super::camera::{CameraState, FOV_MAX, FOV_MIN, PITCH_LIMIT};

/// Контроллер камеры
pub struct CameraController {
    // Состояние клавиш движения
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,

    /// Режим следования: перемещение подавлено
    pub follow_mode: bool,

    // Накопленные дельты мыши
    mouse_dx: f32,
    mouse_dy: f32,

    // Накопленный скролл
    scroll: f32,

    /// Чувствительность мыши (градусы на пиксель)
    pub sensitivity: f32,

    /// Скорость перемещения (единиц в секунду)
    pub speed: f32,
}

impl CameraController {
    pub fn new(sensitivity: f32, speed: f32) -> Self {
        Self {
            forward: false,
            backward: false,
            left: false,
            right: false,
            up: false,
            down: false,
            follow_mode: false,
            mouse_dx: 0.0,
            mouse_dy: 0.0,
            scroll: 0.0,
            sensitivity,
            speed,
        }
    }

    /// Обработка клавиатуры
    pub fn process_keyboard(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::KeyW => self.forward = pressed,
            KeyCode::KeyS => self.backward = pressed,
            KeyCode::KeyA => self.left = pressed,
            KeyCode::KeyD => self.right = pressed,
            KeyCode::Space => self.up = pressed,
            KeyCode::ShiftLeft => self.down = pressed,
            KeyCode::KeyF if pressed => self.follow_mode = !self.follow_mode,
            _ => {}
        }
    }

    /// Накопить дельту мыши
    pub fn process_mouse(&mut self, dx: f64, dy: f64) {
        self.mouse_dx += dx as f32;
        self.mouse_dy += dy as f32;
    }

    /// Накопить скролл (строки колеса)
    pub fn process_scroll(&mut self, delta: f32) {
        self.scroll += delta;
    }

    /// Применить накопленный ввод к камере.
    /// Порядок фиксирован: мышь, скролл, клавиатура.
    pub fn update(&mut self, camera: &mut CameraState, dt: f32) {
        // === Вращение от мыши ===
        camera.yaw += self.mouse_dx * self.sensitivity;
        camera.pitch -= self.mouse_dy * self.sensitivity;
        camera.pitch = camera.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;

        // === Поле зрения от скролла ===
        camera.fov -= self.scroll;
        camera.fov = camera.fov.clamp(FOV_MIN, FOV_MAX);
        self.scroll = 0.0;

        // === Перемещение ===
        if self.follow_mode {
            return;
        }

        let front = camera.front();
        let right = camera.right();

        let mut move_dir = Vec3::zero();
        if self.forward {
            move_dir += front;
        }
        if self.backward {
            move_dir -= front;
        }
        if self.right {
            move_dir += right;
        }
        if self.left {
            move_dir -= right;
        }
        if self.up {
            move_dir += Vec3::unit_y();
        }
        if self.down {
            move_dir -= Vec3::unit_y();
        }

        if move_dir.mag_sq() > 0.0 {
            camera.position += move_dir.normalized() * self.speed * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraState {
        CameraState::new(1.0, 25.0)
    }

    #[test]
    fn test_pitch_saturates() {
        // +10000 градусов суммарного ввода: pitch упирается в 89 и не выходит
        let mut cam = camera();
        let mut ctl = CameraController::new(1.0, 4.0);

        for _ in 0..100 {
            ctl.process_mouse(0.0, -100.0);
            ctl.update(&mut cam, 0.016);
            assert!(cam.pitch <= PITCH_LIMIT);
        }
        assert_eq!(cam.pitch, PITCH_LIMIT);

        for _ in 0..200 {
            ctl.process_mouse(0.0, 100.0);
            ctl.update(&mut cam, 0.016);
            assert!(cam.pitch >= -PITCH_LIMIT);
        }
        assert_eq!(cam.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn test_fov_clamped() {
        let mut cam = camera();
        let mut ctl = CameraController::new(0.1, 4.0);

        for _ in 0..100 {
            ctl.process_scroll(5.0);
            ctl.update(&mut cam, 0.016);
        }
        assert_eq!(cam.fov, FOV_MIN);

        for _ in 0..100 {
            ctl.process_scroll(-5.0);
            ctl.update(&mut cam, 0.016);
        }
        assert_eq!(cam.fov, FOV_MAX);
    }

    #[test]
    fn test_wasd_moves_along_camera_axes() {
        let mut cam = camera();
        cam.pitch = 0.0; // взгляд строго вдоль -Z
        let mut ctl = CameraController::new(0.1, 2.0);

        ctl.process_keyboard(KeyCode::KeyW, true);
        ctl.update(&mut cam, 0.5);

        // Сдвиг на speed * dt вдоль front
        assert!((cam.position.z - 4.5).abs() < 1e-4);
        assert!((cam.position.x).abs() < 1e-4);
    }

    #[test]
    fn test_follow_mode_suppresses_translation_only() {
        let mut cam = camera();
        let start = cam.position;
        let mut ctl = CameraController::new(0.1, 4.0);

        ctl.process_keyboard(KeyCode::KeyF, true);
        assert!(ctl.follow_mode);

        ctl.process_keyboard(KeyCode::KeyW, true);
        ctl.process_mouse(50.0, 0.0);
        let yaw_before = cam.yaw;
        ctl.update(&mut cam, 0.016);

        // Позиция не изменилась, обзор мышью работает
        assert_eq!(cam.position, start);
        assert!(cam.yaw > yaw_before);

        // Повторное нажатие F возвращает перемещение
        ctl.process_keyboard(KeyCode::KeyF, true);
        assert!(!ctl.follow_mode);
        ctl.update(&mut cam, 0.016);
        assert!(cam.position != start);
    }
}
