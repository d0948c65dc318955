// ============================================
// Input System - Обработка ввода
// ============================================

use winit::{
    event::ElementState,
    keyboard::KeyCode,
    window::CursorGrabMode,
};

use crate::gpu::core::DemoResources;

/// Система обработки ввода
pub struct InputSystem;

impl InputSystem {
    /// Обработка клавиатурного ввода
    pub fn process_keyboard(
        resources: &mut DemoResources,
        keycode: KeyCode,
        state: ElementState,
    ) -> Option<InputAction> {
        let pressed = state == ElementState::Pressed;

        match keycode {
            KeyCode::Escape if pressed => Some(InputAction::Exit),

            KeyCode::KeyF if pressed => {
                if resources.config.free_camera {
                    resources.controller.process_keyboard(keycode, pressed);
                    return Some(InputAction::FollowToggle);
                }
                None
            }

            _ => {
                if resources.config.free_camera {
                    resources.controller.process_keyboard(keycode, pressed);
                }
                None
            }
        }
    }

    /// Обработка движения мыши
    pub fn process_mouse_motion(resources: &mut DemoResources, delta: (f64, f64)) {
        if resources.cursor_grabbed && resources.config.free_camera {
            resources.controller.process_mouse(delta.0, delta.1);
        }
    }

    /// Обработка колеса мыши (зум через FOV)
    pub fn process_mouse_wheel(resources: &mut DemoResources, delta: winit::event::MouseScrollDelta) {
        if !resources.config.free_camera {
            return;
        }

        let scroll = match delta {
            winit::event::MouseScrollDelta::LineDelta(_, y) => y,
            winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
        };
        resources.controller.process_scroll(scroll);
    }

    /// Захват/освобождение курсора
    pub fn grab_cursor(resources: &mut DemoResources, grab: bool) {
        if let Some(window) = &resources.window {
            resources.cursor_grabbed = grab;
            if grab {
                let _ = window
                    .set_cursor_grab(CursorGrabMode::Confined)
                    .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
                window.set_cursor_visible(false);
            } else {
                let _ = window.set_cursor_grab(CursorGrabMode::None);
                window.set_cursor_visible(true);
            }
        }
    }
}

/// Действия, которые обрабатывает приложение
#[derive(Debug, Clone, Copy)]
pub enum InputAction {
    Exit,
    FollowToggle,
}
