// ============================================
// Resources - Общее состояние демки
// ============================================
// Никаких глобальных переменных: всё состояние камеры и
// ввода живёт здесь и передаётся в системы по ссылке.

use std::sync::Arc;
use std::time::Instant;
use winit::window::Window;

use crate::gpu::camera::{CameraController, CameraState};
use crate::gpu::core::config::DemoConfig;
use crate::gpu::render::Renderer;

/// Все ресурсы демки в одном месте
pub struct DemoResources {
    // Window & Rendering
    pub window: Option<Arc<Window>>,
    pub renderer: Option<Renderer>,

    // Camera & input
    pub camera: CameraState,
    pub controller: CameraController,

    // Config
    pub config: DemoConfig,

    // Timing
    pub start_time: Instant,
    pub last_frame: Instant,

    // Input state
    pub cursor_grabbed: bool,
}
