// ============================================
// Init System - Инициализация демки
// ============================================

use std::sync::Arc;
use std::time::Instant;
use winit::window::Window;

use crate::gpu::camera::{CameraController, CameraState};
use crate::gpu::core::{DemoConfig, DemoResources};
use crate::gpu::lighting::PointLight;
use crate::gpu::render::Renderer;

/// Система инициализации
pub struct InitSystem;

impl InitSystem {
    /// Создать начальные ресурсы демки
    pub fn create_resources() -> DemoResources {
        let config = DemoConfig::load();

        let aspect = config.window_width as f32 / config.window_height as f32;
        // Дальняя плоскость камеры совпадает с far теневой карты
        let camera = CameraState::new(aspect, PointLight::new().far);
        let controller = CameraController::new(config.mouse_sensitivity, config.move_speed);

        let now = Instant::now();
        DemoResources {
            window: None,
            renderer: None,
            camera,
            controller,
            config,
            start_time: now,
            last_frame: now,
            cursor_grabbed: false,
        }
    }

    /// Создать рендерер для готового окна
    pub fn init_rendering(resources: &mut DemoResources, window: Arc<Window>) {
        let renderer = pollster::block_on(Renderer::new(Arc::clone(&window), &resources.config));
        resources.renderer = Some(renderer);
        resources.window = Some(window);
    }
}
