// ============================================
// Update System - Обновление логики кадра
// ============================================

use crate::gpu::core::DemoResources;

/// Система обновления
pub struct UpdateSystem;

impl UpdateSystem {
    /// Применить накопленный ввод к камере.
    /// Контроллер внутри держит порядок: мышь -> клавиатура.
    pub fn update(resources: &mut DemoResources, dt: f32) {
        if resources.config.free_camera {
            resources
                .controller
                .update(&mut resources.camera, dt);
        }
    }
}
