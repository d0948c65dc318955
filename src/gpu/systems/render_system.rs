// ============================================
// Render System - Система рендеринга
// ============================================

use winit::event_loop::ActiveEventLoop;

use crate::gpu::core::DemoResources;

/// Система рендеринга
pub struct RenderSystem;

impl RenderSystem {
    /// Основной рендер кадра. Неудавшийся кадр — не повод
    /// останавливаться: следующий просто рисуется заново.
    pub fn render(resources: &mut DemoResources, time: f32, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut resources.renderer else {
            return;
        };

        renderer.update(&resources.camera, time);

        match renderer.render() {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let size = renderer.size();
                renderer.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}
