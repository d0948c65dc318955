use crate::gpu::camera::CameraState;
use crate::gpu::render::uniforms::{Globals, PointLightUniform};

use crate::gpu::render::renderer::core::{LightingResources, RenderComponents};

/// Обновление GPU-состояния каждый кадр: камера, свет,
/// матрицы граней и мировые матрицы тел
pub fn update(
    queue: &wgpu::Queue,
    camera: &CameraState,
    elapsed: f32,
    components: &mut RenderComponents,
    lighting: &mut LightingResources,
) {
    // Globals
    let mut globals = Globals::new();
    globals.update(camera);
    queue.write_buffer(
        &lighting.core_bind_groups.globals_buffer,
        0,
        bytemuck::cast_slice(&[globals]),
    );

    // Light
    let light = PointLightUniform::from_light(&lighting.light, lighting.shadows_enabled);
    queue.write_buffer(
        &lighting.core_bind_groups.light_buffer,
        0,
        bytemuck::cast_slice(&[light]),
    );

    // Матрицы граней кубической карты
    lighting.shadow.update_faces(queue, &lighting.light);

    // Мировые матрицы тел из аниматора
    components.scene.update(queue, elapsed);
}
