// ============================================
// Body - Рендерящееся небесное тело
// ============================================
// Связка: геометрия + мировая матрица на кадр + флаги.
// Солнце — эмиссивная заглушка источника света, в теневой
// проход не попадает вовсе (пропуск по флагу, не отсечение).

use wgpu::util::DeviceExt;

use crate::gpu::assets::GeometryAsset;
use crate::gpu::render::uniforms::ModelUniform;

use super::animator::{BodyKind, SceneAnimator};

/// Объект сцены
pub struct Body {
    pub kind: BodyKind,

    /// Геометрия (иммутабельна после загрузки)
    pub asset: GeometryAsset,

    /// Участвует ли в теневом проходе
    pub casts_shadow: bool,

    /// Рисуется без освещения (заглушка источника)
    pub emissive: bool,

    /// Мировая матрица на GPU
    pub model_buffer: wgpu::Buffer,
    pub model_bind_group: wgpu::BindGroup,
}

impl Body {
    pub fn new(
        device: &wgpu::Device,
        model_layout: &wgpu::BindGroupLayout,
        kind: BodyKind,
        asset: GeometryAsset,
        casts_shadow: bool,
        emissive: bool,
    ) -> Self {
        let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Body Model Buffer"),
            contents: bytemuck::cast_slice(&[ModelUniform::default()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let model_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Body Model BG"),
            layout: model_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: model_buffer.as_entire_binding(),
            }],
        });

        Self {
            kind,
            asset,
            casts_shadow,
            emissive,
            model_buffer,
            model_bind_group,
        }
    }
}

/// Сцена: владеет всеми телами и их аниматором
pub struct Scene {
    pub animator: SceneAnimator,
    pub bodies: Vec<Body>,
}

impl Scene {
    pub fn new(animator: SceneAnimator, bodies: Vec<Body>) -> Self {
        Self { animator, bodies }
    }

    /// Записать мировые матрицы всех тел для момента `elapsed`
    pub fn update(&self, queue: &wgpu::Queue, elapsed: f32) {
        for body in &self.bodies {
            let model: [[f32; 4]; 4] = self.animator.transform(body.kind, elapsed).into();
            queue.write_buffer(
                &body.model_buffer,
                0,
                bytemuck::cast_slice(&[ModelUniform { model }]),
            );
        }
    }

    /// Тела, отбрасывающие тень
    pub fn shadow_casters(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().filter(|b| b.casts_shadow)
    }
}
