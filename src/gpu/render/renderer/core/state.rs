use std::sync::Arc;

use crate::gpu::lighting::PointLight;
use crate::gpu::render::bind_groups::{BindGroupLayouts, CoreBindGroups};
use crate::gpu::render::pipelines::Pipelines;
use crate::gpu::render::shadow::CubeShadowTarget;
use crate::gpu::scene::Scene;

/// Основное состояние рендерера (GPU ресурсы)
pub struct RendererState {
    pub surface: wgpu::Surface<'static>,
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
}

/// Компоненты рендеринга
pub struct RenderComponents {
    pub pipelines: Pipelines,
    pub scene: Scene,
}

/// Ресурсы освещения и теней
pub struct LightingResources {
    pub layouts: BindGroupLayouts,
    pub core_bind_groups: CoreBindGroups,
    pub shadow: CubeShadowTarget,
    pub light: PointLight,
    /// Флаг конфигурации: выключенные тени пропускают depth-проход
    pub shadows_enabled: bool,
}
