mod core;
mod passes;
mod systems;

use std::sync::Arc;

use crate::gpu::camera::CameraState;
use crate::gpu::core::config::DemoConfig;
use crate::gpu::render::depth::create_depth_texture;

use self::core::{LightingResources, RenderComponents, RendererState};

pub struct Renderer {
    state: RendererState,
    components: RenderComponents,
    lighting: LightingResources,
    depth_texture: wgpu::TextureView,
}

impl Renderer {
    pub async fn new(window: Arc<winit::window::Window>, demo_config: &DemoConfig) -> Self {
        let (surface, device, queue, config, size) = core::init_gpu(window).await;
        let (components, lighting) = core::init_components(&device, &queue, &config, demo_config);
        let depth_texture = create_depth_texture(&device, &config);

        Self {
            state: RendererState {
                surface,
                device,
                queue,
                config,
                size,
            },
            components,
            lighting,
            depth_texture,
        }
    }

    /// Ресайз окна: surface и оконный depth-буфер.
    /// Теневая кубическая карта фиксированного размера не трогается.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.state.size = new_size;
            self.state.config.width = new_size.width;
            self.state.config.height = new_size.height;
            self.state
                .surface
                .configure(&self.state.device, &self.state.config);
            self.depth_texture = create_depth_texture(&self.state.device, &self.state.config);
        }
    }

    /// Обновление всех uniform-буферов для момента `elapsed`
    pub fn update(&mut self, camera: &CameraState, elapsed: f32) {
        systems::frame::update(
            &self.state.queue,
            camera,
            elapsed,
            &mut self.components,
            &mut self.lighting,
        );
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.state.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .state
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        // Shadow pass: шесть граней кубической карты
        if self.lighting.shadows_enabled {
            passes::shadow::render(
                &mut encoder,
                &self.lighting.shadow,
                &self.components.pipelines,
                &self.components.scene,
            );
        }

        // Main pass: освещённая сцена в окно
        passes::main_pass::render(
            &mut encoder,
            &view,
            &self.depth_texture,
            &self.components.pipelines,
            &self.lighting.core_bind_groups,
            &self.lighting.shadow,
            &self.components.scene,
        );

        self.state.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    pub fn size(&self) -> winit::dpi::PhysicalSize<u32> {
        self.state.size
    }
}
