use crate::gpu::assets::ModelVertex;

use super::bind_groups::BindGroupLayouts;

pub struct Pipelines {
    /// Освещённые тела (Земля, Луна)
    pub body: wgpu::RenderPipeline,
    /// Заглушка источника света (Солнце)
    pub emissive: wgpu::RenderPipeline,
    /// Depth-проход в грань кубической карты
    pub shadow: wgpu::RenderPipeline,
}

impl Pipelines {
    /// Создание шейдеров и пайплайнов под error scope:
    /// ошибка компиляции/линковки логируется, рендер
    /// продолжает жить с деградировавшим пайплайном.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        layouts: &BindGroupLayouts,
    ) -> Self {
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipelines = Self::build(device, surface_format, layouts);
        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            log::error!("pipeline creation failed, rendering will be degraded: {}", error);
        }
        pipelines
    }

    fn build(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        layouts: &BindGroupLayouts,
    ) -> Self {
        let body_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Body Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/body.wgsl").into()),
        });

        let emissive_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Emissive Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/emissive.wgsl").into()),
        });

        let shadow_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shadow Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../lighting/shadow.wgsl").into()),
        });

        let body_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Body Layout"),
            bind_group_layouts: &[
                &layouts.frame,
                &layouts.shadow_cube,
                &layouts.model,
                &layouts.material,
            ],
            push_constant_ranges: &[],
        });

        let emissive_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Emissive Layout"),
            bind_group_layouts: &[&layouts.frame, &layouts.model, &layouts.material],
            push_constant_ranges: &[],
        });

        let shadow_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shadow PL Layout"),
            bind_group_layouts: &[&layouts.shadow_face, &layouts.model],
            push_constant_ranges: &[],
        });

        let body = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Body Pipeline"),
            layout: Some(&body_layout),
            vertex: wgpu::VertexState {
                module: &body_shader,
                entry_point: Some("vs_main"),
                buffers: &[ModelVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &body_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let emissive = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Emissive Pipeline"),
            layout: Some(&emissive_layout),
            vertex: wgpu::VertexState {
                module: &emissive_shader,
                entry_point: Some("vs_main"),
                buffers: &[ModelVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &emissive_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        // Цветовых выходов нет — проход пишет только глубину.
        // Fragment-стадия нужна: глубина — линейная дистанция.
        let shadow = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shadow Pipeline"),
            layout: Some(&shadow_layout),
            vertex: wgpu::VertexState {
                module: &shadow_shader,
                entry_point: Some("vs_main"),
                buffers: &[ModelVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shadow_shader,
                entry_point: Some("fs_main"),
                targets: &[],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        Self {
            body,
            emissive,
            shadow,
        }
    }
}
