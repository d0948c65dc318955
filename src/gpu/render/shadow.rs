use wgpu::util::DeviceExt;

use crate::gpu::lighting::{face_view_projections, PointLight, FACE_COUNT};

use super::uniforms::FaceUniform;

/// Кубическая карта глубины для всенаправленных теней.
/// Выделяется один раз, каждый кадр только перезаписывается.
/// Шесть буферов граней создаются заранее и выбираются по
/// индексу — никаких пересозданий ресурсов в кадре.
pub struct CubeShadowTarget {
    pub texture: wgpu::Texture,
    /// View каждой грани для рендеринга
    pub face_views: Vec<wgpu::TextureView>,
    /// View всего куба для сэмплирования
    pub cube_view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    /// Bind group для чтения в освещённом проходе
    pub sample_bind_group: wgpu::BindGroup,
    /// Uniform-буферы и bind group'ы граней для depth-прохода
    pub face_buffers: Vec<wgpu::Buffer>,
    pub face_bind_groups: Vec<wgpu::BindGroup>,
    /// Сторона квадратной грани в пикселях
    pub resolution: u32,
}

impl CubeShadowTarget {
    pub fn new(
        device: &wgpu::Device,
        shadow_cube_layout: &wgpu::BindGroupLayout,
        shadow_face_layout: &wgpu::BindGroupLayout,
        resolution: u32,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Shadow Cube Map"),
            size: wgpu::Extent3d {
                width: resolution,
                height: resolution,
                depth_or_array_layers: FACE_COUNT as u32,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });

        let face_views: Vec<_> = (0..FACE_COUNT as u32)
            .map(|i| {
                texture.create_view(&wgpu::TextureViewDescriptor {
                    label: Some(&format!("Shadow Face {}", i)),
                    format: Some(wgpu::TextureFormat::Depth32Float),
                    dimension: Some(wgpu::TextureViewDimension::D2),
                    aspect: wgpu::TextureAspect::DepthOnly,
                    base_array_layer: i,
                    array_layer_count: Some(1),
                    ..Default::default()
                })
            })
            .collect();

        let cube_view = texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("Shadow Cube View"),
            format: Some(wgpu::TextureFormat::Depth32Float),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            aspect: wgpu::TextureAspect::DepthOnly,
            base_array_layer: 0,
            array_layer_count: Some(FACE_COUNT as u32),
            ..Default::default()
        });

        // Сравнение по линейной дистанции делает шейдер,
        // поэтому обычный nearest-сэмплер
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Shadow Cube Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let sample_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Shadow Cube BG"),
            layout: shadow_cube_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&cube_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let face_buffers: Vec<_> = (0..FACE_COUNT)
            .map(|i| {
                device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("Shadow Face Uniform {}", i)),
                    contents: bytemuck::cast_slice(&[FaceUniform::default()]),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                })
            })
            .collect();

        let face_bind_groups: Vec<_> = face_buffers
            .iter()
            .enumerate()
            .map(|(i, buf)| {
                device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(&format!("Shadow Face BG {}", i)),
                    layout: shadow_face_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buf.as_entire_binding(),
                    }],
                })
            })
            .collect();

        log::info!(
            "shadow cube map: {} faces @ {}x{}",
            FACE_COUNT,
            resolution,
            resolution
        );

        Self {
            texture,
            face_views,
            cube_view,
            sampler,
            sample_bind_group,
            face_buffers,
            face_bind_groups,
            resolution,
        }
    }

    /// Одноразовая проверка конфигурации цели. Нарушение — это
    /// видимо неправильные тени, но не падение.
    pub fn validate(&self) -> bool {
        let size = self.texture.size();
        let mut ok = true;

        if size.width != size.height {
            log::error!(
                "shadow cube faces are not square: {}x{}",
                size.width,
                size.height
            );
            ok = false;
        }
        if size.depth_or_array_layers != FACE_COUNT as u32 {
            log::error!(
                "shadow cube has {} layers, expected {}",
                size.depth_or_array_layers,
                FACE_COUNT
            );
            ok = false;
        }

        ok
    }

    /// Записать view-projection всех шести граней для текущего света
    pub fn update_faces(&self, queue: &wgpu::Queue, light: &PointLight) {
        let matrices = face_view_projections(light.position, light.near, light.far);
        for (i, matrix) in matrices.iter().enumerate() {
            let uniform = FaceUniform {
                view_proj: (*matrix).into(),
                light_pos: light.position.into(),
                far_plane: light.far,
            };
            queue.write_buffer(&self.face_buffers[i], 0, bytemuck::cast_slice(&[uniform]));
        }
    }
}
