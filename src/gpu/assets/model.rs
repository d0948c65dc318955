// ============================================
// Model - Импорт геометрии из glTF
// ============================================
// Меши пекутся в мировые координаты узлов сцены и
// загружаются в вершинные/индексные буферы один раз.
// Провал загрузки не фатален: пустой ассет + ошибка в лог,
// тело просто не рисуется.

use ultraviolet::{Mat4, Vec3, Vec4};
use wgpu::util::DeviceExt;

use super::texture;

/// Ошибки импорта модели
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read scene file: {0}")]
    Gltf(#[from] gltf::Error),

    #[error("primitive of mesh '{0}' has no position data")]
    MissingPositions(String),
}

/// Вершина модели
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl ModelVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ModelVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 12,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: 24,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Один отрисовываемый под-меш с материалом
pub struct SubMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub material_bind_group: wgpu::BindGroup,
}

/// Иммутабельная коллекция под-мешей одной модели
pub struct GeometryAsset {
    pub meshes: Vec<SubMesh>,
}

impl GeometryAsset {
    /// Загрузить модель. Никогда не паникует: на любой ошибке
    /// возвращает пустой ассет и пишет в лог.
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        material_layout: &wgpu::BindGroupLayout,
        path: &str,
    ) -> Self {
        match load_impl(device, queue, material_layout, path) {
            Ok(asset) => {
                log::info!("loaded model '{}': {} sub-meshes", path, asset.meshes.len());
                asset
            }
            Err(e) => {
                log::error!("failed to load model '{}': {}", path, e);
                Self { meshes: Vec::new() }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

fn load_impl(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    material_layout: &wgpu::BindGroupLayout,
    path: &str,
) -> Result<GeometryAsset, AssetError> {
    let (document, buffers, images) = gltf::import(path)?;

    let sampler = texture::material_sampler(device);
    let mut meshes = Vec::new();

    for scene in document.scenes() {
        for node in scene.nodes() {
            collect_node(
                device,
                queue,
                material_layout,
                &sampler,
                &node,
                Mat4::identity(),
                &buffers,
                &images,
                &mut meshes,
            )?;
        }
    }

    Ok(GeometryAsset { meshes })
}

/// Рекурсивный обход узлов с накоплением трансформаций
#[allow(clippy::too_many_arguments)]
fn collect_node(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    material_layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
    meshes: &mut Vec<SubMesh>,
) -> Result<(), AssetError> {
    let world = parent * node_matrix(node);

    if let Some(mesh) = node.mesh() {
        let name = mesh.name().unwrap_or("unnamed").to_string();
        for primitive in mesh.primitives() {
            meshes.push(build_sub_mesh(
                device,
                queue,
                material_layout,
                sampler,
                &name,
                &primitive,
                world,
                buffers,
                images,
            )?);
        }
    }

    for child in node.children() {
        collect_node(
            device,
            queue,
            material_layout,
            sampler,
            &child,
            world,
            buffers,
            images,
            meshes,
        )?;
    }

    Ok(())
}

fn node_matrix(node: &gltf::Node) -> Mat4 {
    let m = node.transform().matrix();
    Mat4::new(
        Vec4::new(m[0][0], m[0][1], m[0][2], m[0][3]),
        Vec4::new(m[1][0], m[1][1], m[1][2], m[1][3]),
        Vec4::new(m[2][0], m[2][1], m[2][2], m[2][3]),
        Vec4::new(m[3][0], m[3][1], m[3][2], m[3][3]),
    )
}

#[allow(clippy::too_many_arguments)]
fn build_sub_mesh(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    material_layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    name: &str,
    primitive: &gltf::Primitive,
    world: Mat4,
    buffers: &[gltf::buffer::Data],
    images: &[gltf::image::Data],
) -> Result<SubMesh, AssetError> {
    let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or_else(|| AssetError::MissingPositions(name.to_string()))?
        .collect();

    let normals: Vec<[f32; 3]> = match reader.read_normals() {
        Some(iter) => iter.collect(),
        None => {
            log::warn!("mesh '{}' has no normals, shading will be flat", name);
            vec![[0.0, 1.0, 0.0]; positions.len()]
        }
    };

    let uvs: Vec<[f32; 2]> = reader
        .read_tex_coords(0)
        .map(|t| t.into_f32().collect())
        .unwrap_or_else(|| vec![[0.0, 0.0]; positions.len()]);

    // Печём трансформацию узла прямо в вершины
    let vertices: Vec<ModelVertex> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let pos = world * Vec4::new(p[0], p[1], p[2], 1.0);
            let n = normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]);
            let nrm = world * Vec4::new(n[0], n[1], n[2], 0.0);
            let nrm = Vec3::new(nrm.x, nrm.y, nrm.z);
            let nrm = if nrm.mag_sq() > 0.0 {
                nrm.normalized()
            } else {
                Vec3::unit_y()
            };
            ModelVertex {
                position: [pos.x, pos.y, pos.z],
                normal: nrm.into(),
                uv: uvs.get(i).copied().unwrap_or([0.0, 0.0]),
            }
        })
        .collect();

    let indices: Vec<u32> = reader
        .read_indices()
        .map(|i| i.into_u32().collect())
        .unwrap_or_else(|| (0..vertices.len() as u32).collect());

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{} Vertices", name)),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{} Indices", name)),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    // Базовый цвет из материала, иначе белая заглушка
    let texture_view = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_texture()
        .and_then(|info| images.get(info.texture().source().index()))
        .map(|image| texture::from_gltf_image(device, queue, name, image))
        .unwrap_or_else(|| texture::fallback_texture(device, queue));

    let material_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("{} Material BG", name)),
        layout: material_layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&texture_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });

    Ok(SubMesh {
        vertex_buffer,
        index_buffer,
        index_count: indices.len() as u32,
        material_bind_group,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_matches_shader_locations() {
        assert_eq!(std::mem::size_of::<ModelVertex>(), 32);
        let desc = ModelVertex::desc();
        assert_eq!(desc.array_stride, 32);
        assert_eq!(desc.attributes.len(), 3);
        assert_eq!(desc.attributes[1].offset, 12);
        assert_eq!(desc.attributes[2].offset, 24);
    }

    #[test]
    fn test_missing_positions_error_names_mesh() {
        let err = AssetError::MissingPositions("earth".into());
        assert!(err.to_string().contains("earth"));
    }
}
