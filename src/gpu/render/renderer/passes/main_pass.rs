use crate::gpu::render::bind_groups::CoreBindGroups;
use crate::gpu::render::pipelines::Pipelines;
use crate::gpu::render::shadow::CubeShadowTarget;
use crate::gpu::scene::Scene;

/// Main pass — освещённый рендер сцены в окно
pub fn render(
    encoder: &mut wgpu::CommandEncoder,
    view: &wgpu::TextureView,
    depth_texture: &wgpu::TextureView,
    pipelines: &Pipelines,
    core_bind_groups: &CoreBindGroups,
    shadow: &CubeShadowTarget,
    scene: &Scene,
) {
    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Main Pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: wgpu::Operations {
                // Чёрный космос
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
            view: depth_texture,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }),
        timestamp_writes: None,
        occlusion_query_set: None,
    });

    // Сначала заглушка источника: только MVP, без освещения
    render_pass.set_pipeline(&pipelines.emissive);
    render_pass.set_bind_group(0, &core_bind_groups.frame_bind_group, &[]);
    for body in scene.bodies.iter().filter(|b| b.emissive) {
        render_pass.set_bind_group(1, &body.model_bind_group, &[]);
        for mesh in &body.asset.meshes {
            render_pass.set_bind_group(2, &mesh.material_bind_group, &[]);
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    // Освещённые тела с кубической картой теней
    render_pass.set_pipeline(&pipelines.body);
    render_pass.set_bind_group(0, &core_bind_groups.frame_bind_group, &[]);
    render_pass.set_bind_group(1, &shadow.sample_bind_group, &[]);
    for body in scene.bodies.iter().filter(|b| !b.emissive) {
        render_pass.set_bind_group(2, &body.model_bind_group, &[]);
        for mesh in &body.asset.meshes {
            render_pass.set_bind_group(3, &mesh.material_bind_group, &[]);
            render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}
