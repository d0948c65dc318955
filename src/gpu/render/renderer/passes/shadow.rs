use crate::gpu::lighting::FACE_COUNT;
use crate::gpu::render::pipelines::Pipelines;
use crate::gpu::render::shadow::CubeShadowTarget;
use crate::gpu::scene::Scene;

/// Shadow pass — заполнение всех шести граней кубической карты.
/// Матрицы граней уже лежат в предсозданных буферах, выбор по
/// индексу. Тела без флага тени (Солнце) пропускаются целиком.
pub fn render(
    encoder: &mut wgpu::CommandEncoder,
    shadow: &CubeShadowTarget,
    pipelines: &Pipelines,
    scene: &Scene,
) {
    for face in 0..FACE_COUNT {
        let mut shadow_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(&format!("Shadow Pass Face {}", face)),
            color_attachments: &[],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &shadow.face_views[face],
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        shadow_pass.set_pipeline(&pipelines.shadow);
        shadow_pass.set_bind_group(0, &shadow.face_bind_groups[face], &[]);

        for body in scene.shadow_casters() {
            shadow_pass.set_bind_group(1, &body.model_bind_group, &[]);
            for mesh in &body.asset.meshes {
                shadow_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                shadow_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                shadow_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }
    }
}
