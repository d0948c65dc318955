use std::sync::Arc;

use crate::gpu::assets::GeometryAsset;
use crate::gpu::core::config::{self, DemoConfig};
use crate::gpu::lighting::PointLight;
use crate::gpu::render::bind_groups::{BindGroupLayouts, CoreBindGroups};
use crate::gpu::render::pipelines::Pipelines;
use crate::gpu::render::shadow::CubeShadowTarget;
use crate::gpu::scene::{Body, BodyKind, Scene, SceneAnimator, SCENE_RADIUS};

use super::state::{LightingResources, RenderComponents};

/// Инициализация GPU устройства и surface.
/// Провал здесь фатален: ни одного ресурса пайплайна ещё нет.
pub async fn init_gpu(
    window: Arc<winit::window::Window>,
) -> (
    wgpu::Surface<'static>,
    Arc<wgpu::Device>,
    Arc<wgpu::Queue>,
    wgpu::SurfaceConfiguration,
    winit::dpi::PhysicalSize<u32>,
) {
    let size = window.inner_size();
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let surface = instance
        .create_surface(window)
        .expect("failed to create window surface");
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .expect("no compatible GPU adapter");

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("GPU Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: wgpu::Trace::Off,
        })
        .await
        .expect("failed to create GPU device");

    let device = Arc::new(device);
    let queue = Arc::new(queue);

    let surface_caps = surface.get_capabilities(&adapter);
    let surface_format = surface_caps
        .formats
        .iter()
        .find(|f| f.is_srgb())
        .copied()
        .unwrap_or(surface_caps.formats[0]);

    let config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format: surface_format,
        width: size.width,
        height: size.height,
        present_mode: wgpu::PresentMode::AutoVsync,
        alpha_mode: surface_caps.alpha_modes[0],
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    };
    surface.configure(&device, &config);

    (surface, device, queue, config, size)
}

/// Инициализация компонентов рендеринга и сцены
pub fn init_components(
    device: &Arc<wgpu::Device>,
    queue: &Arc<wgpu::Queue>,
    surface_config: &wgpu::SurfaceConfiguration,
    demo_config: &DemoConfig,
) -> (RenderComponents, LightingResources) {
    // Bind group layouts — все "ручки" параметров резолвятся здесь,
    // по именам в кадре больше ничего не ищется
    let layouts = BindGroupLayouts::new(device);
    let core_bind_groups = CoreBindGroups::new(device, &layouts);

    // Кубическая карта теней: фиксированное квадратное разрешение,
    // от размера окна не зависит
    let shadow = CubeShadowTarget::new(
        device,
        &layouts.shadow_cube,
        &layouts.shadow_face,
        demo_config.shadow_resolution,
    );
    shadow.validate();

    let pipelines = Pipelines::new(device, surface_config.format, &layouts);

    let light = PointLight::new();
    light.validate(SCENE_RADIUS);

    // Модели: провал загрузки не фатален, тело просто невидимо
    let sun = GeometryAsset::load(device, queue, &layouts.material, config::SUN_MODEL);
    let earth = GeometryAsset::load(device, queue, &layouts.material, config::EARTH_MODEL);
    let moon = GeometryAsset::load(device, queue, &layouts.material, config::MOON_MODEL);

    for (name, asset) in [("sun", &sun), ("earth", &earth), ("moon", &moon)] {
        if asset.is_empty() {
            log::warn!("model '{}' is empty, body will be invisible", name);
        }
    }

    let bodies = vec![
        // Солнце — заглушка источника, тень не отбрасывает
        Body::new(device, &layouts.model, BodyKind::Sun, sun, false, true),
        Body::new(device, &layouts.model, BodyKind::Earth, earth, true, false),
        Body::new(device, &layouts.model, BodyKind::Moon, moon, true, false),
    ];

    let scene = Scene::new(SceneAnimator::new(demo_config.time_scale), bodies);

    let components = RenderComponents { pipelines, scene };

    let lighting = LightingResources {
        layouts,
        core_bind_groups,
        shadow,
        light,
        shadows_enabled: demo_config.enable_shadows,
    };

    (components, lighting)
}
