// ============================================
// App - Главный обработчик приложения
// ============================================

use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::gpu::core::DemoResources;
use crate::gpu::systems::{InitSystem, InputAction, InputSystem, RenderSystem, UpdateSystem};

/// Главное приложение
pub struct App {
    resources: DemoResources,
}

impl App {
    pub fn new() -> Self {
        Self {
            resources: InitSystem::create_resources(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resources.window.is_none() {
            let config = &self.resources.config;
            let window_attrs = Window::default_attributes()
                .with_title("Orrery - Earth / Sun / Moon (F to toggle follow camera)")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    config.window_width,
                    config.window_height,
                ));

            let window = Arc::new(event_loop.create_window(window_attrs).unwrap());

            InitSystem::init_rendering(&mut self.resources, window);

            // Захватываем курсор при старте свободной камеры
            if self.resources.config.free_camera {
                InputSystem::grab_cursor(&mut self.resources, true);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.resources.renderer {
                    renderer.resize(physical_size);
                    self.resources
                        .camera
                        .resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(keycode),
                        state,
                        ..
                    },
                ..
            } => {
                if let Some(action) = InputSystem::process_keyboard(&mut self.resources, keycode, state)
                {
                    match action {
                        InputAction::Exit => event_loop.exit(),
                        InputAction::FollowToggle => {
                            log::info!(
                                "follow camera: {}",
                                if self.resources.controller.follow_mode {
                                    "on"
                                } else {
                                    "off"
                                }
                            );
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = (now - self.resources.last_frame).as_secs_f32();
                self.resources.last_frame = now;
                let time = (now - self.resources.start_time).as_secs_f32();

                // Update (мышь -> клавиатура -> рендер)
                UpdateSystem::update(&mut self.resources, dt);

                // Render
                RenderSystem::render(&mut self.resources, time, event_loop);
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        match event {
            DeviceEvent::MouseMotion { delta } => {
                InputSystem::process_mouse_motion(&mut self.resources, delta);
            }

            DeviceEvent::MouseWheel { delta } => {
                InputSystem::process_mouse_wheel(&mut self.resources, delta);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.resources.window {
            window.request_redraw();
        }
    }
}

/// Запуск демки
pub fn run() {
    env_logger::init();

    println!("=== Controls ===");
    println!("WASD - Move");
    println!("Mouse - Look around");
    println!("Space - Fly up");
    println!("Shift - Fly down");
    println!("Scroll - Zoom (FOV)");
    println!("F - Toggle follow camera");
    println!("Escape - Exit");
    println!("================");

    // Провал инициализации платформы фатален: выходим с ненулевым кодом
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop terminated with error: {}", e);
        std::process::exit(1);
    }
}
