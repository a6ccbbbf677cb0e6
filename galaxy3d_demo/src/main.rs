//! Galaxy3D showcase - windowed host
//!
//! Opens a window and feeds its refresh ticks, resizes and input into a
//! `HostLoop` running the bundled demos.
//!
//! Controls:
//! - `1`, `2`, `3`: switch demo (gltf, planets, textures)
//! - left drag: orbit, wheel: zoom
//! - `Escape`: quit
//!
//! Usage: `galaxy3d_demo [example]`, with `GALAXY3D_ASSET_ROOT` and
//! `GALAXY3D_LOG` read from the environment.

use std::sync::Arc;
use std::time::Instant;
use galaxy_3d_showcase::galaxy3d::assets::{FsAssetSource, ThreadedAssetLoader};
use galaxy_3d_showcase::galaxy3d::host::{ExampleRegistry, HostLoop, ShowcaseConfig};
use galaxy_3d_showcase::galaxy3d::log::LogFacadeLogger;
use galaxy_3d_showcase::galaxy3d::render::HeadlessRenderer;
use galaxy_3d_showcase::log::{set_logger, set_min_severity};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

/// Pixels of trackpad scroll per zoom step
const PIXELS_PER_ZOOM_STEP: f64 = 50.0;

struct ShowcaseApp {
    config: ShowcaseConfig,
    window: Option<Arc<Window>>,
    host: Option<HostLoop>,
    last_frame: Instant,
    dragging: bool,
    cursor: Option<(f64, f64)>,
}

impl ShowcaseApp {
    fn new(config: ShowcaseConfig) -> Self {
        Self {
            config,
            window: None,
            host: None,
            last_frame: Instant::now(),
            dragging: false,
            cursor: None,
        }
    }

    fn build_host(&self) -> HostLoop {
        // No GPU backend is bundled; the headless backend records the frames
        let renderer = Box::new(HeadlessRenderer::new());
        let loader = Box::new(ThreadedAssetLoader::new(FsAssetSource::new(self.config.asset_root.clone())));
        HostLoop::new(&self.config, renderer, loader, ExampleRegistry::with_builtin_demos())
    }

    fn switch_to(&mut self, name: &str) {
        let Some(host) = &mut self.host else {
            return;
        };
        if let Err(e) = host.switch_to(name) {
            log::error!("Cannot start example '{}': {}", name, e);
        } else if let Some(window) = &self.window {
            window.set_title(&format!("{} - {}", self.config.title, name));
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if let Some(host) = &mut self.host {
            if let Err(e) = host.tick(delta) {
                log::error!("Frame {} failed: {}", host.frames(), e);
            }
        }
    }

    fn key_pressed(&mut self, event_loop: &ActiveEventLoop, key: &Key) {
        match key {
            Key::Named(NamedKey::Escape) => self.exit(event_loop),
            Key::Character(text) => {
                let index = text.chars().next().and_then(|c| c.to_digit(10)).filter(|d| *d > 0);
                let name = index.and_then(|digit| {
                    self.host.as_ref()?.registry().name_at(digit as usize - 1).map(str::to_string)
                });
                if let Some(name) = name {
                    self.switch_to(&name);
                }
            }
            _ => {}
        }
    }

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(host) = &mut self.host {
            host.shutdown();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for ShowcaseApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width as f64, self.config.height as f64));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let mut host = self.build_host();
        if let Err(e) = host.resize(size.width, size.height) {
            log::warn!("Initial resize failed: {}", e);
        }
        self.host = Some(host);
        self.window = Some(window);

        let initial = self.config.initial_example.clone();
        self.switch_to(&initial);
        self.last_frame = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.exit(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(host) = &mut self.host {
                    if let Err(e) = host.resize(size.width, size.height) {
                        log::error!("Resize to {}x{} failed: {}", size.width, size.height, e);
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed && !event.repeat => {
                self.key_pressed(event_loop, &event.logical_key);
            }
            WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                self.dragging = state == ElementState::Pressed;
            }
            WindowEvent::CursorMoved { position, .. } => {
                if let (true, Some((x, y)), Some(host)) = (self.dragging, self.cursor, &mut self.host) {
                    host.orbit((position.x - x) as f32, (position.y - y) as f32);
                }
                self.cursor = Some((position.x, position.y));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let steps = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_ZOOM_STEP) as f32,
                };
                if let Some(host) = &mut self.host {
                    host.zoom(steps);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<(), EventLoopError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ShowcaseConfig::from_env_and_args();
    set_logger(LogFacadeLogger);
    set_min_severity(config.min_severity);
    log::info!("Starting '{}' with assets from {}", config.initial_example, config.asset_root.display());

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ShowcaseApp::new(config);
    event_loop.run_app(&mut app)
}
