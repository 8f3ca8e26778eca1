//! Cannon Range
//!
//! Run with: `cargo run --bin cannon_range [config.json]`
//!
//! Controls:
//! - C (hold): Rotate cannon left
//! - P (hold): Rotate cannon right
//! - Space: Fire
//! - F / S: Increase / decrease launch speed
//! - ESC or Q: Quit and print the score

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use cannon_range_engine::game::{
    GameEvent, GameState, IntervalTimer, MeshRegistry, RangeConfig, map_key_to_event,
    map_text_to_event, submit_frame,
};
use cannon_range_engine::render::{FlatRenderer, GpuContextConfig, RenderResult, RendererConfig};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// GPU-side resources, created once the window exists.
struct Graphics {
    window: Arc<Window>,
    renderer: FlatRenderer,
    meshes: MeshRegistry,
}

struct CannonRangeApp {
    config: RangeConfig,
    state: GameState,
    graphics: Option<Graphics>,
    /// Events received since the last redraw
    pending: Vec<GameEvent>,
    status_timer: IntervalTimer,
    failed: bool,
}

impl CannonRangeApp {
    fn new(config: RangeConfig) -> Self {
        let state = GameState::new(config.clone(), config.window.width, config.window.height);
        let status_timer = IntervalTimer::from_secs(config.status_interval_secs, Instant::now());
        Self {
            config,
            state,
            graphics: None,
            pending: Vec::new(),
            status_timer,
            failed: false,
        }
    }

    fn initialize(&mut self, window: Arc<Window>) -> RenderResult<()> {
        let renderer_config = RendererConfig {
            gpu: GpuContextConfig {
                vsync: self.config.window.vsync,
                ..GpuContextConfig::default()
            },
            clear_color: self.config.window.clear_color,
        };
        let mut renderer = FlatRenderer::new(Arc::clone(&window), &renderer_config)?;
        let meshes = MeshRegistry::upload(&mut renderer, &self.config)?;

        let (width, height) = renderer.dimensions();
        self.state.resize(width, height);

        self.graphics = Some(Graphics {
            window,
            renderer,
            meshes,
        });
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: &dyn std::error::Error) {
        tracing::error!(error = %error, "[App] fatal error");
        self.failed = true;
        event_loop.exit();
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        if let PhysicalKey::Code(key) = event.physical_key
            && let Some(game_event) = map_key_to_event(key, event.state == ElementState::Pressed)
        {
            self.pending.push(game_event);
        }
        if event.state == ElementState::Pressed
            && let Some(text) = event.text.as_ref()
            && let Some(game_event) = map_text_to_event(text)
        {
            self.pending.push(game_event);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let events = std::mem::take(&mut self.pending);
        let frame = self.state.update(&events);
        if frame.quit {
            event_loop.exit();
            return;
        }

        if frame.report.hit_count() > 0 && self.state.targets().all_hit() {
            tracing::info!(score = self.state.score(), "[App] all targets down");
        }

        let submitted = match self.graphics.as_mut() {
            Some(graphics) => submit_frame(&mut graphics.renderer, &graphics.meshes, &frame.commands),
            None => Ok(()),
        };
        if let Err(error) = submitted {
            self.fail(event_loop, &error);
            return;
        }

        if self.status_timer.tick(Instant::now()) {
            let ball = self.state.projectiles().projectile();
            tracing::trace!(
                tick = self.state.ticks(),
                score = self.state.score(),
                angle = self.state.aiming().angle_degrees(),
                speed = self.state.aiming().speed(),
                launched = ball.launched,
                x = ball.position.x,
                y = ball.position.y,
                targets_left = self.state.targets().remaining(),
                "[App] status"
            );
        }
    }
}

impl ApplicationHandler for CannonRangeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(error) => {
                self.fail(event_loop, &error);
                return;
            }
        };
        if let Err(error) = self.initialize(window) {
            self.fail(event_loop, &error);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event),
            WindowEvent::Resized(new_size) => {
                if let Some(graphics) = self.graphics.as_mut() {
                    graphics.renderer.resize(new_size.width, new_size.height);
                }
                self.state.resize(new_size.width, new_size.height);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let config_path = std::env::args().nth(1);
    let config = match RangeConfig::load_or_default(config_path.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(error = %error, "[App] failed to load config");
            return ExitCode::FAILURE;
        }
    };

    println!("===========================================");
    println!("   Cannon Range");
    println!("===========================================");
    println!();
    println!("Controls: C/P Rotate, Space Fire, F/S Speed +/-, ESC or Q: Quit");
    println!();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(error) => {
            tracing::error!(error = %error, "[App] failed to create event loop");
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = CannonRangeApp::new(config);
    if let Err(error) = event_loop.run_app(&mut app) {
        tracing::error!(error = %error, "[App] event loop error");
        return ExitCode::FAILURE;
    }
    if app.failed {
        return ExitCode::FAILURE;
    }

    println!("Your score is {}", app.state.score());
    ExitCode::SUCCESS
}
