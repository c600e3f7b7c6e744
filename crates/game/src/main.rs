//! Neutrality - an interactive slideshow on how Switzerland stayed out of World War II.

mod config;
mod content;
mod events;
mod layout;
mod render;
mod shell;

use anyhow::Result;
use audio::BackgroundMusic;
use engine_core::Time;
use input::InputState;
use renderer::Renderer;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use config::AppConfig;
use shell::{Effect, Shell};

/// Everything alive while the window is open.
pub struct Slideshow {
    renderer: Renderer,
    time: Time,
    input: InputState,
    config: AppConfig,
    shell: Shell,
    music: BackgroundMusic,
    running: bool,
}

impl Slideshow {
    async fn new(window: Arc<Window>, config: AppConfig) -> Result<Self> {
        let renderer = Renderer::new(window, config.vsync).await?;
        let music = BackgroundMusic::new(config.music_path.as_deref(), config.music_volume);
        let shell = Shell::new(&config);
        log::info!(
            "Slideshow ready: {:?} variant, {} stages",
            config.variant,
            config.variant.stages().len()
        );

        Ok(Self {
            renderer,
            time: Time::new(),
            input: InputState::new(),
            config,
            shell,
            music,
            running: true,
        })
    }

    /// One frame of logic: commit transitions, apply this frame's input,
    /// advance the minigame.
    fn update(&mut self) {
        self.time.update();
        let now = self.time.now_millis();

        self.shell.poll(now);

        if self.input.is_quit_pressed() {
            self.shutdown();
            return;
        }
        if self.input.is_music_toggle_pressed() {
            self.apply_effect(Effect::ToggleMusic);
        }
        if self.input.is_next_pressed() {
            self.shell.next(now);
        }
        if self.input.is_previous_pressed() {
            self.shell.previous(now);
        }
        if self.input.is_confirm_pressed() {
            self.shell.confirm();
        }

        if !self.input.clicks().is_empty() {
            let (sw, sh) = self.renderer.dimensions();
            let layout = self.shell.layout(sw as f32, sh as f32);
            let clicks = self.input.clicks().to_vec();
            for point in clicks {
                if let Some(effect) = self.shell.click(&layout, point, now) {
                    self.apply_effect(effect);
                }
            }
        }

        self.shell.advance(now);
        self.input.end_frame();
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ToggleMusic => {
                let playing = self.music.toggle();
                log::info!("Music {}", if playing { "playing" } else { "paused" });
            }
        }
    }

    /// Cancel pending timers, drop the minigame and silence the music.
    fn shutdown(&mut self) {
        if !self.running {
            return;
        }
        log::info!("Shutting down");
        self.shell.teardown();
        self.music.stop();
        self.running = false;
    }

    fn render(&mut self) -> Result<()> {
        render::run(self)
    }
}

/// Application handler for winit.
struct App {
    state: Option<Slideshow>,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let config = AppConfig::load();
        let window_attrs = Window::default_attributes()
            .with_title("Switzerland in World War II")
            .with_inner_size(winit::dpi::LogicalSize::new(config.window_width, config.window_height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(Slideshow::new(window.clone(), config)) {
            Ok(s) => {
                self.state = Some(s);
                window.request_redraw();
            }
            Err(e) => {
                log::error!("Failed to initialize slideshow: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if state.handle_window_event(event) || !state.running {
                event_loop.exit();
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            state.shutdown();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Switzerland in World War II");
    println!("  Click          - buttons, toggles, planes");
    println!("  Left / Right   - previous / next stage");
    println!("  Enter / Space  - start the airspace game");
    println!("  M              - music on / off");
    println!("  Escape         - quit");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    Ok(())
}
