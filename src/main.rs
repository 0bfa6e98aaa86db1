use std::fs;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use carousel::animation::{AnimationContext, ControlFlags};
use carousel::camera::Camera;
use carousel::cli::Cli;
use carousel::config::{
    CarouselConfig, FPS_UPDATE_INTERVAL, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, SKY_COLOR,
};
use carousel::core::{Button, FpsCounter, HostClock, SurfaceRenderer, WinitController};
use carousel::headless;
use carousel::render::{Canvas, Rasterizer, RenderMode};
use carousel::scene::{Carousel, Catalog};

const WINDOW_TITLE: &str = "Carousel";

/// Window plus the surface it presents to
struct Display {
    window: Arc<Window>,
    surface: SurfaceRenderer,
}

struct App {
    display: Option<Display>,
    context: AnimationContext,
    controller: WinitController,
    camera: Camera,
    canvas: Canvas,
    rasterizer: Rasterizer,
    clock: HostClock,
    fps: FpsCounter,
}

impl App {
    fn new(context: AnimationContext, mode: RenderMode) -> Self {
        Self {
            display: None,
            context,
            controller: WinitController::new(),
            camera: Camera::new(),
            canvas: Canvas::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT),
            rasterizer: Rasterizer::new(SKY_COLOR, mode),
            clock: HostClock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn handle_button(&mut self, event_loop: &ActiveEventLoop, button: Button) {
        match button {
            Button::Escape => event_loop.exit(),
            Button::Key7 => {
                self.rasterizer.mode = self.rasterizer.mode.toggled();
                log::info!("Render mode: {:?}", self.rasterizer.mode);
            }
            _ => {}
        }
    }

    fn redraw(&mut self) {
        let now = self.clock.now();
        self.context
            .set_flags(ControlFlags::from_controller(&self.controller));

        let Self {
            context,
            controller,
            camera,
            canvas,
            rasterizer,
            ..
        } = self;
        let (width, height) = canvas.dimensions();
        let aspect = width as f32 / height.max(1) as f32;

        let accepted = context.frame(now, |carousel| {
            camera.update(&*controller);
            rasterizer.render(canvas, &carousel.draw_list(), camera.view_projection(aspect));
        });
        if !accepted {
            return;
        }

        if let Some(display) = &self.display {
            if let Err(e) = display.surface.render_pixels(self.canvas.as_bytes(), width, height) {
                log::error!("Render error: {:#}", e);
            }

            if let Some(fps) = self.fps.record(now) {
                log::info!("FPS: {:.1}", fps);
                display
                    .window
                    .set_title(&format!("{} - {:.0} FPS", WINDOW_TITLE, fps));
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(display) = &mut self.display {
            display.surface.resize(width, height);
        }
        self.canvas.resize(width, height);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let surface = match pollster::block_on(SurfaceRenderer::new(window.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to initialize surface: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = surface.dimensions();
        self.canvas.resize(width, height);
        self.display = Some(Display { window, surface });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(button) = self.controller.process_event(&event) {
            self.handle_button(event_loop, button);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Focused(false) => self.controller.release_all(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(display) = &self.display {
            display.window.request_redraw();
        }
    }
}

fn run_headless(cli: &Cli, mut context: AnimationContext) -> anyhow::Result<()> {
    context.set_flags(ControlFlags::with_engaged(&cli.engaged_levels()));
    let snapshot = headless::run(&mut context, cli.ticks);
    let json = snapshot.to_json()?;

    match &cli.snapshot {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
            log::info!("Snapshot written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CarouselConfig::load(path)?,
        None => CarouselConfig::default(),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let carousel = Carousel::build(&config, &Catalog::new(), &mut rng)?;
    let context = AnimationContext::new(carousel, &config);

    if cli.headless {
        return run_headless(&cli, context);
    }

    let mode = if cli.wireframe {
        RenderMode::Wireframe
    } else {
        RenderMode::Shaded
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(context, mode);

    println!(
        "Carousel - Controls: hold 1/2/3 to raise inner/middle/outer ring, 7 wireframe, \
         WASD/QE/Space/Shift camera, Escape to quit"
    );
    event_loop.run_app(&mut app)?;

    Ok(())
}
