#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod paint;
mod scheduler;

pub use paint::{ALIVE_COLOR, DEAD_COLOR, GRID_COLOR, frame_size, paint_board};
pub use scheduler::DeadlineScheduler;

use error_iter::ErrorIter as _;
use life_engine::{
    Board, BoardObserver, Controller, LifeError, Pattern, PatternCatalog, PatternError, RunState,
};
use log::{error, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, TextureError};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, KeyEvent, MouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Cursor, CursorIcon, Window, WindowId};

const BACKGROUND_COLOR: Color = Color::WHITE;

#[derive(Debug, Error)]
pub enum AnimateError {
    #[error("Could not set up the board")]
    Life(#[from] LifeError),
    #[error("Could not load a pattern")]
    Pattern(#[from] PatternError),
    #[error("Event loop failed")]
    EventLoop(#[from] EventLoopError),
    #[error("Could not create the window")]
    Window(#[from] OsError),
    #[error("Could not create or draw the pixel buffer")]
    Pixels(#[from] pixels::Error),
    #[error("Could not resize the pixel buffer")]
    Texture(#[from] TextureError),
}

/// Opens a `window_size` window and runs the controller built by `build_controller`
/// until the window is closed.
///
/// Keys: Space starts/pauses, S or Right steps, R resets, 1-9 pick a catalog pattern,
/// Escape/Q/X quit. Releasing the left mouse button toggles the cell under the pointer.
pub fn animate<F>(
    title: &str,
    window_size: PhysicalSize<u32>,
    catalog: PatternCatalog,
    build_controller: F,
) -> Result<(), AnimateError>
where
    F: Fn(PhysicalSize<u32>, &Pattern) -> Result<Controller<DeadlineScheduler>, LifeError>,
{
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(title, window_size, catalog, build_controller);
    event_loop.run_app(&mut handler)?;
    match handler.failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub fn log_error<E: std::error::Error + 'static>(method_name: &str, err: &E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

struct RedrawRequester {
    window: Arc<Window>,
}

impl BoardObserver for RedrawRequester {
    fn board_changed(&mut self, _board: &Board, _cell_size: u32) {
        self.window.request_redraw();
    }
}

struct App {
    controller: Controller<DeadlineScheduler>,
    catalog: PatternCatalog,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    buffer_size: (u32, u32),
    cursor: Option<PhysicalPosition<f64>>,
}

impl App {
    fn new<F>(
        event_loop: &ActiveEventLoop,
        title: &str,
        window_size: PhysicalSize<u32>,
        catalog: PatternCatalog,
        build_controller: &F,
    ) -> Result<Self, AnimateError>
    where
        F: Fn(PhysicalSize<u32>, &Pattern) -> Result<Controller<DeadlineScheduler>, LifeError>,
    {
        let window = Arc::new(Self::build_window(event_loop, title, window_size)?);
        let mut controller = build_controller(window.inner_size(), catalog.default_pattern())?;
        controller.add_observer(Box::new(RedrawRequester {
            window: window.clone(),
        }));
        let buffer_size = frame_size(controller.board(), controller.cell_size());
        let pixels = Self::build_pixels(&window, buffer_size)?;
        Ok(Self {
            controller,
            catalog,
            window,
            pixels,
            buffer_size,
            cursor: None,
        })
    }

    fn build_window(
        event_loop: &ActiveEventLoop,
        title: &str,
        window_size: PhysicalSize<u32>,
    ) -> Result<Window, OsError> {
        let window_attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(window_size)
            .with_resizable(false)
            .with_cursor(Cursor::Icon(CursorIcon::Crosshair))
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn build_pixels(
        window: &Arc<Window>,
        (width, height): (u32, u32),
    ) -> Result<Pixels<'static>, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        PixelsBuilder::new(width, height, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_time_step(&mut self) {
        if let Some(token) = self.controller.scheduler_mut().take_due(Instant::now()) {
            self.controller.on_tick(token);
        }
    }

    fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Space => match self.controller.state() {
                RunState::Running => self.controller.pause(),
                RunState::Idle | RunState::Paused => self.controller.start(),
            },
            KeyCode::KeyS | KeyCode::ArrowRight => self.controller.step(),
            KeyCode::KeyR => self.controller.reset(),
            _ => {
                if let Some(index) = Self::digit_index(code) {
                    self.select_pattern(index);
                }
            }
        }
    }

    fn digit_index(code: KeyCode) -> Option<usize> {
        let digits = [
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::Digit4,
            KeyCode::Digit5,
            KeyCode::Digit6,
            KeyCode::Digit7,
            KeyCode::Digit8,
            KeyCode::Digit9,
        ];
        digits.iter().position(|&digit| digit == code)
    }

    fn select_pattern(&mut self, index: usize) {
        let Some(pattern) = self.catalog.get(index) else {
            return;
        };
        info!("Selected pattern {:?}", pattern.name());
        if let Err(err) = self
            .controller
            .change_filler(pattern.clone(), pattern.cell_size())
        {
            log_error("change_filler", &err);
        }
    }

    fn on_click(&mut self) {
        let Some(position) = self.cursor else {
            return;
        };
        // Letterboxing can offset the buffer inside the window; map to buffer pixels first.
        if let Ok((x, y)) = self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        {
            self.controller.toggle_at(x as f64, y as f64);
        }
    }

    fn on_redraw(&mut self) -> Result<(), AnimateError> {
        let buffer_size = frame_size(self.controller.board(), self.controller.cell_size());
        if buffer_size != self.buffer_size {
            self.pixels.resize_buffer(buffer_size.0, buffer_size.1)?;
            self.buffer_size = buffer_size;
        }
        paint_board(
            self.controller.board(),
            self.controller.cell_size(),
            self.pixels.frame_mut(),
        );
        self.pixels.render()?;
        Ok(())
    }
}

struct AppEventHandler<F>
where
    F: Fn(PhysicalSize<u32>, &Pattern) -> Result<Controller<DeadlineScheduler>, LifeError>,
{
    title: String,
    window_size: PhysicalSize<u32>,
    catalog: Option<PatternCatalog>,
    build_controller: F,
    app: Option<App>,
    failure: Option<AnimateError>,
}

impl<F> AppEventHandler<F>
where
    F: Fn(PhysicalSize<u32>, &Pattern) -> Result<Controller<DeadlineScheduler>, LifeError>,
{
    fn new(
        title: &str,
        window_size: PhysicalSize<u32>,
        catalog: PatternCatalog,
        build_controller: F,
    ) -> Self {
        Self {
            title: title.into(),
            window_size,
            catalog: Some(catalog),
            build_controller,
            app: None,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, method_name: &str, err: AnimateError) {
        log_error(method_name, &err);
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        event_loop.exit();
    }
}

impl<F> ApplicationHandler for AppEventHandler<F>
where
    F: Fn(PhysicalSize<u32>, &Pattern) -> Result<Controller<DeadlineScheduler>, LifeError>,
{
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let (StartCause::ResumeTimeReached { .. }, Some(app)) = (cause, self.app.as_mut()) {
            app.on_time_step();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(catalog) = self.catalog.take() else {
            return;
        };
        match App::new(
            event_loop,
            &self.title,
            self.window_size,
            catalog,
            &self.build_controller,
        ) {
            Ok(mut app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => self.fail(event_loop, "resumed", err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape | KeyCode::KeyQ | KeyCode::KeyX => {
                    event_loop.exit();
                }
                _ => app.on_key(code),
            },
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor = Some(position);
            }
            WindowEvent::CursorLeft { .. } => {
                app.cursor = None;
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => app.on_click(),
            WindowEvent::Resized(size) => {
                if let Err(err) = app.pixels.resize_surface(size.width, size.height) {
                    self.fail(event_loop, "resize_surface", err.into());
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.on_redraw() {
                    self.fail(event_loop, "on_redraw", err);
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let deadline = self
            .app
            .as_ref()
            .and_then(|app| app.controller.scheduler().deadline());
        event_loop.set_control_flow(match deadline {
            Some(wakeup_time) => ControlFlow::WaitUntil(wakeup_time),
            None => ControlFlow::Wait,
        });
    }
}
