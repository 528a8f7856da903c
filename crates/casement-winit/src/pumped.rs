use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use casement_core::Size;
use casement_window::{Backend, Toolkit, WindowError, WindowResult, WindowState};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::OsError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window as WinitWindow, WindowAttributes, WindowId};

use crate::signal::{Signal, to_logical};

/// Pumps allowed for winit to deliver the event that creates a new window.
const CREATE_PUMP_LIMIT: usize = 64;

/// Process-level handle to the winit event loop.
///
/// Clones share the same loop. winit permits one event loop per process,
/// which is created by [`Toolkit::initialise`].
#[derive(Clone, Default)]
pub struct WinitToolkit {
    event_loop: Rc<RefCell<Option<EventLoop<()>>>>,
}

impl WinitToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    fn pump(&self, handler: &mut WindowHandler) -> WindowResult<PumpStatus> {
        let mut slot = self
            .event_loop
            .try_borrow_mut()
            .map_err(|_| WindowError::backend("winit event loop is already being pumped"))?;
        let event_loop = slot
            .as_mut()
            .ok_or_else(|| WindowError::backend("winit event loop was never initialised"))?;

        Ok(event_loop.pump_app_events(Some(Duration::ZERO), handler))
    }
}

impl fmt::Debug for WinitToolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let initialised = self.event_loop.try_borrow().map(|slot| slot.is_some()).ok();
        f.debug_struct("WinitToolkit").field("initialised", &initialised).finish()
    }
}

impl Toolkit for WinitToolkit {
    type Backend = WinitBackend;

    const NAME: &'static str = "winit";

    fn initialise(&self) -> WindowResult<()> {
        let event_loop = EventLoop::new().map_err(WindowError::toolkit_init)?;
        *self.event_loop.borrow_mut() = Some(event_loop);
        Ok(())
    }

    fn create_backend(&self, state: &WindowState) -> WindowResult<WinitBackend> {
        let mut handler = WindowHandler::new(window_attributes(state));

        for _ in 0..CREATE_PUMP_LIMIT {
            if let PumpStatus::Exit(code) = self.pump(&mut handler)? {
                return Err(WindowError::backend_create(format!(
                    "event loop exited with code {} before the window was created",
                    code
                )));
            }
            if let Some(err) = handler.create_error.take() {
                return Err(WindowError::backend_create(err));
            }
            if handler.window.is_some() {
                return Ok(WinitBackend {
                    toolkit: self.clone(),
                    handler,
                });
            }
        }

        Err(WindowError::backend_create(format!(
            "no window after {} event loop iterations",
            CREATE_PUMP_LIMIT
        )))
    }
}

fn window_attributes(state: &WindowState) -> WindowAttributes {
    let fullscreen = state.fullscreen();

    WinitWindow::default_attributes()
        .with_title(state.title())
        .with_inner_size(LogicalSize::new(state.width(), state.height()))
        .with_resizable(state.resizable())
        .with_decorations(!fullscreen)
        .with_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)))
}

/// Receives winit callbacks for one window and latches what they report.
struct WindowHandler {
    pending: Option<WindowAttributes>,
    window: Option<WinitWindow>,
    create_error: Option<OsError>,
    running: bool,
    size: Size<u32>,
    scale_factor: f64,
}

impl WindowHandler {
    fn new(attributes: WindowAttributes) -> Self {
        Self {
            pending: Some(attributes),
            window: None,
            create_error: None,
            running: true,
            size: Size::default(),
            scale_factor: 1.0,
        }
    }

    fn create_pending(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.pending.take() else {
            return;
        };

        match event_loop.create_window(attributes) {
            Ok(window) => {
                self.scale_factor = window.scale_factor();
                let physical = window.inner_size();
                self.size = to_logical(Size::new(physical.width, physical.height), self.scale_factor);
                tracing::debug!("winit window {:?} created at {}", window.id(), self.size);
                self.window = Some(window);
            }
            Err(err) => {
                tracing::error!("winit refused to create window: {}", err);
                self.create_error = Some(err);
            }
        }
    }

    fn latch(&mut self, signal: Signal) {
        match signal {
            Signal::CloseRequested | Signal::Destroyed => self.running = false,
            Signal::Resized(physical) => self.size = to_logical(physical, self.scale_factor),
            Signal::ScaleFactorChanged(scale_factor) => self.scale_factor = scale_factor,
        }
    }
}

impl ApplicationHandler for WindowHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // winit resumes only once per process; later windows are created here
        self.create_pending(event_loop);
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.window.as_ref().map(WinitWindow::id) != Some(window_id) {
            tracing::trace!("ignoring event for foreign window {:?}", window_id);
            return;
        }

        if let Some(signal) = Signal::from_winit(&event) {
            self.latch(signal);
        }
    }
}

/// One native window driven through the shared winit event loop.
pub struct WinitBackend {
    toolkit: WinitToolkit,
    handler: WindowHandler,
}

impl WinitBackend {
    pub fn window(&self) -> Option<&WinitWindow> {
        self.handler.window.as_ref()
    }
}

impl Backend for WinitBackend {
    fn pump(&mut self) -> WindowResult<()> {
        if let PumpStatus::Exit(code) = self.toolkit.pump(&mut self.handler)? {
            tracing::info!("winit event loop exited with code {}", code);
            self.handler.running = false;
        }
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.handler.running
    }

    fn current_size(&self) -> Size<u32> {
        self.handler.size
    }

    fn apply_fullscreen(&mut self, fullscreen: bool) {
        let Some(window) = self.handler.window.as_ref() else {
            return;
        };

        if fullscreen {
            window.set_decorations(false);
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        } else {
            window.set_fullscreen(None);
            window.set_decorations(true);
        }
    }
}

impl fmt::Debug for WinitBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WinitBackend")
            .field("window", &self.handler.window.as_ref().map(WinitWindow::id))
            .field("running", &self.handler.running)
            .field("size", &self.handler.size)
            .finish()
    }
}
