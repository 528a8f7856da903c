use casement_core::Size;
use casement_core::profiling::profile_function;

use crate::backend::{Backend, Toolkit};
use crate::delivery::{Callbacks, EventDelivery};
use crate::descriptor::WindowDescriptor;
use crate::error::{WindowError, WindowResult};
use crate::event::{Event, EventList};
use crate::platform::Platform;

/// The application-visible state of a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    title: String,
    size: Size<u32>,
    resizable: bool,
    fullscreen: bool,
}

impl WindowState {
    pub fn from_descriptor(descriptor: WindowDescriptor) -> Self {
        Self {
            size: descriptor.size(),
            title: descriptor.title,
            resizable: descriptor.resizable,
            fullscreen: descriptor.fullscreen,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> Size<u32> {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn resizable(&self) -> bool {
        self.resizable
    }

    pub fn fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Request a fullscreen mode; applied by the next update.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    pub fn fullscreen_mut(&mut self) -> &mut bool {
        &mut self.fullscreen
    }
}

/// A native window behind a backend-neutral facade.
///
/// Drive it by calling [`Window::update`] once per iteration of the host loop.
/// Each call pumps the toolkit once without blocking, applies a pending
/// fullscreen change, samples size and close state, and emits the events of
/// that cycle through `D`: by default the polled [`EventList`], or
/// [`Callbacks`] when built with [`Window::with_callbacks`].
///
/// # Example
///
/// ```no_run
/// use casement_window::{Event, Platform, Window, WindowDescriptor};
/// # fn example<T: casement_window::Toolkit>(toolkit: T) -> casement_window::WindowResult<()> {
/// let platform = Platform::new(toolkit);
/// let mut window = Window::new(&platform, WindowDescriptor::default())?;
/// window.create()?;
///
/// 'main: loop {
///     window.update()?;
///     for event in window.events() {
///         match event {
///             Event::Close => break 'main,
///             Event::Resize(size) => println!("resized to {size}"),
///         }
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct Window<T: Toolkit, D: EventDelivery = EventList> {
    state: WindowState,
    toolkit: T,
    backend: Option<T::Backend>,
    /// Fullscreen mode the backend was last told to use.
    applied_fullscreen: bool,
    close_reported: bool,
    delivery: D,
    cycle: u64,
}

impl<T: Toolkit> Window<T> {
    /// Build a window that reports events through a polled [`EventList`].
    ///
    /// Initialises the toolkit through `platform` if no window did so before.
    /// No native window exists until [`Window::create`].
    pub fn new(platform: &Platform<T>, descriptor: WindowDescriptor) -> WindowResult<Self> {
        Self::with_delivery(platform, descriptor, EventList::new())
    }

    /// Events emitted by the most recent [`Window::update`].
    pub fn events(&self) -> &EventList {
        &self.delivery
    }

    /// Mutable access to this cycle's events; [`EventList::dispatch`] drops the ones a handler consumes.
    pub fn events_mut(&mut self) -> &mut EventList {
        &mut self.delivery
    }
}

impl<'a, T: Toolkit> Window<T, Callbacks<'a>> {
    /// Build a window that invokes registered handlers during [`Window::update`].
    pub fn with_callbacks(platform: &Platform<T>, descriptor: WindowDescriptor) -> WindowResult<Self> {
        Self::with_delivery(platform, descriptor, Callbacks::new())
    }

    pub fn callbacks_mut(&mut self) -> &mut Callbacks<'a> {
        &mut self.delivery
    }
}

impl<T: Toolkit, D: EventDelivery> Window<T, D> {
    pub fn with_delivery(platform: &Platform<T>, descriptor: WindowDescriptor, delivery: D) -> WindowResult<Self> {
        descriptor.validate()?;
        platform.ensure_initialised()?;

        Ok(Self {
            state: WindowState::from_descriptor(descriptor),
            toolkit: platform.toolkit().clone(),
            backend: None,
            applied_fullscreen: false,
            close_reported: false,
            delivery,
            cycle: 0,
        })
    }

    /// Ask the backend to materialize and show the native window.
    ///
    /// On failure the window stays uncreated and `update` keeps failing with
    /// [`WindowError::NotCreated`].
    pub fn create(&mut self) -> WindowResult<()> {
        if self.backend.is_some() {
            return Err(WindowError::AlreadyCreated);
        }

        let backend = self.toolkit.create_backend(&self.state).inspect_err(|e| {
            tracing::error!("{} backend could not create '{}': {}", T::NAME, self.state.title, e);
        })?;

        self.applied_fullscreen = self.state.fullscreen;
        self.backend = Some(backend);

        tracing::info!(
            "created {} window '{}' ({}, fullscreen: {})",
            T::NAME,
            self.state.title,
            self.state.size,
            self.state.fullscreen
        );
        Ok(())
    }

    /// Run one cycle of event processing.
    pub fn update(&mut self) -> WindowResult<()> {
        profile_function!();

        let backend = self.backend.as_mut().ok_or(WindowError::NotCreated)?;
        backend.pump()?;

        if let Some(fullscreen) = backend.observed_fullscreen() {
            tracing::debug!("toolkit changed fullscreen to {}", fullscreen);
            self.state.fullscreen = fullscreen;
            self.applied_fullscreen = fullscreen;
        }

        if self.state.fullscreen != self.applied_fullscreen {
            tracing::debug!("applying fullscreen: {}", self.state.fullscreen);
            backend.apply_fullscreen(self.state.fullscreen);
            self.applied_fullscreen = self.state.fullscreen;
        }

        let size = backend.current_size();
        let resized = size != self.state.size;
        if resized {
            tracing::debug!("window resized from {} to {}", self.state.size, size);
            self.state.size = size;
        }

        let closed = !backend.is_running() && !self.close_reported;
        if closed {
            tracing::info!("close requested for window '{}'", self.state.title);
            self.close_reported = true;
        }

        self.delivery.begin_cycle();
        if closed {
            self.delivery.deliver(&mut self.state, Event::Close);
        }
        if resized {
            self.delivery.deliver(&mut self.state, Event::Resize(size));
        }

        self.cycle += 1;
        tracing::trace!("cycle {} done (closed: {}, resized: {})", self.cycle, closed, resized);
        Ok(())
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn title(&self) -> &str {
        self.state.title()
    }

    pub fn size(&self) -> Size<u32> {
        self.state.size
    }

    pub fn width(&self) -> u32 {
        self.state.width()
    }

    pub fn height(&self) -> u32 {
        self.state.height()
    }

    pub fn resizable(&self) -> bool {
        self.state.resizable
    }

    pub fn fullscreen(&self) -> bool {
        self.state.fullscreen
    }

    /// Read-write handle to the fullscreen flag.
    ///
    /// Writes take effect during the next [`Window::update`], never immediately.
    pub fn fullscreen_mut(&mut self) -> &mut bool {
        self.state.fullscreen_mut()
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.state.set_fullscreen(fullscreen);
    }

    pub fn is_created(&self) -> bool {
        self.backend.is_some()
    }

    /// True once a close request has been reported.
    pub fn is_closed(&self) -> bool {
        self.close_reported
    }

    /// Number of completed update cycles.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}

impl<T: Toolkit, D: EventDelivery> Drop for Window<T, D> {
    fn drop(&mut self) {
        if self.backend.take().is_some() {
            tracing::debug!("destroyed {} window '{}'", T::NAME, self.state.title);
        }
    }
}

impl<T: Toolkit, D: EventDelivery + std::fmt::Debug> std::fmt::Debug for Window<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("toolkit", &T::NAME)
            .field("state", &self.state)
            .field("created", &self.backend.is_some())
            .field("closed", &self.close_reported)
            .field("delivery", &self.delivery)
            .field("cycle", &self.cycle)
            .finish()
    }
}
