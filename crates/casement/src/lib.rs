//! Casement - a cross-backend window and event layer
//!
//! Casement lets application code open a window, receive its lifecycle events
//! and toggle fullscreen without depending on a particular windowing toolkit.
//!
//! - **Window facade**: [`Window`] built from a [`WindowDescriptor`]
//! - **Event cycle**: one non-blocking [`Window::update`] per host-loop iteration
//! - **Delivery**: poll the cycle's [`EventList`], or register [`Callbacks`]
//! - **Backends**: winit out of the box, anything else through [`Toolkit`]
//!
//! # Quick Start
//!
//! ```no_run
//! use casement::prelude::*;
//!
//! fn main() -> WindowResult<()> {
//!     casement::init_logging();
//!
//!     let platform = Platform::new(WinitToolkit::new());
//!     let mut window = Window::new(&platform, WindowDescriptor::new("Hello", 800, 600))?;
//!     window.create()?;
//!
//!     while !window.is_closed() {
//!         window.update()?;
//!         for event in window.events() {
//!             println!("{:?}", event);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Cargo features
//!
//! - `winit` (default) - the winit backend, re-exported as [`WinitToolkit`]
//! - `profiling` (default) - puffin scopes around the update cycle

// Re-export core types
pub use casement_core as core;
pub use casement_core::{Config, ProfilingMode, Size};

pub use casement_window as window;
pub use casement_window::{
    Backend, Callbacks, Event, EventDelivery, EventKind, EventList, HandleStatus, Platform, Toolkit,
    Window, WindowDescriptor, WindowError, WindowResult, WindowState,
};

#[cfg(feature = "winit")]
pub use casement_winit as winit;
#[cfg(feature = "winit")]
pub use casement_winit::{WinitBackend, WinitToolkit};

/// Install logging and profiling with the default [`Config`].
pub fn init_logging() {
    casement_core::logging::init();
}

/// Install logging and profiling as described by `config`.
pub fn init_with(config: &Config) {
    casement_core::logging::init_with(config);
    tracing::debug!("casement initialised with {:?}", config);
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use casement_core::{Config, ProfilingMode, Size};
    pub use casement_window::{
        Callbacks, Event, EventKind, EventList, HandleStatus, Platform, Window, WindowDescriptor,
        WindowError, WindowResult, WindowState,
    };

    #[cfg(feature = "winit")]
    pub use casement_winit::WinitToolkit;
}
