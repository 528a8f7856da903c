//! Backend-neutral windows and their event cycle.
//!
//! A [`Window`] hides a native toolkit behind one contract: build it from a
//! [`WindowDescriptor`], call [`Window::create`] once, then call
//! [`Window::update`] every iteration of the host loop. Each update emits the
//! cycle's [`Event`]s (close first, then resize) through the window's delivery
//! strategy, and reconciles the application's fullscreen flag with the toolkit.
//!
//! Toolkits plug in through the [`Toolkit`] and [`Backend`] traits; a
//! [`Platform`] makes sure a toolkit is initialised once per process no matter
//! how many windows are built.
//!
//! The subsystem is single threaded: the thread that calls `update` owns the
//! window, and fullscreen writes happen between updates on that same thread.

pub mod backend;
pub mod delivery;
pub mod descriptor;
pub mod error;
pub mod event;
pub mod platform;
pub mod window;

pub use backend::{Backend, Toolkit};
pub use delivery::{Callbacks, EventDelivery};
pub use descriptor::WindowDescriptor;
pub use error::{WindowError, WindowResult};
pub use event::{Event, EventKind, EventList, HandleStatus};
pub use platform::Platform;
pub use window::{Window, WindowState};
