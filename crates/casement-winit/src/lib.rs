//! winit backend for Casement windows.
//!
//! [`WinitToolkit`] owns the process-wide winit event loop and creates one
//! [`WinitBackend`] per window. Each `Window::update` pumps the loop once with a
//! zero timeout, so the host loop keeps control of pacing.
//!
//! ```no_run
//! use casement_window::{Event, Platform, Window, WindowDescriptor};
//! use casement_winit::WinitToolkit;
//!
//! # fn main() -> casement_window::WindowResult<()> {
//! let platform = Platform::new(WinitToolkit::new());
//! let mut window = Window::new(&platform, WindowDescriptor::new("winit", 1280, 720))?;
//! window.create()?;
//!
//! while !window.is_closed() {
//!     window.update()?;
//!     for event in window.events() {
//!         if let Event::Resize(size) = event {
//!             println!("now {size}");
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Only platforms where winit can pump its event loop are supported.

#[cfg(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "linux",
    target_os = "android",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
))]
mod pumped;

#[cfg(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "linux",
    target_os = "android",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
))]
pub use pumped::{WinitBackend, WinitToolkit};

pub mod signal;
