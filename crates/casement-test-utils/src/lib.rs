//! Test utilities for Casement.
//!
//! This crate provides a scripted toolkit that stands in for a native
//! windowing toolkit, so the window facade can be exercised without a display.
//!
//! # Example
//!
//! ```rust
//! use casement_test_utils::MockToolkit;
//! use casement_window::{Event, Platform, Window, WindowDescriptor};
//! use casement_core::Size;
//!
//! let toolkit = MockToolkit::new();
//! let platform = Platform::new(toolkit.clone());
//! let mut window = Window::new(&platform, WindowDescriptor::default()).unwrap();
//! window.create().unwrap();
//!
//! // Pretend the user dragged the window edge
//! toolkit.set_size(1024, 768);
//! window.update().unwrap();
//!
//! assert_eq!(window.events().get(0), Ok(&Event::Resize(Size::new(1024, 768))));
//! assert_eq!(toolkit.count_pumps(), 1);
//! ```
//!
//! # Design
//!
//! Scripted changes (`set_size`, `request_close`, `toolkit_fullscreen`) are
//! pending until the backend's next `pump`, the same way a native toolkit only
//! delivers signals while its event loop runs.

pub mod mock_toolkit;

pub use mock_toolkit::*;
