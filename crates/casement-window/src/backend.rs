//! The contract every platform backend fulfils.
//!
//! A [`Toolkit`] is the process-level handle to a native windowing toolkit;
//! it creates one [`Backend`] per window. Everything toolkit specific stays
//! behind these two traits.

use casement_core::Size;

use crate::error::WindowResult;
use crate::window::WindowState;

pub trait Toolkit: Clone {
    type Backend: Backend;

    /// Short name used in log output.
    const NAME: &'static str;

    /// Bind to the native toolkit. [`Platform`](crate::Platform) calls this at
    /// most once per process.
    fn initialise(&self) -> WindowResult<()>;

    /// Materialize and show a native window matching `state`, with its initial
    /// fullscreen mode already applied.
    fn create_backend(&self, state: &WindowState) -> WindowResult<Self::Backend>;
}

pub trait Backend {
    /// Run exactly one non-blocking iteration of the native event loop.
    fn pump(&mut self) -> WindowResult<()>;

    /// False once the user has requested the window be closed.
    fn is_running(&self) -> bool;

    /// Live logical size of the native surface.
    fn current_size(&self) -> Size<u32>;

    /// Enter or leave fullscreen, including hiding or restoring decorations.
    fn apply_fullscreen(&mut self, fullscreen: bool);

    /// A fullscreen change the toolkit made on its own since the last call.
    ///
    /// Backends that cannot observe such changes keep the default.
    fn observed_fullscreen(&mut self) -> Option<bool> {
        None
    }
}
