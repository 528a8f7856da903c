use std::cell::Cell;

use crate::backend::Toolkit;
use crate::error::WindowResult;

/// Process-level context shared by every window of one toolkit.
///
/// Owns the toolkit handle and gates its one-time initialisation. Create one
/// per process and hand it to each [`Window::new`](crate::Window::new).
#[derive(Debug)]
pub struct Platform<T: Toolkit> {
    toolkit: T,
    initialised: Cell<bool>,
}

impl<T: Toolkit> Platform<T> {
    pub fn new(toolkit: T) -> Self {
        Self {
            toolkit,
            initialised: Cell::new(false),
        }
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised.get()
    }

    /// Initialise the toolkit unless that already succeeded.
    ///
    /// A failed attempt leaves the platform uninitialised.
    pub(crate) fn ensure_initialised(&self) -> WindowResult<()> {
        if self.initialised.get() {
            return Ok(());
        }

        tracing::debug!("initialising {} toolkit", T::NAME);
        self.toolkit.initialise()?;
        self.initialised.set(true);
        Ok(())
    }
}
