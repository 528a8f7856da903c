use casement_core::Size;

use crate::error::{WindowError, WindowResult};

/// Creation-time configuration of a [`Window`](crate::Window).
///
/// Consumed once by `Window::new`; later changes go through the window itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowDescriptor {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    /// Whether the window should start fullscreen.
    pub fullscreen: bool,
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            title: "Casement Window".to_string(),
            width: 800,
            height: 600,
            resizable: true,
            fullscreen: false,
        }
    }
}

impl WindowDescriptor {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn size(&self) -> Size<u32> {
        Size::new(self.width, self.height)
    }

    pub(crate) fn validate(&self) -> WindowResult<()> {
        if self.size().is_empty() {
            return Err(WindowError::InvalidDescriptor {
                reason: format!("size must be non-zero, got {}", self.size()),
            });
        }
        Ok(())
    }
}
