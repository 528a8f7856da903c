//! Error types for the window subsystem.

use std::fmt;

/// Errors reported by the window facade and its backends.
///
/// Having no events in a cycle is never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Indexed access past the events of the current cycle.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of events available.
        len: usize,
    },

    /// `update` was called before a successful `create`.
    NotCreated,

    /// `create` was called on a window that already has a backend.
    AlreadyCreated,

    /// The descriptor cannot describe a window.
    InvalidDescriptor {
        /// Why the descriptor was rejected.
        reason: String,
    },

    /// The native toolkit could not be initialised.
    ToolkitInit {
        /// Description of the failure.
        message: String,
    },

    /// The toolkit refused to create the native window.
    BackendCreate {
        /// Description of the failure.
        message: String,
    },

    /// Any other backend failure surfaced while pumping.
    Backend {
        /// Description of the failure.
        message: String,
    },
}

impl WindowError {
    /// Human readable message, the same text as `Display`.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn toolkit_init(message: impl fmt::Display) -> Self {
        WindowError::ToolkitInit {
            message: message.to_string(),
        }
    }

    pub fn backend_create(message: impl fmt::Display) -> Self {
        WindowError::BackendCreate {
            message: message.to_string(),
        }
    }

    pub fn backend(message: impl fmt::Display) -> Self {
        WindowError::Backend {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::OutOfRange { index, len } => {
                write!(f, "Event index {} is out of range (cycle has {} events)", index, len)
            }
            WindowError::NotCreated => {
                write!(f, "Window has no backend; call create() before update()")
            }
            WindowError::AlreadyCreated => write!(f, "Window was already created"),
            WindowError::InvalidDescriptor { reason } => {
                write!(f, "Invalid window descriptor: {}", reason)
            }
            WindowError::ToolkitInit { message } => {
                write!(f, "Failed to initialise toolkit: {}", message)
            }
            WindowError::BackendCreate { message } => {
                write!(f, "Failed to create native window: {}", message)
            }
            WindowError::Backend { message } => write!(f, "Backend error: {}", message),
        }
    }
}

impl std::error::Error for WindowError {}

/// Result type alias for window operations.
pub type WindowResult<T> = Result<T, WindowError>;
