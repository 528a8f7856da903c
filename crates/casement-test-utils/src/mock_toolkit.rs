//! Mock implementation of the toolkit and backend contracts.

use std::sync::Arc;

use casement_core::Size;
use casement_window::{Backend, Toolkit, WindowError, WindowResult, WindowState};
use parking_lot::Mutex;

/// Records a backend operation for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Initialise,
    Create {
        title: String,
        size: Size<u32>,
        resizable: bool,
        fullscreen: bool,
    },
    Pump,
    ApplyFullscreen(bool),
    Destroy,
}

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<BackendCall>,
    pending_size: Option<Size<u32>>,
    pending_close: bool,
    pending_fullscreen: Option<bool>,
    created_size: Option<Size<u32>>,
    fail_initialise: Option<String>,
    fail_create: Option<String>,
    fail_pump: Option<String>,
}

/// A toolkit handle that records calls and replays scripted signals.
///
/// # Borrow Checking Pattern: Shared Handle
///
/// Clones share one `Arc<Mutex<_>>`, so the test keeps a clone for scripting
/// and inspection while the platform and its windows hold others.
#[derive(Debug, Clone, Default)]
pub struct MockToolkit {
    state: Arc<Mutex<MockState>>,
}

impl MockToolkit {
    /// Create a new mock toolkit.
    pub fn new() -> Self {
        Self::default()
    }

    /// The live size becomes `width`x`height` on the next pump.
    pub fn set_size(&self, width: u32, height: u32) {
        self.state.lock().pending_size = Some(Size::new(width, height));
    }

    /// The user asks to close the window; latched on the next pump.
    pub fn request_close(&self) {
        self.state.lock().pending_close = true;
    }

    /// The toolkit switches fullscreen on its own; observed after the next pump.
    pub fn toolkit_fullscreen(&self, fullscreen: bool) {
        self.state.lock().pending_fullscreen = Some(fullscreen);
    }

    /// Newly created windows report `width`x`height` instead of the requested size.
    pub fn clamp_created_size(&self, width: u32, height: u32) {
        self.state.lock().created_size = Some(Size::new(width, height));
    }

    pub fn fail_initialise(&self, message: impl Into<String>) {
        self.state.lock().fail_initialise = Some(message.into());
    }

    pub fn fail_create(&self, message: impl Into<String>) {
        self.state.lock().fail_create = Some(message.into());
    }

    pub fn fail_pump(&self, message: impl Into<String>) {
        self.state.lock().fail_pump = Some(message.into());
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<BackendCall> {
        self.state.lock().calls.clone()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    pub fn count_initialisations(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::Initialise))
    }

    pub fn count_creates(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::Create { .. }))
    }

    pub fn count_pumps(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::Pump))
    }

    pub fn count_fullscreen_applies(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::ApplyFullscreen(_)))
    }

    pub fn count_destroys(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::Destroy))
    }

    /// The arguments of every `apply_fullscreen` call, in order.
    pub fn fullscreen_applies(&self) -> Vec<bool> {
        self.state
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                BackendCall::ApplyFullscreen(fullscreen) => Some(*fullscreen),
                _ => None,
            })
            .collect()
    }

    fn count(&self, predicate: impl Fn(&BackendCall) -> bool) -> usize {
        self.state.lock().calls.iter().filter(|call| predicate(call)).count()
    }

    fn record(&self, call: BackendCall) {
        self.state.lock().calls.push(call);
    }
}

impl Toolkit for MockToolkit {
    type Backend = MockBackend;

    const NAME: &'static str = "mock";

    fn initialise(&self) -> WindowResult<()> {
        if let Some(message) = self.state.lock().fail_initialise.take() {
            return Err(WindowError::toolkit_init(message));
        }
        self.record(BackendCall::Initialise);
        Ok(())
    }

    fn create_backend(&self, state: &WindowState) -> WindowResult<MockBackend> {
        let mut shared = self.state.lock();
        if let Some(message) = shared.fail_create.take() {
            return Err(WindowError::backend_create(message));
        }

        shared.calls.push(BackendCall::Create {
            title: state.title().to_string(),
            size: state.size(),
            resizable: state.resizable(),
            fullscreen: state.fullscreen(),
        });

        let size = shared.created_size.unwrap_or(state.size());
        drop(shared);

        tracing::trace!("mock backend created at {}", size);
        Ok(MockBackend {
            toolkit: self.clone(),
            running: true,
            size,
            fullscreen: state.fullscreen(),
            observed_fullscreen: None,
        })
    }
}

/// Backend half of [`MockToolkit`]; state changes only while pumping.
#[derive(Debug)]
pub struct MockBackend {
    toolkit: MockToolkit,
    running: bool,
    size: Size<u32>,
    fullscreen: bool,
    observed_fullscreen: Option<bool>,
}

impl MockBackend {
    /// The fullscreen mode the backend is currently in.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

impl Backend for MockBackend {
    fn pump(&mut self) -> WindowResult<()> {
        let mut shared = self.toolkit.state.lock();
        shared.calls.push(BackendCall::Pump);

        if let Some(message) = shared.fail_pump.take() {
            return Err(WindowError::backend(message));
        }
        if std::mem::take(&mut shared.pending_close) {
            self.running = false;
        }
        if let Some(size) = shared.pending_size.take() {
            self.size = size;
        }
        if let Some(fullscreen) = shared.pending_fullscreen.take() {
            self.fullscreen = fullscreen;
            self.observed_fullscreen = Some(fullscreen);
        }
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn current_size(&self) -> Size<u32> {
        self.size
    }

    fn apply_fullscreen(&mut self, fullscreen: bool) {
        self.toolkit.record(BackendCall::ApplyFullscreen(fullscreen));
        self.fullscreen = fullscreen;
    }

    fn observed_fullscreen(&mut self) -> Option<bool> {
        self.observed_fullscreen.take()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.toolkit.record(BackendCall::Destroy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_window::WindowDescriptor;

    fn state() -> WindowState {
        WindowState::from_descriptor(WindowDescriptor::new("mock", 800, 600))
    }

    #[test]
    fn test_signals_latch_on_pump() {
        let toolkit = MockToolkit::new();
        let mut backend = toolkit.create_backend(&state()).unwrap();

        toolkit.set_size(640, 480);
        toolkit.request_close();
        assert_eq!(backend.current_size(), Size::new(800, 600));
        assert!(backend.is_running());

        backend.pump().unwrap();
        assert_eq!(backend.current_size(), Size::new(640, 480));
        assert!(!backend.is_running());
    }

    #[test]
    fn test_clamped_create_size() {
        let toolkit = MockToolkit::new();
        toolkit.clamp_created_size(640, 480);
        let backend = toolkit.create_backend(&state()).unwrap();
        assert_eq!(backend.current_size(), Size::new(640, 480));
    }

    #[test]
    fn test_failures_are_one_shot() {
        let toolkit = MockToolkit::new();
        toolkit.fail_create("refused");
        assert!(toolkit.create_backend(&state()).is_err());
        assert!(toolkit.create_backend(&state()).is_ok());
    }

    #[test]
    fn test_drop_records_destroy() {
        let toolkit = MockToolkit::new();
        drop(toolkit.create_backend(&state()).unwrap());
        assert_eq!(toolkit.count_destroys(), 1);
    }

    #[test]
    fn test_observed_fullscreen_reported_once() {
        let toolkit = MockToolkit::new();
        let mut backend = toolkit.create_backend(&state()).unwrap();
        toolkit.toolkit_fullscreen(true);
        backend.pump().unwrap();
        assert_eq!(backend.observed_fullscreen(), Some(true));
        assert_eq!(backend.observed_fullscreen(), None);
        assert!(backend.is_fullscreen());
    }
}
