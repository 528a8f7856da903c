//! Lifecycle and platform initialisation tests.

use casement_test_utils::{BackendCall, MockToolkit};
use casement_window::{Platform, Window, WindowDescriptor, WindowError};

#[test]
fn test_update_before_create_fails() {
    let platform = Platform::new(MockToolkit::new());
    let mut window = Window::new(&platform, WindowDescriptor::default()).unwrap();

    assert_eq!(window.update(), Err(WindowError::NotCreated));
    assert!(!window.is_created());
}

#[test]
fn test_create_twice_fails() {
    let toolkit = MockToolkit::new();
    let platform = Platform::new(toolkit.clone());
    let mut window = Window::new(&platform, WindowDescriptor::default()).unwrap();

    window.create().unwrap();
    assert_eq!(window.create(), Err(WindowError::AlreadyCreated));
    assert_eq!(toolkit.count_creates(), 1);
}

#[test]
fn test_failed_create_is_reported_and_update_still_fails() {
    let toolkit = MockToolkit::new();
    toolkit.fail_create("no compositor");
    let platform = Platform::new(toolkit.clone());
    let mut window = Window::new(&platform, WindowDescriptor::default()).unwrap();

    let err = window.create().unwrap_err();
    assert_eq!(
        err,
        WindowError::BackendCreate {
            message: "no compositor".to_string()
        }
    );
    assert_eq!(window.update(), Err(WindowError::NotCreated));
}

#[test]
fn test_pump_failure_is_surfaced() {
    let toolkit = MockToolkit::new();
    let platform = Platform::new(toolkit.clone());
    let mut window = Window::new(&platform, WindowDescriptor::default()).unwrap();
    window.create().unwrap();

    toolkit.request_close();
    window.update().unwrap();
    assert_eq!(window.events().len(), 1);
    let cycle = window.cycle();

    toolkit.fail_pump("connection lost");
    assert!(matches!(window.update(), Err(WindowError::Backend { .. })));
    assert_eq!(window.events().len(), 1);
    assert_eq!(window.cycle(), cycle);

    assert!(window.update().is_ok());
    assert_eq!(window.cycle(), cycle + 1);
}

#[test]
fn test_toolkit_initialised_once_for_many_windows() {
    let toolkit = MockToolkit::new();
    let platform = Platform::new(toolkit.clone());
    assert!(!platform.is_initialised());

    let first = Window::new(&platform, WindowDescriptor::default()).unwrap();
    let second = Window::new(&platform, WindowDescriptor::new("second", 320, 240)).unwrap();

    assert!(platform.is_initialised());
    assert_eq!(toolkit.count_initialisations(), 1);
    assert_eq!(toolkit.count_creates(), 0);
    drop((first, second));
}

#[test]
fn test_failed_initialisation_is_retried() {
    let toolkit = MockToolkit::new();
    toolkit.fail_initialise("display unavailable");
    let platform = Platform::new(toolkit.clone());

    let err = Window::new(&platform, WindowDescriptor::default()).unwrap_err();
    assert!(matches!(err, WindowError::ToolkitInit { .. }));
    assert!(!platform.is_initialised());

    Window::new(&platform, WindowDescriptor::default()).unwrap();
    assert!(platform.is_initialised());
    assert_eq!(toolkit.count_initialisations(), 1);
}

#[test]
fn test_invalid_descriptor_rejected_before_initialisation() {
    let toolkit = MockToolkit::new();
    let platform = Platform::new(toolkit.clone());

    let err = Window::new(&platform, WindowDescriptor::new("bad", 0, 0)).unwrap_err();
    assert!(matches!(err, WindowError::InvalidDescriptor { .. }));
    assert_eq!(toolkit.count_initialisations(), 0);
}

#[test]
fn test_descriptor_is_copied_into_state_and_create_request() {
    let toolkit = MockToolkit::new();
    let platform = Platform::new(toolkit.clone());
    let descriptor = WindowDescriptor::new("copied", 640, 480).with_resizable(false);
    let mut window = Window::new(&platform, descriptor).unwrap();

    assert_eq!(window.title(), "copied");
    assert_eq!((window.width(), window.height()), (640, 480));
    assert!(!window.resizable());
    assert!(!window.fullscreen());

    window.create().unwrap();
    assert_eq!(
        toolkit.calls()[1],
        BackendCall::Create {
            title: "copied".to_string(),
            size: casement_core::Size::new(640, 480),
            resizable: false,
            fullscreen: false,
        }
    );
}
