//! Update cycle tests for the callback model.

use std::cell::RefCell;

use casement_core::Size;
use casement_test_utils::MockToolkit;
use casement_window::{Callbacks, Platform, Window, WindowDescriptor};

fn created_window<'a>(toolkit: &MockToolkit) -> Window<MockToolkit, Callbacks<'a>> {
    let platform = Platform::new(toolkit.clone());
    let mut window = Window::with_callbacks(&platform, WindowDescriptor::new("callbacks", 800, 600)).unwrap();
    window.create().unwrap();
    window
}

#[test]
fn test_close_handler_before_resize_handler() {
    let log = RefCell::new(Vec::new());
    let toolkit = MockToolkit::new();
    let mut window = created_window(&toolkit);

    window
        .callbacks_mut()
        .on_resize(|_, size| log.borrow_mut().push(format!("resize {size}")))
        .on_close(|_| log.borrow_mut().push("close".to_string()));

    toolkit.request_close();
    toolkit.set_size(1024, 768);
    window.update().unwrap();

    assert_eq!(*log.borrow(), vec!["close".to_string(), "resize 1024x768".to_string()]);
}

#[test]
fn test_handlers_see_updated_state() {
    let seen = RefCell::new(None);
    let toolkit = MockToolkit::new();
    let mut window = created_window(&toolkit);

    window
        .callbacks_mut()
        .on_resize(|state, _| *seen.borrow_mut() = Some(state.size()));

    toolkit.set_size(1024, 768);
    window.update().unwrap();

    assert_eq!(*seen.borrow(), Some(Size::new(1024, 768)));
}

#[test]
fn test_close_handler_runs_once() {
    let closes = RefCell::new(0);
    let toolkit = MockToolkit::new();
    let mut window = created_window(&toolkit);
    window.callbacks_mut().on_close(|_| *closes.borrow_mut() += 1);

    toolkit.request_close();
    for _ in 0..5 {
        window.update().unwrap();
    }

    assert_eq!(*closes.borrow(), 1);
}

#[test]
fn test_quiet_cycles_invoke_nothing() {
    let calls = RefCell::new(0);
    let toolkit = MockToolkit::new();
    let mut window = created_window(&toolkit);
    window
        .callbacks_mut()
        .on_close(|_| *calls.borrow_mut() += 1)
        .on_resize(|_, _| *calls.borrow_mut() += 1);

    for _ in 0..5 {
        window.update().unwrap();
    }

    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_unregistered_kinds_are_skipped() {
    let toolkit = MockToolkit::new();
    let mut window = created_window(&toolkit);

    toolkit.request_close();
    toolkit.set_size(10, 10);
    window.update().unwrap();

    assert!(window.is_closed());
    assert_eq!(window.size(), Size::new(10, 10));
}

#[test]
fn test_reregistering_replaces_handler() {
    let log = RefCell::new(Vec::new());
    let toolkit = MockToolkit::new();
    let mut window = created_window(&toolkit);

    window.callbacks_mut().on_resize(|_, _| log.borrow_mut().push("old"));
    window.callbacks_mut().on_resize(|_, _| log.borrow_mut().push("new"));

    toolkit.set_size(900, 900);
    window.update().unwrap();

    assert_eq!(*log.borrow(), vec!["new"]);
}

#[test]
fn test_resize_handler_enters_fullscreen_next_cycle() {
    let toolkit = MockToolkit::new();
    let mut window = created_window(&toolkit);
    window
        .callbacks_mut()
        .on_resize(|state, size| state.set_fullscreen(size.width > 1000));

    toolkit.set_size(1024, 768);
    window.update().unwrap();
    assert!(window.fullscreen());
    assert!(toolkit.fullscreen_applies().is_empty());

    window.update().unwrap();
    assert_eq!(toolkit.fullscreen_applies(), vec![true]);

    window.update().unwrap();
    assert_eq!(toolkit.fullscreen_applies(), vec![true]);
}
