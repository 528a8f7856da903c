//! The umbrella crate must be usable with any toolkit through its re-exports.

use casement::prelude::*;
use casement_test_utils::MockToolkit;

#[test]
fn test_prelude_drives_a_window() {
    let toolkit = MockToolkit::new();
    let platform = Platform::new(toolkit.clone());
    let mut window = Window::new(&platform, WindowDescriptor::default()).unwrap();
    window.create().unwrap();

    toolkit.request_close();
    window.update().unwrap();

    assert_eq!(window.events().get(0), Ok(&Event::Close));
}

#[test]
fn test_init_with_is_repeatable() {
    let config = Config::default().with_log_filter("debug");
    casement::init_with(&config);
    casement::init_with(&config);
}
