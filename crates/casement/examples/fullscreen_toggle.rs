use std::time::Duration;

use casement::prelude::*;

/// Cycles between fullscreen toggles (~2s at 60Hz).
const TOGGLE_EVERY: u64 = 120;

fn main() -> WindowResult<()> {
    casement::init_with(&Config::default().with_log_filter("debug,winit=warn"));

    let platform = Platform::new(WinitToolkit::new());
    let mut window = Window::new(&platform, WindowDescriptor::new("Fullscreen Toggle", 800, 600))?;
    window.create()?;

    while !window.is_closed() {
        window.update()?;

        if window.cycle() % TOGGLE_EVERY == 0 {
            let fullscreen = window.fullscreen_mut();
            *fullscreen = !*fullscreen;
        }

        std::thread::sleep(Duration::from_millis(16));
    }
    Ok(())
}
