use std::cell::Cell;
use std::time::Duration;

use casement::prelude::*;

fn main() -> WindowResult<()> {
    casement::init_logging();

    // Handlers borrow these; they must outlive the window.
    let running = Cell::new(true);
    let resizes = Cell::new(0u32);

    let platform = Platform::new(WinitToolkit::new());
    let mut window = Window::with_callbacks(&platform, WindowDescriptor::new("Callbacks", 640, 480))?;
    window
        .callbacks_mut()
        .on_close(|state| {
            tracing::info!("closing '{}'", state.title());
            running.set(false);
        })
        .on_resize(|_, size| {
            resizes.set(resizes.get() + 1);
            tracing::info!("resize #{} to {}", resizes.get(), size);
        });
    window.create()?;

    while running.get() {
        window.update()?;
        std::thread::sleep(Duration::from_millis(16));
    }
    Ok(())
}
