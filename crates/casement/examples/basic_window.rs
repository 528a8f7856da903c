use std::time::Duration;

use casement::prelude::*;

fn main() -> WindowResult<()> {
    casement::init_logging();

    let platform = Platform::new(WinitToolkit::new());
    let mut window = Window::new(&platform, WindowDescriptor::new("Basic Window", 800, 600))?;
    window.create()?;

    'main: loop {
        casement::core::profiling::new_frame();
        window.update()?;

        for event in window.events() {
            match event {
                Event::Close => break 'main,
                Event::Resize(size) => tracing::info!("resized to {}", size),
            }
        }

        std::thread::sleep(Duration::from_millis(16));
    }

    tracing::info!("closed after {} cycles", window.cycle());
    Ok(())
}
