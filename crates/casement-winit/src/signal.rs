use casement_core::Size;
use winit::dpi::PhysicalSize;
pub use winit::event::WindowEvent as WinitEvent;

/// The window-level winit events the backend latches between pumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    CloseRequested,
    Destroyed,
    /// New physical size of the window's client area.
    Resized(Size<u32>),
    ScaleFactorChanged(f64),
}

impl Signal {
    pub fn from_winit(event: &WinitEvent) -> Option<Self> {
        match event {
            WinitEvent::CloseRequested => Some(Signal::CloseRequested),
            WinitEvent::Destroyed => Some(Signal::Destroyed),
            WinitEvent::Resized(size) => Some(Signal::Resized(Size::new(size.width, size.height))),
            WinitEvent::ScaleFactorChanged { scale_factor, .. } => {
                Some(Signal::ScaleFactorChanged(*scale_factor))
            }
            // input and redraw handling belong to the application, not the window layer
            other => {
                tracing::trace!("ignored window event: {:?}", other);
                None
            }
        }
    }
}

/// Convert a physical size to logical units, rounding like winit does.
pub fn to_logical(physical: Size<u32>, scale_factor: f64) -> Size<u32> {
    let logical = PhysicalSize::new(physical.width, physical.height).to_logical::<u32>(scale_factor);
    Size::new(logical.width, logical.height)
}
