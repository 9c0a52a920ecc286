//! What the frame loop needs from the outside world.

use glam::DVec2;
use sfml::graphics::Color;

use crate::drag::InputEvent;

pub trait InputSource {
    /// Next event of the current frame, `None` once drained.
    fn poll_event(&mut self) -> Option<InputEvent>;

    fn pointer_position(&self) -> DVec2;
}

pub trait RenderSurface {
    fn clear(&mut self, color: Color);

    fn fill_circle(&mut self, centre: DVec2, radius: f64, color: Color);

    /// Called once after all bodies are drawn.
    fn present(&mut self, info: &FrameInfo);
}

pub trait Pacer {
    /// Blocks until the next frame is due.
    fn wait_next_tick(&mut self);
}

/// Everything the frame driver talks to.
pub trait Frontend: InputSource + RenderSurface + Pacer {}

impl<T: InputSource + RenderSurface + Pacer> Frontend for T {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyReadout {
    pub position: DVec2,
    pub velocity: DVec2,
    pub dragging: bool,
}

/// Read-out of the frame that was just simulated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInfo {
    pub frame: u64,
    pub contacts: u64,
    pub bodies: Vec<BodyReadout>,
}
