//! Pointer handling: grabbing, dragging and throwing bodies.

use glam::DVec2;

use crate::body::Body;
use crate::constants::THROW_SENSITIVITY;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    PointerDown(DVec2),
    PointerUp(DVec2),
    PointerMove(DVec2),
}

impl InputEvent {
    pub fn position(&self) -> Option<DVec2> {
        match *self {
            Self::PointerDown(at) | Self::PointerUp(at) | Self::PointerMove(at) => Some(at),
            Self::Quit => None,
        }
    }
}

/// `previous` is sampled once per frame, after rendering. `current` follows
/// every pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub previous: DVec2,
    pub current: DVec2,
}

impl PointerState {
    pub fn track(&mut self, event: &InputEvent) {
        if let Some(at) = event.position() {
            self.current = at;
        }
    }

    /// End-of-frame sample, the reference point of the next frame's throw.
    pub fn sample(&mut self, position: DVec2) {
        self.current = position;
        self.previous = position;
    }

    /// Force given to a body let go at `release`.
    pub fn throw_force(&self, release: DVec2) -> DVec2 {
        (release - self.previous) * THROW_SENSITIVITY
    }
}

/// Feeds one pointer event to `bodies`, which must be in priority order.
///
/// Every body under a press is grabbed, so one click can pick up both bodies
/// when their bounding squares overlap. `Quit` is not a pointer event and is
/// ignored here.
pub fn handle_event(bodies: &mut [&mut Body], event: InputEvent, pointer: &PointerState) {
    match event {
        InputEvent::PointerDown(at) => {
            for body in bodies.iter_mut() {
                body.begin_drag(at);
            }
        }

        InputEvent::PointerMove(at) => {
            for body in bodies.iter_mut().filter(|b| b.is_dragging()) {
                body.stop();
                body.move_drag(at);
            }
        }

        InputEvent::PointerUp(at) => {
            let force = pointer.throw_force(at);

            for body in bodies.iter_mut().filter(|b| b.is_dragging()) {
                body.end_drag();
                body.apply_impulse(force);
            }
        }

        InputEvent::Quit => {}
    }
}
