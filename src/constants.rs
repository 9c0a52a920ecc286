use glam::DVec2;
use sfml::graphics::Color;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "Drag and Throw with Weight";
pub const FRAMERATE_LIMIT: u32 = 60;

pub const BACKGROUND: Color = Color::WHITE;

/// Added to `vy` every frame, scaled by the body's mass.
pub const GRAVITY: f64 = 0.8;
pub const FRICTION: f64 = 0.99;
/// Fraction of the velocity kept (and reversed) when a body hits a wall.
pub const BOUNCE: f64 = 0.3;
/// Named restitution of a body-body contact. The pair exchange in
/// [`crate::collision::resolve`] is fully elastic and does not read it.
pub const RESTITUTION: f64 = BOUNCE;
/// Pointer delta (pixels per frame) to throw force.
pub const THROW_SENSITIVITY: f64 = 0.3;

/// Startup state of one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySpec {
    pub position: DVec2,
    pub radius: f64,
    pub mass: f64,
    pub color: Color,
}

/// Bodies in priority order: on a pointer press the first entry is hit-tested first.
pub const INITIAL_BODIES: [BodySpec; 2] = [
    BodySpec {
        position: DVec2::new(200.0, 300.0),
        radius: 30.0,
        mass: 0.1,
        color: Color::RED,
    },
    BodySpec {
        position: DVec2::new(600.0, 300.0),
        radius: 30.0,
        mass: 2.0,
        color: Color::BLUE,
    },
];
