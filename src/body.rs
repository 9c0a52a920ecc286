use std::fmt;

use glam::DVec2;

use crate::components::Arena;
use crate::constants::{BOUNCE, FRICTION, GRAVITY};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyError {
    NonPositiveRadius(f64),
    NonPositiveMass(f64),
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRadius(r) => write!(f, "body radius must be positive, got {r}"),
            Self::NonPositiveMass(m) => write!(f, "body mass must be positive, got {m}"),
        }
    }
}

impl std::error::Error for BodyError {}

/// A circular mass that can be thrown around with the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: DVec2,
    pub velocity: DVec2,
    radius: f64,
    mass: f64,
    dragging: bool,
    /// pointer - centre, captured when the drag started
    drag_offset: DVec2,
}

impl Body {
    pub fn new(position: DVec2, radius: f64, mass: f64) -> Result<Self, BodyError> {
        // NaN fails both comparisons
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(BodyError::NonPositiveRadius(radius));
        }

        if !(mass > 0.0 && mass.is_finite()) {
            return Err(BodyError::NonPositiveMass(mass));
        }

        Ok(Self {
            position,
            velocity: DVec2::ZERO,
            radius,
            mass,
            dragging: false,
            drag_offset: DVec2::ZERO,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_offset(&self) -> DVec2 {
        self.drag_offset
    }

    pub fn stop(&mut self) {
        self.velocity = DVec2::ZERO;
    }

    /// Advances the body by one frame and keeps it inside `arena`.
    ///
    /// Gravity is multiplied by the mass, so heavier bodies fall faster.
    pub fn integrate(&mut self, arena: &Arena) {
        if !self.dragging {
            self.velocity.y += GRAVITY * self.mass;
        }

        self.velocity *= FRICTION;
        self.position += self.velocity;

        self.reflect(arena);
    }

    fn reflect(&mut self, Arena { width, height }: &Arena) {
        let r = self.radius;

        if self.position.x - r <= 0.0 {
            self.position.x = r;
            self.velocity.x *= -BOUNCE;
        }
        if self.position.x + r >= *width {
            self.position.x = width - r;
            self.velocity.x *= -BOUNCE;
        }

        if self.position.y - r <= 0.0 {
            self.position.y = r;
            self.velocity.y *= -BOUNCE;
        }
        if self.position.y + r >= *height {
            self.position.y = height - r;
            self.velocity.y *= -BOUNCE;
        }
    }

    /// Checks the pointer against the bounding square of the circle, not the
    /// circle itself.
    pub fn contains(&self, pointer: DVec2) -> bool {
        let min = self.position - self.radius;
        let max = self.position + self.radius;

        (min.x <= pointer.x && pointer.x <= max.x) && (min.y <= pointer.y && pointer.y <= max.y)
    }

    /// Returns true if the pointer grabbed the body.
    pub fn begin_drag(&mut self, pointer: DVec2) -> bool {
        if !self.contains(pointer) {
            return false;
        }

        self.dragging = true;
        self.drag_offset = pointer - self.position;
        true
    }

    pub fn move_drag(&mut self, pointer: DVec2) {
        if self.dragging {
            self.position = pointer - self.drag_offset;
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Lighter bodies gain more speed from the same force.
    pub fn apply_impulse(&mut self, force: DVec2) {
        self.velocity += force / self.mass;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARENA: Arena = Arena::new(800.0, 600.0);

    fn ball(x: f64, y: f64) -> Body {
        Body::new(DVec2::new(x, y), 30.0, 0.1).unwrap()
    }

    #[test]
    fn rejects_bad_radius_and_mass() {
        assert_eq!(
            Body::new(DVec2::ZERO, 0.0, 1.0),
            Err(BodyError::NonPositiveRadius(0.0))
        );
        assert_eq!(
            Body::new(DVec2::ZERO, 10.0, -2.0),
            Err(BodyError::NonPositiveMass(-2.0))
        );
        assert!(Body::new(DVec2::ZERO, f64::NAN, 1.0).is_err());
        assert!(Body::new(DVec2::ZERO, 10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn gravity_scales_with_mass() {
        let mut body = ball(200.0, 300.0);
        body.integrate(&ARENA);

        let expected_vy = GRAVITY * 0.1 * FRICTION;
        assert!((body.velocity.y - expected_vy).abs() < 1e-12);
        assert!((body.position.y - (300.0 + expected_vy)).abs() < 1e-12);
        assert_eq!(body.position.x, 200.0);

        let mut heavy = Body::new(DVec2::new(200.0, 300.0), 30.0, 2.0).unwrap();
        heavy.integrate(&ARENA);
        assert!(heavy.velocity.y > body.velocity.y);
    }

    #[test]
    fn dragged_body_ignores_gravity() {
        let mut body = ball(200.0, 300.0);
        assert!(body.begin_drag(DVec2::new(210.0, 290.0)));

        body.integrate(&ARENA);
        assert_eq!(body.velocity, DVec2::ZERO);
        assert_eq!(body.position, DVec2::new(200.0, 300.0));
    }

    #[test]
    fn floor_bounce_is_lossy() {
        let mut body = ball(400.0, 570.0);
        body.velocity.y = 2.0;
        body.integrate(&ARENA);

        let vy_in = (2.0 + GRAVITY * 0.1) * FRICTION;
        assert_eq!(body.position.y, 570.0);
        assert!(body.velocity.y < 0.0);
        assert!((body.velocity.y + BOUNCE * vy_in).abs() < 1e-12);
    }

    #[test]
    fn walls_clamp_both_axes() {
        let mut body = ball(10.0, 10.0);
        body.velocity = DVec2::new(-5.0, -5.0);
        body.integrate(&ARENA);

        assert_eq!(body.position, DVec2::new(30.0, 30.0));
        assert!(body.velocity.x > 0.0);
        assert!(body.velocity.y > 0.0);

        let mut body = ball(790.0, 300.0);
        body.velocity.x = 50.0;
        body.integrate(&ARENA);
        assert_eq!(body.position.x, 770.0);
        assert!(body.velocity.x < 0.0);
    }

    #[test]
    fn hit_test_uses_bounding_square() {
        let mut body = ball(100.0, 100.0);

        // corner of the square, outside the circle
        assert!(body.contains(DVec2::new(129.0, 129.0)));
        assert!(body.contains(DVec2::new(130.0, 70.0)));
        assert!(!body.contains(DVec2::new(131.0, 100.0)));

        assert!(!body.begin_drag(DVec2::new(0.0, 0.0)));
        assert!(!body.is_dragging());

        assert!(body.begin_drag(DVec2::new(120.0, 90.0)));
        assert_eq!(body.drag_offset(), DVec2::new(20.0, -10.0));
    }

    #[test]
    fn move_drag_keeps_offset() {
        let mut body = ball(100.0, 100.0);

        body.move_drag(DVec2::new(500.0, 500.0));
        assert_eq!(body.position, DVec2::new(100.0, 100.0));

        body.begin_drag(DVec2::new(110.0, 95.0));
        body.move_drag(DVec2::new(310.0, 195.0));
        assert_eq!(body.position, DVec2::new(300.0, 200.0));
    }

    #[test]
    fn end_drag_is_idempotent() {
        let mut body = ball(100.0, 100.0);
        body.begin_drag(DVec2::new(100.0, 100.0));

        body.end_drag();
        let once = body;
        body.end_drag();

        assert_eq!(body, once);
        assert!(!body.is_dragging());
    }

    #[test]
    fn impulse_divides_by_mass() {
        let mut light = ball(100.0, 100.0);
        let mut heavy = Body::new(DVec2::new(100.0, 100.0), 30.0, 2.0).unwrap();

        light.apply_impulse(DVec2::new(1.0, -2.0));
        heavy.apply_impulse(DVec2::new(1.0, -2.0));

        assert!((light.velocity - DVec2::new(10.0, -20.0)).length() < 1e-12);
        assert!((heavy.velocity - DVec2::new(0.5, -1.0)).length() < 1e-12);
    }
}
