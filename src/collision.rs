use crate::body::Body;

/// Exchanges an elastic impulse along the centre line of two touching bodies.
///
/// Returns true if velocities changed. Bodies are never pushed apart, so an
/// overlapping pair that is already separating is left alone until it clears.
/// Coincident centres have no collision normal and are skipped.
pub fn resolve(a: &mut Body, b: &mut Body) -> bool {
    let offset = a.position - b.position;
    let distance = offset.length();

    if distance >= a.radius() + b.radius() || distance == 0.0 {
        return false;
    }

    let normal = offset / distance;
    let dot = (a.velocity - b.velocity).dot(normal);

    if dot > 0.0 {
        return false;
    }

    let (m1, m2) = (a.mass(), b.mass());
    let impulse = (2.0 * dot) / (m1 + m2);

    a.velocity -= impulse * m2 * normal;
    b.velocity += impulse * m1 * normal;

    true
}
