/// Priority of a body. Bodies are always visited in ascending order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub color: sfml::graphics::Color,
}

/// Reflection bounds, `(0, 0)` to `(width, height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
