//! Two circular bodies that can be grabbed with the pointer and thrown at
//! each other. They fall, slow down, bounce off the walls and collide
//! elastically.

pub mod body;
pub mod collision;
pub mod components;
pub mod constants;
pub mod drag;
pub mod engine;
pub mod frontend;
pub mod renderer;
pub mod systems;

pub use body::{Body, BodyError};
pub use components::Arena;
pub use drag::{InputEvent, PointerState};
pub use engine::SimulationContext;
