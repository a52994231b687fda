//! Spritelab library.
//!
//! Sprite-atlas frame addressing, animation cadence, isometric placement,
//! parallax scrolling and a colour matching game, expressed as ECS
//! components, resources and systems. Everything here except rendering and
//! input polling runs on a bare `World`, which is how the integration tests
//! drive it.

pub mod components;
pub mod demos;
pub mod resources;
pub mod systems;
