//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the world. Components define data such as position, sprite placement,
//! animation cursors and walking parameters.
//!
//! Submodules overview:
//! - [`animation`] – per-instance frame cursor and walking motion
//! - [`clicktriangle`] – flat-coloured triangle spawned by mouse clicks
//! - [`mapposition`] – world-space position and the move proposed for it this tick
//! - [`parallax`] – horizontally repeating background layer with its own speed
//! - [`sprite`] – textured quad placement, with horizontal mirroring
//! - [`walkcontroller`] – keyboard walking, edge limits and map bounds
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod clicktriangle;
pub mod mapposition;
pub mod parallax;
pub mod sprite;
pub mod walkcontroller;
pub mod zindex;
