//! Demo systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance walking animations at their own frame rate
//! - [`colormatch`] – mouse clicks and hover for the colour matching game
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – commit proposed moves, rejecting those off the map
//! - [`parallax`] – scroll parallax layers with left/right, zoom with up/down
//! - [`render`] – draw layers, tiles, sprites and overlays using Raylib
//! - [`tilepick`] – select the map cell under a left click
//! - [`time`] – update simulation time and delta
//! - [`triangles`] – spawn triangles from left clicks
//! - [`walk`] – turn directional input into facing, flip and a proposed move

pub mod animation;
pub mod colormatch;
pub mod input;
pub mod movement;
pub mod parallax;
pub mod render;
pub mod tilepick;
pub mod time;
pub mod triangles;
pub mod walk;
