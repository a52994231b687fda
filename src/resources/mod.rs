//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, asset stores,
//! demo state and configuration. Each submodule documents the semantics and
//! intended usage of its resource(s).
//!
//! Overview
//! - `atlasstore` – sprite atlas layouts and frame addressing
//! - `clickvertices` – clicked points waiting to close a triangle
//! - `colormatch` – board, turns and scores of the colour matching game
//! - `gameconfig` – window, animation and asset settings from `config.ini`
//! - `input` – per-frame keyboard and mouse snapshot
//! - `isomap` – isometric tile map and its walkable diamond
//! - `parallaxzoom` – scale of the parallax layers
//! - `sceneinfo` – title and clear colour of the running demo
//! - `scrollmode` – how parallax layers follow input
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tileselection` – map cell picked with the mouse
//! - `viewport` – world rectangle shown in the window
//! - `worldtime` – simulation time and delta
pub mod atlasstore;
pub mod clickvertices;
pub mod colormatch;
pub mod gameconfig;
pub mod input;
pub mod isomap;
pub mod parallaxzoom;
pub mod sceneinfo;
pub mod scrollmode;
pub mod texturestore;
pub mod tileselection;
pub mod viewport;
pub mod worldtime;
