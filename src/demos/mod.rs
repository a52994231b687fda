//! Demo scenes.
//!
//! Every demo is plain ECS setup: [`Demo::populate`] inserts resources and
//! spawns entities, [`Demo::add_systems`] registers the per-tick logic it
//! needs. Neither touches Raylib, so scenes can be built and stepped in tests
//! on a bare [`World`]. Textures listed by [`Demo::textures`] are loaded by
//! the launcher before `populate` runs; when present, their sizes are used to
//! scale sprites.
//!
//! Submodules overview
//! - [`sprite`] – animated walker over a scrolling background
//! - [`tilemap`] – isometric map with a diamond-bounded walker and tile picking
//! - [`parallax`] – five layers scrolled at different rates under a walker
//! - [`steppedparallax`] – the same layers on a fixed step, with zoom
//! - [`colors`] – two-player colour matching game
//! - [`triangles`] – click to spawn coloured triangles
//! - [`trianglebuilder`] – click three points to close a triangle
//! - [`fivetriangles`] – a fixed row of shaded triangles
//! - [`scene`] – static composition cut from one sprite sheet

pub mod colors;
pub mod fivetriangles;
pub mod parallax;
pub mod scene;
pub mod sprite;
pub mod steppedparallax;
pub mod tilemap;
pub mod trianglebuilder;
pub mod triangles;

use bevy_ecs::prelude::*;
use clap::ValueEnum;
use raylib::prelude::Vector2;

use crate::resources::atlasstore::AtlasStore;
use crate::resources::clickvertices::ClickVertices;
use crate::resources::colormatch::ColorMatchGame;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::isomap::IsoMap;
use crate::resources::parallaxzoom::ParallaxZoom;
use crate::resources::scrollmode::ScrollMode;
use crate::resources::texturestore::TextureStore;
use crate::resources::tileselection::TileSelection;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation_cadence;
use crate::systems::colormatch::color_match_input;
use crate::systems::movement::bounded_movement;
use crate::systems::parallax::{parallax_scroll, parallax_zoom};
use crate::systems::tilepick::pick_tile;
use crate::systems::triangles::{build_triangle_from_clicks, spawn_click_triangles};
use crate::systems::walk::walk_controller;

/// Per-tick simulation, run after the input snapshot and before rendering.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Animated walker over a scrolling background
    Sprite,
    /// Isometric tile map with a walker
    Tilemap,
    /// Multi-layer parallax background with a walker
    Parallax,
    /// Parallax on a fixed step per tick, with up/down zoom
    ParallaxStepped,
    /// Two-player colour matching game
    Colors,
    /// Click to spawn triangles
    Triangles,
    /// Click three points to build a triangle
    TriangleBuilder,
    /// Five fixed triangles
    FiveTriangles,
    /// Static sprite scene
    Scene,
}

impl Demo {
    pub fn title(&self) -> &'static str {
        match self {
            Demo::Sprite => sprite::TITLE,
            Demo::Tilemap => tilemap::TITLE,
            Demo::Parallax => parallax::TITLE,
            Demo::ParallaxStepped => steppedparallax::TITLE,
            Demo::Colors => colors::TITLE,
            Demo::Triangles => triangles::TITLE,
            Demo::TriangleBuilder => trianglebuilder::TITLE,
            Demo::FiveTriangles => fivetriangles::TITLE,
            Demo::Scene => scene::TITLE,
        }
    }

    /// `(texture key, file name)` pairs, relative to the assets directory.
    pub fn textures(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Demo::Sprite => sprite::TEXTURES,
            Demo::Tilemap => tilemap::TEXTURES,
            Demo::Parallax => parallax::TEXTURES,
            Demo::ParallaxStepped => steppedparallax::TEXTURES,
            Demo::Colors | Demo::Triangles | Demo::TriangleBuilder | Demo::FiveTriangles => &[],
            Demo::Scene => scene::TEXTURES,
        }
    }

    /// Insert the demo's resources and spawn its entities.
    pub fn populate(&self, world: &mut World, config: &GameConfig) -> Result<(), String> {
        insert_common_resources(world);
        match self {
            Demo::Sprite => sprite::populate(world, config),
            Demo::Tilemap => tilemap::populate(world, config),
            Demo::Parallax => parallax::populate(world, config),
            Demo::ParallaxStepped => steppedparallax::populate(world, config),
            Demo::Colors => colors::populate(world, config),
            Demo::Triangles => triangles::populate(world, config),
            Demo::TriangleBuilder => trianglebuilder::populate(world, config),
            Demo::FiveTriangles => fivetriangles::populate(world, config),
            Demo::Scene => scene::populate(world, config),
        }
    }

    /// Register this demo's systems in [`SimulationSet`].
    pub fn add_systems(&self, schedule: &mut Schedule) {
        add_simulation_systems(schedule);
        match self {
            Demo::Tilemap => {
                schedule.add_systems(
                    pick_tile
                        .run_if(resource_exists::<IsoMap>.and(resource_exists::<TileSelection>))
                        .after(walk_controller)
                        .before(bounded_movement)
                        .in_set(SimulationSet),
                );
            }
            Demo::ParallaxStepped => {
                schedule.add_systems(
                    parallax_zoom
                        .run_if(resource_exists::<ParallaxZoom>)
                        .in_set(SimulationSet),
                );
            }
            Demo::Colors => {
                schedule.add_systems(
                    color_match_input
                        .run_if(resource_exists::<ColorMatchGame>)
                        .in_set(SimulationSet),
                );
            }
            Demo::Triangles => {
                schedule.add_systems(spawn_click_triangles.in_set(SimulationSet));
            }
            Demo::TriangleBuilder => {
                schedule.add_systems(
                    build_triangle_from_clicks
                        .run_if(resource_exists::<ClickVertices>)
                        .in_set(SimulationSet),
                );
            }
            _ => {}
        }
    }
}

/// Movement, animation and scrolling shared by every demo.
///
/// Systems with nothing to act on are cheap no-ops.
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            walk_controller,
            (animation_cadence, bounded_movement),
            parallax_scroll,
        )
            .chain()
            .in_set(SimulationSet),
    );
}

/// Resources every demo's systems read, kept if already present.
pub fn insert_common_resources(world: &mut World) {
    world.init_resource::<WorldTime>();
    world.init_resource::<InputState>();
    world.init_resource::<AtlasStore>();
    world.init_resource::<TextureStore>();
    world.init_resource::<ScrollMode>();
}

/// World size of one atlas cell drawn at `scale` pixels per texel.
///
/// Falls back to `fallback` when the texture has not been loaded.
pub fn cell_world_size(world: &World, key: &str, scale: f32, fallback: Vector2) -> Vector2 {
    let size = world.get_resource::<TextureStore>().and_then(|t| t.size(key));
    let grid = world.get_resource::<AtlasStore>().and_then(|a| a.get(key).copied());
    match (size, grid) {
        (Some(size), Some(grid)) => {
            let cell = grid.cell_size(size.x, size.y);
            Vector2 {
                x: cell.x * scale,
                y: cell.y * scale,
            }
        }
        (Some(size), None) => Vector2 {
            x: size.x * scale,
            y: size.y * scale,
        },
        _ => fallback,
    }
}
