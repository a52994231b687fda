//! Isometric tile map with a free-roaming walker.
//!
//! The map is read from `isomap.json` in the assets directory. A missing or
//! invalid file falls back to the built-in 3 x 3 map. The walker may only
//! step to positions inside the map's diamond. A left click selects the tile
//! under the cursor and sends the walker to its centre.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::{Color, Vector2};

use crate::components::animation::AnimationState;
use crate::components::mapposition::{MapPosition, PendingMove};
use crate::components::sprite::{PlacedInstance, Sprite};
use crate::components::walkcontroller::{DiamondBounded, RowMap, WalkController};
use crate::components::zindex::ZIndex;
use crate::resources::atlasstore::AtlasStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::isomap::IsoMap;
use crate::resources::sceneinfo::SceneInfo;
use crate::resources::tileselection::TileSelection;
use crate::resources::viewport::Viewport;

pub const TITLE: &str = "Isometric tile map";
pub const TEXTURES: &[(&str, &str)] = &[("tileset", "tileset_iso.png"), ("walker", "walker.png")];
pub const MAP_FILE: &str = "isomap.json";

/// Tiles in the tileset strip.
const TILESET_FRAMES: usize = 7;
const WALK_INSET: f32 = 0.95;
const WALKER_SIZE: f32 = 0.8;
/// World units per second.
const WALKER_SPEED: f32 = 1.5;

/// The built-in 3 x 3 map.
pub fn default_map() -> Result<IsoMap, String> {
    IsoMap::new(3, 3, 2.0, 1.0, 0.25, "tileset", vec![1, 3, 6, 3, 4, 2, 4, 5, 2])
}

pub fn rows() -> RowMap {
    RowMap::new(2, 1, 0, 0)
}

fn load_map(config: &GameConfig) -> Result<IsoMap, String> {
    let path = config.asset_path(MAP_FILE);
    match IsoMap::load_from_file(&path) {
        Ok(map) => {
            info!("Loaded {}x{} map from {:?}", map.rows, map.cols, path);
            Ok(map)
        }
        Err(e) => {
            warn!("{}; using the built-in map", e);
            default_map()
        }
    }
}

pub fn populate(world: &mut World, config: &GameConfig) -> Result<(), String> {
    let map = load_map(config)?;
    {
        let mut atlases = world.resource_mut::<AtlasStore>();
        atlases.register(map.tileset.clone(), TILESET_FRAMES, 1)?;
        atlases.register("walker", 3, 3)?;
    }

    world.insert_resource(Viewport::ortho(
        -4.0,
        4.0,
        -1.0,
        5.0,
        config.window_width as i32,
        config.window_height as i32,
    ));
    world.insert_resource(SceneInfo::new(TITLE, Color::new(30, 30, 40, 255)));

    let bounds = map.walk_bounds(WALK_INSET);
    let start: Vector2 = map.to_screen(0, 0);
    world.spawn((
        PlacedInstance {
            position: MapPosition::new(start.x, start.y),
            sprite: Sprite::new("walker", WALKER_SIZE, WALKER_SIZE),
            animation: AnimationState::new("walker", config.animation_fps).with_row(1),
            z: ZIndex(1),
        },
        WalkController::new(WALKER_SPEED, rows()),
        DiamondBounded(bounds),
        PendingMove::default(),
    ));
    world.insert_resource(map);
    world.insert_resource(TileSelection::default());
    Ok(())
}
