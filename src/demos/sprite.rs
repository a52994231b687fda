//! Animated walker over a scrolling background.
//!
//! Pixel-space world (800 x 600 units, y-up). The walker uses a 3 x 3 atlas
//! drawn at 1.5x, rows: 0 left/up, 1 right, 2 down. Arrow keys stop at the
//! screen edge, WASD does not.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{Color, Vector2};

use crate::components::animation::AnimationState;
use crate::components::mapposition::{MapPosition, PendingMove};
use crate::components::parallax::ParallaxLayer;
use crate::components::sprite::{PlacedInstance, Sprite};
use crate::components::walkcontroller::{RowMap, ScreenEdgeBounds, WalkController};
use crate::components::zindex::ZIndex;
use crate::demos::cell_world_size;
use crate::resources::atlasstore::AtlasStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::sceneinfo::SceneInfo;
use crate::resources::scrollmode::ScrollMode;
use crate::resources::viewport::Viewport;

pub const TITLE: &str = "Animated sprite";
pub const TEXTURES: &[(&str, &str)] = &[("walker", "walker.png"), ("background", "sprite_bg.png")];

const WORLD_WIDTH: f32 = 800.0;
const WORLD_HEIGHT: f32 = 600.0;
const WALKER_FRAMES: usize = 3;
const WALKER_ROWS: usize = 3;
const WALKER_SCALE: f32 = 1.5;
const WALKER_START: Vector2 = Vector2 { x: 400.0, y: 150.0 };
/// World units per second.
const WALKER_SPEED: f32 = 150.0;
const BACKGROUND_SPEED: f32 = 0.1;

pub fn rows() -> RowMap {
    RowMap::new(0, 2, 0, 1)
}

pub fn edges() -> ScreenEdgeBounds {
    ScreenEdgeBounds::new(
        Vector2 { x: -20.0, y: -20.0 },
        Vector2 {
            x: WORLD_WIDTH + 20.0,
            y: 420.0,
        },
    )
}

pub fn populate(world: &mut World, config: &GameConfig) -> Result<(), String> {
    world
        .resource_mut::<AtlasStore>()
        .register("walker", WALKER_FRAMES, WALKER_ROWS)?;

    world.insert_resource(Viewport::ortho(
        0.0,
        WORLD_WIDTH,
        0.0,
        WORLD_HEIGHT,
        config.window_width as i32,
        config.window_height as i32,
    ));
    world.insert_resource(SceneInfo::new(TITLE, Color::DARKGRAY));
    world.insert_resource(ScrollMode::Timed { rate: 0.5 });

    let size = cell_world_size(world, "walker", WALKER_SCALE, Vector2 { x: 96.0, y: 96.0 });

    world.spawn((ParallaxLayer::new("background", BACKGROUND_SPEED), ZIndex(0)));
    world.spawn((
        PlacedInstance {
            position: MapPosition::new(WALKER_START.x, WALKER_START.y),
            sprite: Sprite::new("walker", size.x, size.y),
            animation: AnimationState::new("walker", config.animation_fps).with_row(1),
            z: ZIndex(1),
        },
        WalkController::new(WALKER_SPEED, rows()).with_edges(edges()),
        PendingMove::default(),
    ));

    info!(
        "Sprite demo ready: walker {:.0}x{:.0} at ({:.0}, {:.0})",
        size.x, size.y, WALKER_START.x, WALKER_START.y
    );
    Ok(())
}
