//! Five-layer parallax forest with a walker standing in the middle.
//!
//! Hold left or right to walk: the walker stays put, alternates two stride
//! poses and faces the way it walks, while the layers scroll past at their
//! own rates. Released, it goes back to its standing pose.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::components::animation::AnimationState;
use crate::components::mapposition::{MapPosition, PendingMove};
use crate::components::parallax::ParallaxLayer;
use crate::components::sprite::{PlacedInstance, Sprite};
use crate::components::walkcontroller::{RowMap, WalkController};
use crate::components::zindex::ZIndex;
use crate::resources::atlasstore::AtlasStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::sceneinfo::SceneInfo;
use crate::resources::scrollmode::ScrollMode;
use crate::resources::viewport::Viewport;

pub const TITLE: &str = "Parallax scrolling";
pub const TEXTURES: &[(&str, &str)] = &[
    ("sky", "layers/sky.png"),
    ("bg_decor", "layers/bg_decor.png"),
    ("middle_decor", "layers/middle_decor.png"),
    ("foreground", "layers/foreground.png"),
    ("ground", "layers/ground.png"),
    ("homer", "layers/homer.png"),
];

/// Back to front, with each layer's relative speed.
pub const LAYERS: [(&str, f32); 5] = [
    ("sky", 0.07),
    ("bg_decor", 0.15),
    ("middle_decor", 0.25),
    ("foreground", 0.35),
    ("ground", 0.5),
];

/// Standing pose followed by two stride poses, in one strip.
const WALKER_FRAMES: usize = 3;
const WALKER_WIDTH: f32 = 90.0;
const WALKER_HEIGHT: f32 = 144.0;
/// Below the window centre, in pixels.
const WALKER_DROP: f32 = 150.0;
/// Seconds between stride poses.
pub const STRIDE_SECONDS: f32 = 0.3;

/// Spawn the forest layers, back to front.
pub fn spawn_layers(world: &mut World) {
    for (z, (key, speed)) in LAYERS.iter().enumerate() {
        world.spawn((ParallaxLayer::new(*key, *speed), ZIndex(z as i32)));
    }
}

pub fn populate(world: &mut World, config: &GameConfig) -> Result<(), String> {
    world
        .resource_mut::<AtlasStore>()
        .register("homer", WALKER_FRAMES, 1)?;
    world.insert_resource(Viewport::pixels(
        config.window_width as i32,
        config.window_height as i32,
    ));
    world.insert_resource(SceneInfo::new(TITLE, Color::SKYBLUE));
    world.insert_resource(ScrollMode::Timed { rate: 0.5 });

    spawn_layers(world);
    world.spawn((
        PlacedInstance {
            position: MapPosition::new(
                config.window_width as f32 / 2.0,
                config.window_height as f32 / 2.0 - WALKER_DROP,
            ),
            sprite: Sprite::new("homer", WALKER_WIDTH, WALKER_HEIGHT),
            animation: AnimationState::new("homer", 1.0 / STRIDE_SECONDS).with_standing_frame(0),
            z: ZIndex(LAYERS.len() as i32),
        },
        WalkController::new(0.0, RowMap::new(0, 0, 0, 0)).horizontal_only(),
        PendingMove::default(),
    ));
    Ok(())
}
