use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::components::mapposition::MapPosition;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::sceneinfo::SceneInfo;
use crate::resources::viewport::Viewport;
use crate::systems::triangles::triangle_for_view;

pub const TITLE: &str = "Click triangles";

const WORLD_WIDTH: f32 = 800.0;
const WORLD_HEIGHT: f32 = 600.0;

/// An 800 x 600 world with one green triangle in the middle.
pub fn populate(world: &mut World, config: &GameConfig) -> Result<(), String> {
    let viewport = Viewport::ortho(
        0.0,
        WORLD_WIDTH,
        0.0,
        WORLD_HEIGHT,
        config.window_width as i32,
        config.window_height as i32,
    );
    world.insert_resource(viewport);
    world.insert_resource(SceneInfo::new(TITLE, Color::BLACK));

    world.spawn((
        MapPosition::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
        triangle_for_view(&viewport, Color::GREEN),
        ZIndex(-1),
    ));
    Ok(())
}
