//! Click three points to close a triangle through them.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::resources::clickvertices::ClickVertices;
use crate::resources::gameconfig::GameConfig;
use crate::resources::sceneinfo::SceneInfo;
use crate::resources::viewport::Viewport;

pub const TITLE: &str = "Click three points for a triangle";

const WORLD_WIDTH: f32 = 800.0;
const WORLD_HEIGHT: f32 = 600.0;

pub fn populate(world: &mut World, config: &GameConfig) -> Result<(), String> {
    world.insert_resource(Viewport::ortho(
        0.0,
        WORLD_WIDTH,
        0.0,
        WORLD_HEIGHT,
        config.window_width as i32,
        config.window_height as i32,
    ));
    world.insert_resource(SceneInfo::new(TITLE, Color::new(51, 77, 77, 255)));
    world.insert_resource(ClickVertices::default());
    Ok(())
}
