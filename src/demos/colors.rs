use bevy_ecs::prelude::*;
use fastrand::Rng;
use raylib::prelude::Color;

use crate::resources::colormatch::ColorMatchGame;
use crate::resources::gameconfig::GameConfig;
use crate::resources::sceneinfo::SceneInfo;
use crate::resources::viewport::Viewport;

pub const TITLE: &str = "Colour match";

/// Normalised device coordinates over the whole window, with a fresh board.
pub fn populate(world: &mut World, config: &GameConfig) -> Result<(), String> {
    world.insert_resource(Viewport::ortho(
        -1.0,
        1.0,
        -1.0,
        1.0,
        config.window_width as i32,
        config.window_height as i32,
    ));
    let mut info = SceneInfo::new(TITLE, Color::new(25, 25, 25, 255));
    info.show_fps = false;
    world.insert_resource(info);
    world.insert_resource(ColorMatchGame::new(&mut Rng::new()));
    Ok(())
}
