//! The parallax forest on a fixed step per tick, with zoom.
//!
//! Left and right scroll every layer by its speed times a constant step for
//! each tick the key is held. Up and down scale the layers around the window
//! centre.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::demos::parallax::spawn_layers;
use crate::resources::gameconfig::GameConfig;
use crate::resources::parallaxzoom::ParallaxZoom;
use crate::resources::sceneinfo::SceneInfo;
use crate::resources::scrollmode::ScrollMode;
use crate::resources::viewport::Viewport;

pub const TITLE: &str = "Parallax scrolling with zoom";
pub const TEXTURES: &[(&str, &str)] = &[
    ("sky", "layers/sky.png"),
    ("bg_decor", "layers/bg_decor.png"),
    ("middle_decor", "layers/middle_decor.png"),
    ("foreground", "layers/foreground.png"),
    ("ground", "layers/ground.png"),
];

/// Texture offset per tick before the layer's own speed.
pub const SCROLL_STEP: f32 = 0.01;

pub fn populate(world: &mut World, config: &GameConfig) -> Result<(), String> {
    world.insert_resource(Viewport::pixels(
        config.window_width as i32,
        config.window_height as i32,
    ));
    world.insert_resource(SceneInfo::new(TITLE, Color::SKYBLUE));
    world.insert_resource(ScrollMode::Stepped { step: SCROLL_STEP });
    world.insert_resource(ParallaxZoom::default());
    spawn_layers(world);
    Ok(())
}
