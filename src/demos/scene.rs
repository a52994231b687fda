//! Farm scene: a grass background and props cut from one exterior sheet.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Rectangle};

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::sceneinfo::SceneInfo;
use crate::resources::viewport::Viewport;

pub const TITLE: &str = "Sprite scene";
pub const TEXTURES: &[(&str, &str)] = &[("grass", "grass.png"), ("exterior", "exterior.png")];

const WORLD_WIDTH: f32 = 800.0;
const WORLD_HEIGHT: f32 = 600.0;
const PROP_SCALE: f32 = 2.0;

/// Props as `(name, world x, world y, sheet region)`, drawn in this order.
pub const PROPS: [(&str, f32, f32, Rectangle); 4] = [
    (
        "house",
        400.0,
        300.0,
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: 145.0,
            height: 128.0,
        },
    ),
    (
        "tree",
        200.0,
        250.0,
        Rectangle {
            x: 0.0,
            y: 315.0,
            width: 61.0,
            height: 79.0,
        },
    ),
    (
        "fence",
        600.0,
        100.0,
        Rectangle {
            x: 160.0,
            y: 0.0,
            width: 39.0,
            height: 64.0,
        },
    ),
    (
        "scarecrow",
        550.0,
        500.0,
        Rectangle {
            x: 0.0,
            y: 542.0,
            width: 58.0,
            height: 61.0,
        },
    ),
];

pub fn populate(world: &mut World, config: &GameConfig) -> Result<(), String> {
    world.insert_resource(Viewport::ortho(
        0.0,
        WORLD_WIDTH,
        0.0,
        WORLD_HEIGHT,
        config.window_width as i32,
        config.window_height as i32,
    ));
    world.insert_resource(SceneInfo::new(TITLE, Color::new(60, 120, 60, 255)));

    world.spawn((
        MapPosition::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
        Sprite::new("grass", WORLD_WIDTH, WORLD_HEIGHT),
        ZIndex(0),
    ));
    for (z, (_name, x, y, region)) in PROPS.iter().enumerate() {
        let sprite = Sprite::new(
            "exterior",
            region.width * PROP_SCALE,
            region.height * PROP_SCALE,
        )
        .with_region(region.x, region.y, region.width, region.height);
        world.spawn((MapPosition::new(*x, *y), sprite, ZIndex(z as i32 + 1)));
    }
    Ok(())
}
