//! Five fixed triangles in a row, shaded from blue to orange.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::components::clicktriangle::ClickTriangle;
use crate::components::mapposition::MapPosition;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::sceneinfo::SceneInfo;
use crate::resources::viewport::Viewport;

pub const TITLE: &str = "Five triangles";

const WORLD_WIDTH: f32 = 800.0;
const WORLD_HEIGHT: f32 = 600.0;
pub const COUNT: usize = 5;
const FIRST_X: f32 = 100.0;
const SPACING: f32 = 120.0;
const ROW_Y: f32 = 300.0;
/// Width and height of each triangle.
const SIZE: f32 = 100.0;

fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Colour of triangle `i`: red and blue ramp in opposite directions.
pub fn shade(i: usize) -> Color {
    let i = i as f32;
    Color::new(
        unit_to_u8((i + 1.0) * 0.2),
        unit_to_u8(0.5),
        unit_to_u8(1.0 - i * 0.15),
        255,
    )
}

/// Centre of triangle `i`.
pub fn center(i: usize) -> (f32, f32) {
    (FIRST_X + i as f32 * SPACING, ROW_Y)
}

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

    for i in 0..COUNT {
        let (x, y) = center(i);
        world.spawn((
            MapPosition::new(x, y),
            ClickTriangle::new(shade(i), SIZE / 2.0, SIZE / 2.0),
            ZIndex(i as i32),
        ));
    }
    Ok(())
}
