use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::debug;
use raylib::prelude::{Color, Vector2};

use crate::components::clicktriangle::ClickTriangle;
use crate::components::mapposition::MapPosition;
use crate::components::zindex::ZIndex;
use crate::resources::clickvertices::ClickVertices;
use crate::resources::input::InputState;
use crate::resources::viewport::Viewport;

/// Triangle half extents as a fraction of the visible world size.
pub const TRIANGLE_SIZE_FRACTION: f32 = 0.1;

/// Triangle sized for the current view.
pub fn triangle_for_view(viewport: &Viewport, color: Color) -> ClickTriangle {
    ClickTriangle::new(
        color,
        (viewport.right - viewport.left) * TRIANGLE_SIZE_FRACTION,
        (viewport.top - viewport.bottom) * TRIANGLE_SIZE_FRACTION,
    )
}

fn random_color(rng: &mut Rng) -> Color {
    Color::new(rng.u8(..), rng.u8(..), rng.u8(..), 255)
}

/// Random colour with every channel in `[0.2, 1.0]`, never too dark to see.
pub fn random_bright_color(rng: &mut Rng) -> Color {
    let mut channel = || ((0.2 + rng.f32() * 0.8) * 255.0).round() as u8;
    Color::new(channel(), channel(), channel(), 255)
}

/// Spawn a randomly coloured triangle at every left click.
pub fn spawn_click_triangles(
    mut commands: Commands,
    input: Res<InputState>,
    viewport: Res<Viewport>,
    existing: Query<(), With<ClickTriangle>>,
    mut rng: Local<Rng>,
) {
    if !input.mouse.left_pressed {
        return;
    }
    let Vector2 { x, y } = viewport.screen_to_world(input.mouse.position);
    let triangle = triangle_for_view(&viewport, random_color(&mut rng));
    // Later clicks draw on top
    let z = existing.iter().count() as i32;
    commands.spawn((MapPosition::new(x, y), triangle, ZIndex(z)));
    debug!("Spawned triangle #{} at ({:.0}, {:.0})", z, x, y);
}

/// Collect left clicks and close a triangle through every three of them.
pub fn build_triangle_from_clicks(
    mut commands: Commands,
    input: Res<InputState>,
    viewport: Res<Viewport>,
    mut vertices: ResMut<ClickVertices>,
    existing: Query<(), With<ClickTriangle>>,
    mut rng: Local<Rng>,
) {
    if !input.mouse.left_pressed {
        return;
    }
    let point = viewport.screen_to_world(input.mouse.position);
    let Some(corners) = vertices.push(point) else {
        debug!("Vertex {} at ({:.0}, {:.0})", vertices.points.len(), point.x, point.y);
        return;
    };
    let (center, triangle) = ClickTriangle::through(random_bright_color(&mut rng), corners);
    let z = existing.iter().count() as i32;
    commands.spawn((MapPosition::new(center.x, center.y), triangle, ZIndex(z)));
    debug!("Closed triangle #{} around ({:.0}, {:.0})", z, center.x, center.y);
}
