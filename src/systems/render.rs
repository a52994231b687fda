//! Rendering.
//!
//! [`render_system`] is an exclusive system: it borrows the Raylib handle out
//! of the world, opens a drawing scope and hands both to [`render_pass`].
//!
//! Draw order, back to front:
//! 1. [`ParallaxLayer`]s by [`ZIndex`], each covering the whole window
//! 2. The [`IsoMap`], far tiles first, the [`TileSelection`] tinted
//! 3. [`Sprite`]s by [`ZIndex`]
//! 4. [`ClickTriangle`]s by [`ZIndex`]
//! 5. The [`ColorMatchGame`] board, restart button and scores
//! 6. Overlay text from [`SceneInfo`]
//!
//! Anything whose texture is not in the [`TextureStore`] is skipped.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::AnimationState;
use crate::components::clicktriangle::ClickTriangle;
use crate::components::mapposition::MapPosition;
use crate::components::parallax::ParallaxLayer;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::atlasstore::AtlasStore;
use crate::resources::colormatch::{ColorMatchGame, Rgb};
use crate::resources::isomap::IsoMap;
use crate::resources::parallaxzoom::ParallaxZoom;
use crate::resources::sceneinfo::SceneInfo;
use crate::resources::texturestore::TextureStore;
use crate::resources::tileselection::TileSelection;
use crate::resources::viewport::Viewport;

const HOVER_BRIGHTEN: f32 = 1.2;
const STATUS_FONT_SIZE: i32 = 20;
const STATUS_TEXT_COLOR: Color = Color::RAYWHITE;
const SELECTED_TILE_TINT: Color = Color::new(255, 240, 140, 255);

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::new(
        (rgb.r.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.g.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.b.clamp(0.0, 1.0) * 255.0) as u8,
        255,
    )
}

/// Window rectangle of a y-up world rectangle whose `y` is its bottom edge.
fn world_box_to_screen(viewport: &Viewport, rect: &Rectangle) -> Rectangle {
    viewport.world_rect_to_screen(
        Vector2 {
            x: rect.x + rect.width / 2.0,
            y: rect.y + rect.height / 2.0,
        },
        Vector2 {
            x: rect.width,
            y: rect.height,
        },
    )
}

/// Texture cell drawn for a sprite: atlas frame, fixed region or the whole
/// texture, in that order. The width is negated for mirrored placements.
pub fn sprite_source_rect(
    sprite: &Sprite,
    animation: Option<&AnimationState>,
    atlases: &AtlasStore,
    tex_size: Vector2,
) -> Rectangle {
    let atlas_rect = animation.and_then(|state| {
        let grid = atlases.get(&state.atlas_key)?;
        if state.current_frame >= grid.frame_count() || state.current_row >= grid.row_count() {
            return None;
        }
        Some(state.uv_rect(grid).source_rect(tex_size.x, tex_size.y))
    });
    let mut src = atlas_rect.or(sprite.region).unwrap_or(Rectangle {
        x: 0.0,
        y: 0.0,
        width: tex_size.x,
        height: tex_size.y,
    });
    // draw_texture_pro rejects a negative destination width; flip the source instead
    if sprite.extents().x < 0.0 {
        src.width = -src.width;
    }
    src
}

/// Window rectangle of a parallax layer scaled by `scale` around the centre.
pub fn layer_dest_rect(viewport: &Viewport, scale: f32) -> Rectangle {
    let width = viewport.screen_w as f32 * scale;
    let height = viewport.screen_h as f32 * scale;
    Rectangle {
        x: (viewport.screen_w as f32 - width) / 2.0,
        y: (viewport.screen_h as f32 - height) / 2.0,
        width,
        height,
    }
}

fn draw_parallax(world: &mut World, d: &mut RaylibDrawHandle, viewport: &Viewport) {
    let mut layers: Vec<(ParallaxLayer, ZIndex)> = {
        let mut q = world.query::<(&ParallaxLayer, Option<&ZIndex>)>();
        q.iter(world)
            .map(|(layer, z)| (layer.clone(), z.copied().unwrap_or_default()))
            .collect()
    };
    layers.sort_by_key(|(_, z)| *z);

    let scale = world.get_resource::<ParallaxZoom>().map_or(1.0, |z| z.scale);
    let dest = layer_dest_rect(viewport, scale);
    let textures = world.resource::<TextureStore>();
    for (layer, _z) in layers.iter() {
        if let Some(tex) = textures.get(&layer.tex_key) {
            let src = layer.source_rect(tex.width as f32, tex.height as f32);
            d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        }
    }
}

fn draw_isomap(world: &World, d: &mut RaylibDrawHandle, viewport: &Viewport) {
    let Some(map) = world.get_resource::<IsoMap>() else {
        return;
    };
    let textures = world.resource::<TextureStore>();
    let atlases = world.resource::<AtlasStore>();
    let (Some(tex), Some(grid)) = (textures.get(&map.tileset), atlases.get(&map.tileset)) else {
        return;
    };

    let mut cells: Vec<(usize, usize, u32)> = map.cells().collect();
    // Larger row + col sits further up the screen, behind its neighbours
    cells.sort_by_key(|(row, col, _)| std::cmp::Reverse(row + col));

    let selected = world.get_resource::<TileSelection>().and_then(|s| s.cell);
    let size = Vector2 {
        x: map.tile_width,
        y: map.tile_height,
    };
    for (row, col, tile) in cells {
        let frame = tile as usize;
        if frame >= grid.frame_count() {
            continue;
        }
        let src = grid
            .uv_rect(frame, 0)
            .source_rect(tex.width as f32, tex.height as f32);
        let dest = viewport.world_rect_to_screen(map.to_screen(row, col), size);
        let tint = if selected == Some((row, col)) {
            SELECTED_TILE_TINT
        } else {
            Color::WHITE
        };
        d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, tint);
    }
}

fn draw_sprites(world: &mut World, d: &mut RaylibDrawHandle, viewport: &Viewport) {
    // Query: (Sprite, Position, ZIndex, AnimationState?)
    // Collect, sort by z, then draw.
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex, Option<AnimationState>)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex, Option<&AnimationState>)>();
        q.iter(world)
            .map(|(s, p, z, a)| (s.clone(), *p, *z, a.cloned()))
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z, _)| *z);

    let textures = world.resource::<TextureStore>();
    let atlases = world.resource::<AtlasStore>();
    for (sprite, pos, _z, animation) in to_draw.iter() {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        let tex_size = Vector2 {
            x: tex.width as f32,
            y: tex.height as f32,
        };
        let src = sprite_source_rect(sprite, animation.as_ref(), atlases, tex_size);
        let placement = sprite.placement(pos.pos);
        let dest = viewport.world_rect_to_screen(placement.center, placement.extents);
        d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }
}

fn draw_triangles(world: &mut World, d: &mut RaylibDrawHandle, viewport: &Viewport) {
    let mut triangles: Vec<(ClickTriangle, MapPosition, ZIndex)> = {
        let mut q = world.query::<(&ClickTriangle, &MapPosition, Option<&ZIndex>)>();
        q.iter(world)
            .map(|(t, p, z)| (*t, *p, z.copied().unwrap_or_default()))
            .collect()
    };
    triangles.sort_by_key(|(_, _, z)| *z);

    for (triangle, pos, _z) in triangles.iter() {
        let [a, b, c] = triangle.vertices(pos.pos);
        d.draw_triangle(
            viewport.world_to_screen(a),
            viewport.world_to_screen(b),
            viewport.world_to_screen(c),
            triangle.color,
        );
    }
}

fn draw_color_match(world: &World, d: &mut RaylibDrawHandle, viewport: &Viewport) {
    let Some(game) = world.get_resource::<ColorMatchGame>() else {
        return;
    };
    for cell in game.cells.iter().filter(|c| c.visible) {
        d.draw_rectangle_rec(world_box_to_screen(viewport, &cell.rect), rgb_to_color(cell.color));
    }

    let button_color = if game.button_hovered {
        game.button_color.brightened(HOVER_BRIGHTEN)
    } else {
        game.button_color
    };
    let button = world_box_to_screen(viewport, &game.restart_button);
    d.draw_rectangle_rec(button, rgb_to_color(button_color));
    d.draw_text(
        "RESTART",
        button.x as i32 + 8,
        button.y as i32 + 4,
        (button.height as i32 - 8).max(10),
        Color::WHITE,
    );

    let status = if game.game_over {
        match game.winner() {
            Some(p) => format!("Game over! Player {} wins!", p),
            None => "Game over! It's a tie!".to_string(),
        }
    } else {
        format!("Player {} to play", game.current_player)
    };
    let scores = format!(
        "P1: {}  P2: {}  Turn {}/{}",
        game.scores[0],
        game.scores[1],
        game.attempts,
        crate::resources::colormatch::MAX_ATTEMPTS
    );
    let origin = viewport.world_to_screen(game.status_origin());
    let (x, y) = (origin.x as i32, origin.y as i32);
    d.draw_text(&scores, x, y, STATUS_FONT_SIZE, STATUS_TEXT_COLOR);
    d.draw_text(&status, x, y + STATUS_FONT_SIZE + 4, STATUS_FONT_SIZE, STATUS_TEXT_COLOR);
}

/// Draw the whole frame.
pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    let viewport = *world.resource::<Viewport>();
    let clear_color = world
        .get_resource::<SceneInfo>()
        .map(|info| info.clear_color)
        .unwrap_or(Color::BLACK);
    d.clear_background(clear_color);

    draw_parallax(world, d, &viewport);
    draw_isomap(world, d, &viewport);
    draw_sprites(world, d, &viewport);
    draw_triangles(world, d, &viewport);
    draw_color_match(world, d, &viewport);

    if let Some(info) = world.get_resource::<SceneInfo>()
        && info.show_fps
    {
        d.draw_fps(viewport.screen_w - 90, viewport.screen_h - 24);
    }
}

/// Exclusive render system.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };
    {
        let mut d = rl.begin_drawing(&thread);
        render_pass(world, &mut d);
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}
