use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::info;

use crate::resources::colormatch::ColorMatchGame;
use crate::resources::input::InputState;
use crate::resources::viewport::Viewport;

/// Drive the colour-match game from the mouse.
///
/// - Hovering the restart button highlights it.
/// - Right click, or left click on the button, starts a new board.
/// - Any other left click plays the cell under the cursor.
pub fn color_match_input(
    mut game: ResMut<ColorMatchGame>,
    input: Res<InputState>,
    viewport: Res<Viewport>,
    mut rng: Local<Rng>,
) {
    let point = viewport.screen_to_world(input.mouse.position);
    let hovered = game.button_hit(point);
    if game.button_hovered != hovered {
        game.button_hovered = hovered;
    }

    if input.mouse.right_pressed || (input.mouse.left_pressed && hovered) {
        game.restart(&mut rng);
        info!("Colour match restarted");
        return;
    }
    if input.mouse.left_pressed {
        game.select_at(point);
    }
}
