use bevy_ecs::prelude::*;

use crate::components::parallax::ParallaxLayer;
use crate::resources::input::InputState;
use crate::resources::parallaxzoom::ParallaxZoom;
use crate::resources::scrollmode::ScrollMode;
use crate::resources::worldtime::WorldTime;

/// Signed scroll amount for this tick: forward on right, back on left.
///
/// Both or neither held gives zero.
pub fn scroll_amount(input: &InputState, mode: ScrollMode, dt: f32) -> f32 {
    match (input.right(), input.left()) {
        (true, false) => mode.amount(dt),
        (false, true) => -mode.amount(dt),
        _ => 0.0,
    }
}

/// Scroll every [`ParallaxLayer`] by its own speed.
pub fn parallax_scroll(
    mut layers: Query<&mut ParallaxLayer>,
    input: Res<InputState>,
    mode: Res<ScrollMode>,
    time: Res<WorldTime>,
) {
    let amount = scroll_amount(&input, *mode, time.delta);
    if amount == 0.0 {
        return;
    }
    for mut layer in layers.iter_mut() {
        layer.scroll(amount);
    }
}

/// Zoom the layers in while up is held and out while down is held.
pub fn parallax_zoom(mut zoom: ResMut<ParallaxZoom>, input: Res<InputState>) {
    let (zoom_in, zoom_out) = (input.up(), input.down());
    if zoom_in || zoom_out {
        zoom.apply(zoom_in, zoom_out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_amount_direction() {
        let mode = ScrollMode::Timed { rate: 0.5 };
        let mut input = InputState::default();
        assert_eq!(scroll_amount(&input, mode, 0.1), 0.0);

        input.maindirection_right.active = true;
        assert!((scroll_amount(&input, mode, 0.1) - 0.05).abs() < 1e-6);

        input.secondarydirection_left.active = true;
        assert_eq!(scroll_amount(&input, mode, 0.1), 0.0);

        input.maindirection_right.active = false;
        assert!((scroll_amount(&input, mode, 0.1) + 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_stepped_ignores_dt() {
        let mode = ScrollMode::Stepped { step: 0.01 };
        let mut input = InputState::default();
        input.secondarydirection_right.active = true;
        assert_eq!(scroll_amount(&input, mode, 0.0), 0.01);
        assert_eq!(scroll_amount(&input, mode, 1.0), 0.01);
    }
}
