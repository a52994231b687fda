use bevy_ecs::prelude::{Bundle, Component};
use raylib::prelude::{Rectangle, Vector2};

use crate::components::animation::AnimationState;
use crate::components::mapposition::MapPosition;
use crate::components::zindex::ZIndex;

/// Sprite is identified by a texture key and its size in world units.
///
/// The texture cell drawn is chosen, in order, by the entity's
/// [`AnimationState`] (atlas frame), by `region` (fixed pixel sub-rectangle of
/// a shared sheet) or, when neither is present, by the whole texture.
///
/// Horizontal flipping mirrors the placement quad: see [`Sprite::extents`].
/// The texture cell being sampled never changes with `flip_h`.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub region: Option<Rectangle>,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            region: None,
            flip_h: false,
        }
    }

    /// Draw a fixed pixel region of the texture instead of all of it.
    pub fn with_region(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.region = Some(Rectangle {
            x,
            y,
            width,
            height,
        });
        self
    }

    /// Signed world extents of the placement quad.
    ///
    /// The X extent is negated while `flip_h` is set.
    pub fn extents(&self) -> Vector2 {
        Vector2 {
            x: if self.flip_h { -self.width } else { self.width },
            y: self.height,
        }
    }

    /// Placement of this sprite anchored at `position`.
    pub fn placement(&self, position: Vector2) -> Placement {
        Placement {
            center: position,
            extents: self.extents(),
        }
    }
}

/// World-space transform of a drawn quad: translation plus signed scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub center: Vector2,
    pub extents: Vector2,
}

/// An atlas-backed sprite placed in the world with its own animation cursor.
#[derive(Bundle)]
pub struct PlacedInstance {
    pub position: MapPosition,
    pub sprite: Sprite,
    pub animation: AnimationState,
    pub z: ZIndex,
}
