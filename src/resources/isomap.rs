//! Isometric tile map.
//!
//! Grid cells `(row, col)` are projected onto a diamond lattice:
//!
//! ```text
//! x = (col - row) * tile_width  / 2
//! y = (col + row) * tile_height / 2 + vertical_bias
//! ```
//!
//! Each cell stores a tile id, which is the frame index of the tile in the
//! tileset atlas (a single-row [`SpriteFrameGrid`](crate::resources::atlasstore::SpriteFrameGrid)).
//!
//! # Map File Format
//!
//! ```json
//! {
//!   "rows": 3,
//!   "cols": 3,
//!   "tile_width": 2.0,
//!   "tile_height": 1.0,
//!   "vertical_bias": 0.25,
//!   "tileset": "tileset",
//!   "tiles": [1, 3, 6, 3, 4, 2, 4, 5, 2]
//! }
//! ```
//!
//! `tiles` is row-major and must hold exactly `rows * cols` ids.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

/// Diamond-shaped walkable region.
///
/// A point is inside when `|dx| / half_width + |dy| / half_height <= 1`,
/// measured from `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiamondBounds {
    pub center: Vector2,
    pub half_width: f32,
    pub half_height: f32,
}

impl DiamondBounds {
    /// Bounds of a `width` x `height` diamond centered at `center`.
    pub fn new(center: Vector2, width: f32, height: f32) -> Self {
        Self {
            center,
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    pub fn contains(&self, point: Vector2) -> bool {
        let norm_x = (point.x - self.center.x).abs() / self.half_width;
        let norm_y = (point.y - self.center.y).abs() / self.half_height;
        norm_x + norm_y <= 1.0
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IsoMap {
    pub rows: usize,
    pub cols: usize,
    /// Width of one tile quad in world units.
    pub tile_width: f32,
    /// Height of one tile quad in world units.
    pub tile_height: f32,
    /// Added to every projected y.
    #[serde(default)]
    pub vertical_bias: f32,
    /// Texture/atlas key of the tileset.
    pub tileset: String,
    pub tiles: Vec<u32>,
}

impl IsoMap {
    pub fn new(
        rows: usize,
        cols: usize,
        tile_width: f32,
        tile_height: f32,
        vertical_bias: f32,
        tileset: impl Into<String>,
        tiles: Vec<u32>,
    ) -> Result<Self, String> {
        let map = Self {
            rows,
            cols,
            tile_width,
            tile_height,
            vertical_bias,
            tileset: tileset.into(),
            tiles,
        };
        map.validate()?;
        Ok(map)
    }

    /// Parse and validate a map from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let map: IsoMap =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse map JSON: {}", e))?;
        map.validate()?;
        Ok(map)
    }

    /// Read, parse and validate a map file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read map file {:?}: {}", path, e))?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err(format!(
                "Map must have at least one row and column, got {}x{}",
                self.rows, self.cols
            ));
        }
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.tile_width) || !positive(self.tile_height) {
            return Err(format!(
                "Tile size must be positive, got {}x{}",
                self.tile_width, self.tile_height
            ));
        }
        if !self.vertical_bias.is_finite() {
            return Err(format!("Vertical bias must be finite, got {}", self.vertical_bias));
        }
        if self.tiles.len() != self.rows * self.cols {
            return Err(format!(
                "Map {}x{} needs {} tiles, got {}",
                self.rows,
                self.cols,
                self.rows * self.cols,
                self.tiles.len()
            ));
        }
        Ok(())
    }

    /// Screen anchor (tile center) of a grid cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the map.
    pub fn to_screen(&self, row: usize, col: usize) -> Vector2 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) outside {}x{} map",
            row,
            col,
            self.rows,
            self.cols
        );
        Vector2 {
            x: (col as f32 - row as f32) * (self.tile_width / 2.0),
            y: (col + row) as f32 * (self.tile_height / 2.0) + self.vertical_bias,
        }
    }

    /// Grid cell nearest to a screen position, if it lies on the map.
    pub fn to_grid(&self, point: Vector2) -> Option<(usize, usize)> {
        // col - row and col + row, solved from the projection
        let diff = point.x / (self.tile_width / 2.0);
        let sum = (point.y - self.vertical_bias) / (self.tile_height / 2.0);
        let row = ((sum - diff) / 2.0).round();
        let col = ((sum + diff) / 2.0).round();
        if !row.is_finite() || !col.is_finite() || row < 0.0 || col < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row, col))
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(row * self.cols + col).copied()
    }

    /// Every cell as `(row, col, tile_id)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, id)| (i / self.cols, i % self.cols, *id))
    }

    /// Width of the diamond covered by the map.
    pub fn map_width(&self) -> f32 {
        (self.cols + self.rows) as f32 * (self.tile_width / 2.0)
    }

    /// Height of the diamond covered by the map.
    pub fn map_height(&self) -> f32 {
        (self.cols + self.rows) as f32 * (self.tile_height / 2.0)
    }

    /// Walkable diamond with tile sizes scaled by `inset`.
    ///
    /// An inset below 1.0 keeps walkers a little away from the map's rim.
    pub fn walk_bounds(&self, inset: f32) -> DiamondBounds {
        let width = self.map_width() * inset;
        let height = self.map_height() * inset;
        let center = Vector2 {
            x: (self.cols as f32 - self.rows as f32) * (self.tile_width * inset) / 4.0,
            y: height / 2.0,
        };
        DiamondBounds::new(center, width, height)
    }
}
