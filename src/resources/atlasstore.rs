//! Sprite atlas registry and frame addressing.
//!
//! An atlas is a texture split into `row_count` rows by `frame_count` columns
//! of equal cells. Rows usually hold one animation each (walk right, walk
//! down, ...) and columns hold the frames of that animation. Tilesets are the
//! degenerate case of a single row.
//!
//! A [`SpriteFrameGrid`] is computed once per atlas and shared through the
//! [`AtlasStore`] by any number of entities, each carrying its own
//! [`AnimationState`](crate::components::animation::AnimationState) cursor.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Rectangle, Vector2};
use rustc_hash::FxHashMap;

/// Normalised texture-space sub-rectangle of an atlas.
///
/// Sampling the atlas with `offset + uv * scale`, for `uv` in the unit square,
/// reads exactly one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub offset: Vector2,
    pub scale: Vector2,
}

impl UvRect {
    /// Texture coordinate of `uv` (unit square) inside this cell.
    pub fn sample(&self, uv: Vector2) -> Vector2 {
        Vector2 {
            x: self.offset.x + uv.x * self.scale.x,
            y: self.offset.y + uv.y * self.scale.y,
        }
    }

    /// Pixel-space source rectangle for a texture of the given size.
    pub fn source_rect(&self, tex_width: f32, tex_height: f32) -> Rectangle {
        Rectangle {
            x: self.offset.x * tex_width,
            y: self.offset.y * tex_height,
            width: self.scale.x * tex_width,
            height: self.scale.y * tex_height,
        }
    }
}

/// Immutable layout of an atlas texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrameGrid {
    frame_count: usize,
    row_count: usize,
    cell_width: f32,
    cell_height: f32,
}

impl SpriteFrameGrid {
    /// Build the layout for `frame_count` columns and `row_count` rows.
    ///
    /// Both counts must be at least one.
    pub fn new(frame_count: usize, row_count: usize) -> Result<Self, String> {
        if frame_count == 0 || row_count == 0 {
            return Err(format!(
                "Invalid atlas layout {}x{}: frame and row counts must be >= 1",
                frame_count, row_count
            ));
        }
        Ok(Self {
            frame_count,
            row_count,
            cell_width: 1.0 / frame_count as f32,
            cell_height: 1.0 / row_count as f32,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Width of one cell as a fraction of the texture width.
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Height of one cell as a fraction of the texture height.
    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Select the cell at column `frame` of row `row`.
    ///
    /// Indices are not clamped or wrapped; callers keep them in range (the
    /// animation cadence wraps frames before they get here).
    ///
    /// # Panics
    ///
    /// Panics if `frame >= frame_count` or `row >= row_count`.
    pub fn uv_rect(&self, frame: usize, row: usize) -> UvRect {
        assert!(
            frame < self.frame_count,
            "frame index {} out of range for {} frames",
            frame,
            self.frame_count
        );
        assert!(
            row < self.row_count,
            "row index {} out of range for {} rows",
            row,
            self.row_count
        );
        UvRect {
            offset: Vector2 {
                x: frame as f32 * self.cell_width,
                y: row as f32 * self.cell_height,
            },
            scale: Vector2 {
                x: self.cell_width,
                y: self.cell_height,
            },
        }
    }

    /// Pixel size of one cell for a texture of the given size.
    pub fn cell_size(&self, tex_width: f32, tex_height: f32) -> Vector2 {
        Vector2 {
            x: tex_width * self.cell_width,
            y: tex_height * self.cell_height,
        }
    }
}

/// Registry of atlas layouts keyed by texture key.
#[derive(Resource, Debug, Default)]
pub struct AtlasStore {
    pub grids: FxHashMap<String, SpriteFrameGrid>,
}

impl AtlasStore {
    pub fn new() -> Self {
        AtlasStore {
            grids: FxHashMap::default(),
        }
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&SpriteFrameGrid> {
        self.grids.get(key.as_ref())
    }

    pub fn insert(&mut self, key: impl Into<String>, grid: SpriteFrameGrid) {
        self.grids.insert(key.into(), grid);
    }

    /// Register a `frame_count` x `row_count` layout under `key`.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        frame_count: usize,
        row_count: usize,
    ) -> Result<(), String> {
        let grid = SpriteFrameGrid::new(frame_count, row_count)?;
        self.insert(key, grid);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_new_rejects_zero_counts() {
        assert!(SpriteFrameGrid::new(0, 3).is_err());
        assert!(SpriteFrameGrid::new(3, 0).is_err());
        assert!(SpriteFrameGrid::new(1, 1).is_ok());
    }

    #[test]
    fn test_cells_cover_unit_square() {
        for frames in 1..=9 {
            for rows in 1..=5 {
                let grid = SpriteFrameGrid::new(frames, rows).unwrap();
                assert!((grid.cell_width() * frames as f32 - 1.0).abs() < EPSILON);
                assert!((grid.cell_height() * rows as f32 - 1.0).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_uv_rect_stays_inside_texture() {
        let grid = SpriteFrameGrid::new(7, 3).unwrap();
        for row in 0..grid.row_count() {
            for frame in 0..grid.frame_count() {
                let uv = grid.uv_rect(frame, row);
                assert!(uv.offset.x >= 0.0 && uv.offset.y >= 0.0);
                assert!(uv.offset.x + uv.scale.x <= 1.0 + EPSILON);
                assert!(uv.offset.y + uv.scale.y <= 1.0 + EPSILON);
            }
        }
    }

    #[test]
    fn test_uv_rect_selects_row_and_column() {
        let grid = SpriteFrameGrid::new(3, 3).unwrap();
        let uv = grid.uv_rect(2, 1);
        assert!((uv.offset.x - 2.0 / 3.0).abs() < EPSILON);
        assert!((uv.offset.y - 1.0 / 3.0).abs() < EPSILON);
        assert!((uv.scale.x - 1.0 / 3.0).abs() < EPSILON);
        assert!((uv.scale.y - 1.0 / 3.0).abs() < EPSILON);

        // Far corner of the unit square lands on the cell's far corner
        let corner = uv.sample(Vector2 { x: 1.0, y: 1.0 });
        assert!((corner.x - 1.0).abs() < EPSILON);
        assert!((corner.y - 2.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    #[should_panic(expected = "frame index 3 out of range")]
    fn test_uv_rect_panics_on_frame_overflow() {
        let grid = SpriteFrameGrid::new(3, 1).unwrap();
        grid.uv_rect(3, 0);
    }

    #[test]
    #[should_panic(expected = "row index 1 out of range")]
    fn test_uv_rect_panics_on_row_overflow() {
        let grid = SpriteFrameGrid::new(3, 1).unwrap();
        grid.uv_rect(0, 1);
    }

    #[test]
    fn test_source_rect_in_pixels() {
        let grid = SpriteFrameGrid::new(7, 1).unwrap();
        let src = grid.uv_rect(3, 0).source_rect(700.0, 64.0);
        assert!((src.x - 300.0).abs() < 1e-3);
        assert!((src.y - 0.0).abs() < 1e-3);
        assert!((src.width - 100.0).abs() < 1e-3);
        assert!((src.height - 64.0).abs() < 1e-3);
    }

    #[test]
    fn test_store_register_and_get() {
        let mut store = AtlasStore::new();
        store.register("walker", 3, 3).unwrap();
        assert!(store.register("broken", 0, 1).is_err());
        assert_eq!(store.get("walker").map(|g| g.frame_count()), Some(3));
        assert!(store.get("broken").is_none());
    }
}
