use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Flat-coloured triangle.
///
/// Vertices are stored as offsets from the entity's
/// [`MapPosition`](crate::components::mapposition::MapPosition).
#[derive(Component, Clone, Copy, Debug)]
pub struct ClickTriangle {
    pub color: Color,
    pub corners: [Vector2; 3],
}

impl ClickTriangle {
    /// Isosceles triangle: base corners at `(∓half_width, -half_height)`,
    /// apex at `(0, half_height)`.
    pub fn new(color: Color, half_width: f32, half_height: f32) -> Self {
        Self {
            color,
            corners: [
                Vector2 {
                    x: -half_width,
                    y: -half_height,
                },
                Vector2 {
                    x: half_width,
                    y: -half_height,
                },
                Vector2 {
                    x: 0.0,
                    y: half_height,
                },
            ],
        }
    }

    /// Triangle through three world points, returned with its centroid,
    /// which becomes the entity's position.
    ///
    /// Corners are reordered counter-clockwise (y-up) when needed, since
    /// raylib culls clockwise triangles.
    pub fn through(color: Color, mut points: [Vector2; 3]) -> (Vector2, Self) {
        let [a, b, c] = points;
        if (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x) < 0.0 {
            points.swap(1, 2);
        }
        let centroid = Vector2 {
            x: (points[0].x + points[1].x + points[2].x) / 3.0,
            y: (points[0].y + points[1].y + points[2].y) / 3.0,
        };
        let corners = points.map(|p| Vector2 {
            x: p.x - centroid.x,
            y: p.y - centroid.y,
        });
        (centroid, Self { color, corners })
    }

    /// Width and height of the bounding box.
    pub fn size(&self) -> Vector2 {
        let xs = self.corners.map(|c| c.x);
        let ys = self.corners.map(|c| c.y);
        let span = |v: [f32; 3]| {
            v.iter().copied().fold(f32::MIN, f32::max) - v.iter().copied().fold(f32::MAX, f32::min)
        };
        Vector2 {
            x: span(xs),
            y: span(ys),
        }
    }

    /// World-space vertices around `center`.
    pub fn vertices(&self, center: Vector2) -> [Vector2; 3] {
        self.corners.map(|c| Vector2 {
            x: center.x + c.x,
            y: center.y + c.y,
        })
    }
}
