//! Clicked points waiting to become a triangle.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// World points collected from left clicks. Every third click closes a
/// triangle and empties the buffer.
#[derive(Resource, Debug, Clone, Default)]
pub struct ClickVertices {
    pub points: Vec<Vector2>,
}

impl ClickVertices {
    /// Record a click. Returns the three corners once the third arrives.
    pub fn push(&mut self, point: Vector2) -> Option<[Vector2; 3]> {
        self.points.push(point);
        if self.points.len() < 3 {
            return None;
        }
        let corners = [self.points[0], self.points[1], self.points[2]];
        self.points.clear();
        Some(corners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_point_closes_triangle() {
        let mut vertices = ClickVertices::default();
        assert_eq!(vertices.push(Vector2 { x: 1.0, y: 1.0 }), None);
        assert_eq!(vertices.push(Vector2 { x: 2.0, y: 1.0 }), None);
        let corners = vertices.push(Vector2 { x: 1.5, y: 2.0 }).unwrap();
        assert_eq!(corners[2], Vector2 { x: 1.5, y: 2.0 });
        assert!(vertices.points.is_empty());
        assert_eq!(vertices.push(Vector2 { x: 0.0, y: 0.0 }), None);
    }
}
