use bevy_ecs::prelude::Component;

use crate::resources::atlasstore::{SpriteFrameGrid, UvRect};

/// Direction of travel requested by input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Whether the instance is walking. Frames only advance while moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Idle,
    Moving(Direction),
}

/// Per-instance cursor into a shared [`SpriteFrameGrid`].
///
/// `current_row` selects the animation (usually a facing direction) and is
/// set directly by controllers. `current_frame` only moves through
/// [`AnimationState::tick`], at `fps` frames per second of simulated time,
/// independent of the render rate.
///
/// With a standing frame set, idle instances show that pose and the walk
/// cycle runs over the frames after it.
#[derive(Debug, Clone, Component)]
pub struct AnimationState {
    /// Key of the atlas layout in [`AtlasStore`](crate::resources::atlasstore::AtlasStore).
    pub atlas_key: String,
    pub current_row: usize,
    pub current_frame: usize,
    /// Seconds accumulated since the last frame advance.
    pub elapsed: f32,
    pub fps: f32,
    pub motion: Motion,
    /// Pose shown while idle. `None` freezes the last walk frame instead.
    pub standing_frame: Option<usize>,
}

impl AnimationState {
    pub fn new(atlas_key: impl Into<String>, fps: f32) -> Self {
        Self {
            atlas_key: atlas_key.into(),
            current_row: 0,
            current_frame: 0,
            elapsed: 0.0,
            fps,
            motion: Motion::Idle,
            standing_frame: None,
        }
    }

    pub fn with_row(mut self, row: usize) -> Self {
        self.current_row = row;
        self
    }

    /// Stand on `frame` while idle and walk over the frames after it.
    pub fn with_standing_frame(mut self, frame: usize) -> Self {
        self.standing_frame = Some(frame);
        self.current_frame = frame;
        self
    }

    /// First frame of the walk cycle.
    pub fn first_walk_frame(&self) -> usize {
        self.standing_frame.map_or(0, |f| f + 1)
    }

    /// Advance the frame cursor by one, wrapping inside the walk cycle.
    pub fn advance(&mut self, frame_count: usize) {
        let first = self.first_walk_frame();
        if first >= frame_count {
            return;
        }
        let span = frame_count - first;
        let step = self.current_frame.saturating_sub(first) + 1;
        self.current_frame = first + step % span;
    }

    /// Accumulate `dt` seconds and advance one frame once `1/fps` has passed.
    ///
    /// While [`Motion::Idle`] nothing changes, so walking resumes the cycle
    /// where it stopped. Returns true if the frame advanced.
    pub fn tick(&mut self, dt: f32, frame_count: usize) -> bool {
        if self.motion == Motion::Idle {
            if let Some(frame) = self.standing_frame {
                self.current_frame = frame;
                self.elapsed = 0.0;
            }
            return false;
        }
        if self.current_frame < self.first_walk_frame() {
            // First step out of the standing pose
            self.current_frame = self.first_walk_frame().min(frame_count.saturating_sub(1));
            self.elapsed = 0.0;
            return true;
        }
        if dt <= 0.0 || self.fps <= 0.0 {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= 1.0 / self.fps {
            self.advance(frame_count);
            self.elapsed = 0.0;
            return true;
        }
        false
    }

    /// Texture cell for the current row and frame.
    pub fn uv_rect(&self, grid: &SpriteFrameGrid) -> UvRect {
        grid.uv_rect(self.current_frame, self.current_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walking(fps: f32) -> AnimationState {
        let mut state = AnimationState::new("walker", fps);
        state.motion = Motion::Moving(Direction::Right);
        state
    }

    #[test]
    fn test_advance_wraps() {
        let mut state = AnimationState::new("walker", 6.0);
        for _ in 0..5 {
            state.advance(3);
        }
        assert_eq!(state.current_frame, 2);
    }

    #[test]
    fn test_k_advances_is_modular() {
        for initial in 0..4 {
            for k in 0..20 {
                let mut state = AnimationState::new("walker", 6.0);
                state.current_frame = initial;
                for _ in 0..k {
                    state.advance(4);
                }
                assert_eq!(state.current_frame, (initial + k) % 4);
            }
        }
    }

    #[test]
    fn test_zero_dt_never_advances() {
        let mut state = walking(6.0);
        state.elapsed = 10.0;
        for _ in 0..100 {
            assert!(!state.tick(0.0, 3));
        }
        assert_eq!(state.current_frame, 0);
    }

    #[test]
    fn test_tick_waits_for_frame_duration() {
        let mut state = walking(4.0);
        assert!(!state.tick(0.1, 3));
        assert!(!state.tick(0.1, 3));
        assert_eq!(state.current_frame, 0);
        assert!(state.tick(0.1, 3));
        assert_eq!(state.current_frame, 1);
        assert_eq!(state.elapsed, 0.0);
    }

    #[test]
    fn test_idle_freezes_frame_and_accumulator() {
        let mut state = walking(4.0);
        state.tick(0.2, 3);
        state.current_frame = 2;
        state.motion = Motion::Idle;
        assert!(!state.tick(5.0, 3));
        assert_eq!(state.current_frame, 2);
        assert!((state.elapsed - 0.2).abs() < 1e-6);

        // Resuming continues the cycle instead of restarting it
        state.motion = Motion::Moving(Direction::Left);
        assert!(state.tick(0.1, 3));
        assert_eq!(state.current_frame, 0);
    }

    #[test]
    fn test_large_dt_advances_one_frame_per_tick() {
        let mut state = walking(6.0);
        assert!(state.tick(3.0, 3));
        assert_eq!(state.current_frame, 1);
    }

    #[test]
    fn test_standing_frame_and_two_pose_walk() {
        // Standing pose 0, walk poses 1 and 2 swapped every 0.3 s
        let mut state = AnimationState::new("homer", 1.0 / 0.3).with_standing_frame(0);
        assert!(!state.tick(1.0, 3));
        assert_eq!(state.current_frame, 0);

        state.motion = Motion::Moving(Direction::Right);
        assert!(state.tick(0.016, 3));
        assert_eq!(state.current_frame, 1);
        assert!(!state.tick(0.2, 3));
        assert!(state.tick(0.15, 3));
        assert_eq!(state.current_frame, 2);
        assert!(state.tick(0.31, 3));
        assert_eq!(state.current_frame, 1);

        state.motion = Motion::Idle;
        state.tick(0.016, 3);
        assert_eq!(state.current_frame, 0);
        assert_eq!(state.elapsed, 0.0);
    }

    #[test]
    fn test_uv_rect_follows_cursor() {
        let grid = SpriteFrameGrid::new(3, 3).unwrap();
        let mut state = AnimationState::new("walker", 6.0).with_row(2);
        state.current_frame = 1;
        let uv = state.uv_rect(&grid);
        assert!((uv.offset.x - 1.0 / 3.0).abs() < 1e-6);
        assert!((uv.offset.y - 2.0 / 3.0).abs() < 1e-6);
    }
}
