//! Two-player colour matching game.
//!
//! A grid of light colours is shown. Each turn the current player clicks a
//! cell: every visible cell whose colour is closer than
//! [`SIMILARITY_THRESHOLD`] (Euclidean RGB distance) to the picked colour is
//! removed, the picked cell included. Points shrink with the attempt number:
//!
//! ```text
//! points = max(0, removed * 10 - attempt * 5)
//! ```
//!
//! where `attempt` counts the turns already played. After [`MAX_ATTEMPTS`]
//! turns the game ends and the higher score wins.
//!
//! Cells are laid out in normalised device coordinates (y-up, `[-1, 1]` on
//! both axes) with a restart button along the bottom edge.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;
use log::info;
use raylib::prelude::{Rectangle, Vector2};

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 8;
pub const SIMILARITY_THRESHOLD: f32 = 0.25;
pub const MAX_ATTEMPTS: u32 = 6;

const CELL_STEP: f32 = 0.25;
const CELL_SIZE: f32 = 0.2;

/// RGB colour with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn distance(&self, other: &Rgb) -> f32 {
        ((self.r - other.r).powi(2) + (self.g - other.g).powi(2) + (self.b - other.b).powi(2))
            .sqrt()
    }

    /// Random light colour, each channel in `[0.5, 1.0)`.
    pub fn random_light(rng: &mut Rng) -> Self {
        Self {
            r: 0.5 + rng.f32() * 0.5,
            g: 0.5 + rng.f32() * 0.5,
            b: 0.5 + rng.f32() * 0.5,
        }
    }

    /// Brightened copy, each channel scaled by `factor` and capped at 1.0.
    pub fn brightened(&self, factor: f32) -> Self {
        Self {
            r: (self.r * factor).min(1.0),
            g: (self.g * factor).min(1.0),
            b: (self.b * factor).min(1.0),
        }
    }
}

/// Inclusive point-in-rectangle test (y-up, `y` is the bottom edge).
pub fn rect_contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Points awarded for removing `removed` cells on turn `attempt` (0-based).
pub fn points_for(removed: u32, attempt: u32) -> u32 {
    (removed as i64 * 10 - attempt as i64 * 5).max(0) as u32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCell {
    pub rect: Rectangle,
    pub color: Rgb,
    pub visible: bool,
}

/// Result of one played turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub player: u8,
    pub removed: u32,
    pub points: u32,
    pub game_over: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct ColorMatchGame {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<ColorCell>,
    /// Colour picked on the last turn.
    pub selected: Option<Rgb>,
    pub attempts: u32,
    /// 1 or 2.
    pub current_player: u8,
    pub scores: [u32; 2],
    pub game_over: bool,
    pub restart_button: Rectangle,
    pub button_color: Rgb,
    pub button_hovered: bool,
}

impl ColorMatchGame {
    /// A fresh game with the default 6x8 grid.
    pub fn new(rng: &mut Rng) -> Self {
        Self::with_size(GRID_ROWS, GRID_COLS, rng)
    }

    pub fn with_size(rows: usize, cols: usize, rng: &mut Rng) -> Self {
        let mut game = Self {
            rows,
            cols,
            cells: Vec::with_capacity(rows * cols),
            selected: None,
            attempts: 0,
            current_player: 1,
            scores: [0, 0],
            game_over: false,
            restart_button: Rectangle {
                x: -0.5,
                y: -0.95,
                width: 1.0,
                height: 0.1,
            },
            button_color: Rgb::new(0.2, 0.6, 0.8),
            button_hovered: false,
        };
        game.restart(rng);
        game
    }

    /// Build a game from explicit colours, row-major. Used to replay boards.
    pub fn from_colors(rows: usize, cols: usize, colors: &[Rgb]) -> Result<Self, String> {
        if colors.len() != rows * cols {
            return Err(format!(
                "Board {}x{} needs {} colours, got {}",
                rows,
                cols,
                rows * cols,
                colors.len()
            ));
        }
        let mut rng = Rng::with_seed(0);
        let mut game = Self::with_size(rows, cols, &mut rng);
        for (cell, color) in game.cells.iter_mut().zip(colors) {
            cell.color = *color;
        }
        Ok(game)
    }

    /// New random board, scores and turn counters reset.
    pub fn restart(&mut self, rng: &mut Rng) {
        self.cells.clear();
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.cells.push(ColorCell {
                    rect: Rectangle {
                        x: -1.0 + col as f32 * CELL_STEP,
                        y: 1.0 - row as f32 * CELL_STEP - CELL_STEP,
                        width: CELL_SIZE,
                        height: CELL_SIZE,
                    },
                    color: Rgb::random_light(rng),
                    visible: true,
                });
            }
        }
        self.selected = None;
        self.attempts = 0;
        self.current_player = 1;
        self.scores = [0, 0];
        self.game_over = false;
    }

    /// Index of the visible cell under `point`, if any.
    pub fn cell_at(&self, point: Vector2) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.visible && rect_contains(&cell.rect, point))
    }

    /// Top-left corner of the score text, in the gap between the lowest row
    /// of cells and the restart button.
    pub fn status_origin(&self) -> Vector2 {
        Vector2 {
            x: -0.95,
            y: 1.0 - self.rows as f32 * CELL_STEP - 0.05,
        }
    }

    pub fn button_hit(&self, point: Vector2) -> bool {
        rect_contains(&self.restart_button, point)
    }

    /// Play the visible cell under `point`.
    pub fn select_at(&mut self, point: Vector2) -> Option<MatchOutcome> {
        if self.game_over {
            info!("Game over, restart to play again");
            return None;
        }
        if self.attempts >= MAX_ATTEMPTS {
            self.game_over = true;
            return None;
        }
        let index = self.cell_at(point)?;
        self.select(index)
    }

    /// Play cell `index`. Returns `None` when no turn was played.
    pub fn select(&mut self, index: usize) -> Option<MatchOutcome> {
        if self.game_over {
            return None;
        }
        if self.attempts >= MAX_ATTEMPTS {
            self.game_over = true;
            return None;
        }
        let picked = self.cells.get(index).filter(|c| c.visible)?.color;
        self.selected = Some(picked);

        let mut removed = 0;
        for cell in self.cells.iter_mut() {
            if cell.visible && picked.distance(&cell.color) < SIMILARITY_THRESHOLD {
                cell.visible = false;
                removed += 1;
            }
        }

        let player = self.current_player;
        let points = points_for(removed, self.attempts);
        self.scores[(player - 1) as usize] += points;
        self.attempts += 1;
        info!(
            "Player {} scored {} points. Score: player 1 = {}, player 2 = {}",
            player, points, self.scores[0], self.scores[1]
        );

        if self.attempts >= MAX_ATTEMPTS {
            self.game_over = true;
            match self.winner() {
                Some(p) => info!("Game over! Player {} wins!", p),
                None => info!("Game over! It's a tie!"),
            }
        }
        self.current_player = if player == 1 { 2 } else { 1 };

        Some(MatchOutcome {
            player,
            removed,
            points,
            game_over: self.game_over,
        })
    }

    /// Player with the higher score, `None` on a tie.
    pub fn winner(&self) -> Option<u8> {
        match self.scores[0].cmp(&self.scores[1]) {
            std::cmp::Ordering::Greater => Some(1),
            std::cmp::Ordering::Less => Some(2),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey(v: f32) -> Rgb {
        Rgb::new(v, v, v)
    }

    /// 2x3 board: three near-identical reds, one close-ish grey pair, one blue.
    fn board() -> ColorMatchGame {
        ColorMatchGame::from_colors(
            2,
            3,
            &[
                Rgb::new(1.0, 0.5, 0.5),
                Rgb::new(0.95, 0.5, 0.5),
                Rgb::new(1.0, 0.55, 0.5),
                grey(0.6),
                grey(0.65),
                Rgb::new(0.5, 0.5, 1.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_points_formula() {
        assert_eq!(points_for(4, 1), 35);
        assert_eq!(points_for(1, 0), 10);
        assert_eq!(points_for(1, 5), 0);
        assert_eq!(points_for(0, 3), 0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(grey(0.5).distance(&grey(0.5)), 0.0);
        let d = Rgb::new(0.0, 0.0, 0.0).distance(&Rgb::new(1.0, 1.0, 1.0));
        assert!((d - 3f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_new_board_layout() {
        let mut rng = Rng::with_seed(7);
        let game = ColorMatchGame::new(&mut rng);
        assert_eq!(game.cells.len(), 48);
        assert_eq!(game.visible_count(), 48);
        assert_eq!(game.current_player, 1);
        let first = game.cells[0].rect;
        assert!((first.x + 1.0).abs() < 1e-6);
        assert!((first.y - 0.75).abs() < 1e-6);
        let last = game.cells[47].rect;
        assert!((last.x - 0.75).abs() < 1e-6);
        assert!((last.y + 0.5).abs() < 1e-6);
        for cell in &game.cells {
            for channel in [cell.color.r, cell.color.g, cell.color.b] {
                assert!((0.5..1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn test_select_removes_similar_and_scores() {
        let mut game = board();
        let outcome = game.select(0).unwrap();
        assert_eq!(outcome.player, 1);
        assert_eq!(outcome.removed, 3);
        assert_eq!(outcome.points, 30);
        assert_eq!(game.scores, [30, 0]);
        assert_eq!(game.current_player, 2);
        assert_eq!(game.visible_count(), 3);
        assert_eq!(game.selected, Some(Rgb::new(1.0, 0.5, 0.5)));
    }

    #[test]
    fn test_second_turn_penalised_by_attempt() {
        let mut game = board();
        game.select(0).unwrap();
        let outcome = game.select(3).unwrap();
        assert_eq!(outcome.player, 2);
        assert_eq!(outcome.removed, 2);
        assert_eq!(outcome.points, 15);
        assert_eq!(game.scores, [30, 15]);
    }

    #[test]
    fn test_select_hidden_cell_is_not_a_turn() {
        let mut game = board();
        game.select(0).unwrap();
        assert!(game.select(1).is_none());
        assert_eq!(game.attempts, 1);
        assert_eq!(game.current_player, 2);
    }

    #[test]
    fn test_select_at_point() {
        let mut game = board();
        // Center of cell (1, 2): x = -1 + 2*0.25 + 0.1, y = 1 - 0.25 - 0.25 + 0.1
        let outcome = game.select_at(Vector2 { x: -0.4, y: 0.6 }).unwrap();
        assert_eq!(outcome.removed, 1);
        assert!(game.select_at(Vector2 { x: 0.9, y: -0.9 }).is_none());
    }

    #[test]
    fn test_game_ends_after_max_attempts() {
        // Cube corners are all at least 1.0 apart, so every pick removes one cell
        let corners: Vec<Rgb> = (0..8)
            .map(|i| Rgb::new((i & 1) as f32, ((i >> 1) & 1) as f32, ((i >> 2) & 1) as f32))
            .collect();
        let mut game = ColorMatchGame::from_colors(2, 4, &corners).unwrap();
        let mut turns = 0;
        let mut last = None;
        for index in 0..game.cells.len() {
            if let Some(outcome) = game.select(index) {
                turns += 1;
                last = Some(outcome);
            }
        }
        assert_eq!(turns, MAX_ATTEMPTS);
        assert!(game.game_over);
        assert!(last.unwrap().game_over);
        assert!(game.select(0).is_none());
    }

    #[test]
    fn test_winner() {
        let mut game = board();
        assert_eq!(game.winner(), None);
        game.scores = [10, 20];
        assert_eq!(game.winner(), Some(2));
        game.scores = [25, 20];
        assert_eq!(game.winner(), Some(1));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = board();
        game.select(0).unwrap();
        let mut rng = Rng::with_seed(11);
        game.restart(&mut rng);
        assert_eq!(game.attempts, 0);
        assert_eq!(game.scores, [0, 0]);
        assert_eq!(game.current_player, 1);
        assert!(!game.game_over);
        assert_eq!(game.visible_count(), 6);
        assert!(game.selected.is_none());
    }

    #[test]
    fn test_button_hit() {
        let game = board();
        assert!(game.button_hit(Vector2 { x: 0.0, y: -0.9 }));
        assert!(!game.button_hit(Vector2 { x: 0.0, y: 0.0 }));
    }

    #[test]
    fn test_status_text_sits_between_board_and_button() {
        let game = ColorMatchGame::new(&mut Rng::with_seed(3));
        let origin = game.status_origin();
        assert!(game.cells.iter().all(|c| c.rect.y > origin.y));
        let button_top = game.restart_button.y + game.restart_button.height;
        assert!(origin.y - 0.15 > button_top);
        assert!(game.cell_at(origin).is_none());
    }

    #[test]
    fn test_from_colors_rejects_wrong_length() {
        assert!(ColorMatchGame::from_colors(2, 2, &[grey(0.5)]).is_err());
    }

    #[test]
    fn test_brightened_caps() {
        let c = Rgb::new(0.2, 0.6, 0.9).brightened(1.2);
        assert!((c.r - 0.24).abs() < 1e-6);
        assert!((c.g - 0.72).abs() < 1e-6);
        assert_eq!(c.b, 1.0);
    }
}
