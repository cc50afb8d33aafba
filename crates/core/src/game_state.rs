//! Game state module - the board engine
//!
//! This module ties together the board, piece geometry, and shape source.
//! It owns the active piece, validates every movement through a single
//! [`GameState::try_move`] choke point, lands pieces, clears full rows, keeps
//! score, and drives the periodic advance timer.
//!
//! Side effects the host cares about (status text, score records, game over,
//! restart requests) are queued as [`GameEvent`]s in the order the mutations
//! happened. Drain them with [`GameState::take_events`] after each call.

use log::{debug, info};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::randomizer::ShapeSource;
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Active falling piece: a shape placed at an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    pub fn new(shape: Shape, x: i8, y: i8) -> Self {
        Self { shape, x, y }
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Absolute board cells, `(x + dx, y - dy)` for each offset.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape.coords().map(|(dx, dy)| (self.x + dx, self.y - dy))
    }

    /// Check if every cell is in bounds and lands on an empty board cell
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| board.is_free(x, y))
    }
}

/// Complete engine state
#[derive(Debug, Clone)]
pub struct GameState<S> {
    board: Board,
    active: Option<Piece>,
    shapes: S,
    config: EngineConfig,
    started: bool,
    paused: bool,
    game_over: bool,
    /// Set after every landing; the next tick spawns instead of advancing.
    waiting_after_line: bool,
    lines_removed: u32,
    score: u32,
    max_score: u32,
    timer_running: bool,
    timer_ms: u32,
    dirty: bool,
    events: Vec<GameEvent>,
}

impl<S: ShapeSource> GameState<S> {
    /// Create an idle engine drawing spawns from `shapes`
    pub fn new(shapes: S, config: EngineConfig) -> Self {
        Self {
            board: Board::new(),
            active: None,
            shapes,
            config,
            started: false,
            paused: false,
            game_over: false,
            waiting_after_line: false,
            lines_removed: 0,
            score: 0,
            max_score: 0,
            timer_running: false,
            timer_ms: 0,
            dirty: false,
            events: Vec::new(),
        }
    }

    /// Seed the running maximum (e.g. from persisted history)
    pub fn with_max_score(mut self, max_score: u32) -> Self {
        self.raise_max_score(max_score);
        self
    }

    /// Raise the running maximum; lower values are ignored.
    pub fn raise_max_score(&mut self, max_score: u32) {
        self.max_score = self.max_score.max(max_score);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(any(test, feature = "test-support"))]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn waiting_after_line(&self) -> bool {
        self.waiting_after_line
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn lines_removed(&self) -> u32 {
        self.lines_removed
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if !self.started {
            Phase::Idle
        } else if self.paused {
            Phase::Paused
        } else if self.waiting_after_line {
            Phase::LineClearPause
        } else {
            Phase::Running
        }
    }

    /// Current score line text
    pub fn score_status(&self) -> StatusMessage {
        StatusMessage::Score {
            score: self.score,
            max_score: self.max_score,
        }
    }

    /// Take all queued events, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Take and clear the redraw flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.max_score = self.max_score;
        out.lines = self.lines_removed;
        out.phase = self.phase();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn start_timer(&mut self) {
        self.timer_running = true;
        self.timer_ms = 0;
    }

    fn stop_timer(&mut self) {
        self.timer_running = false;
        self.timer_ms = 0;
    }

    /// Set every board cell to `Empty`
    pub fn clear_board(&mut self) {
        self.board.clear();
        self.dirty = true;
    }

    /// Begin a new game. Ignored while paused.
    pub fn start(&mut self) {
        if self.paused {
            return;
        }

        self.started = true;
        self.game_over = false;
        self.waiting_after_line = false;
        self.lines_removed = 0;
        self.score = 0;
        self.active = None;

        self.clear_board();
        info!("game started (max score {})", self.max_score);
        self.emit(GameEvent::Status(self.score_status()));

        self.start_timer();
        self.new_piece();
    }

    /// Toggle pause. Ignored unless a game is in progress.
    pub fn pause(&mut self) {
        if !self.started {
            return;
        }

        self.paused = !self.paused;
        if self.paused {
            self.stop_timer();
            self.emit(GameEvent::Status(StatusMessage::Paused));
        } else {
            self.start_timer();
            self.emit(GameEvent::Status(self.score_status()));
        }
        self.dirty = true;
    }

    /// Place `candidate` with its anchor at (x, y) if every cell is in bounds
    /// and empty. On success the candidate becomes the active piece; on
    /// failure nothing changes.
    pub fn try_move(&mut self, candidate: Shape, x: i8, y: i8) -> bool {
        if candidate.kind().is_empty() {
            return false;
        }

        let piece = Piece::new(candidate, x, y);
        if !piece.fits(&self.board) {
            return false;
        }

        self.active = Some(piece);
        self.dirty = true;
        true
    }

    /// Spawn a piece at the top center of the board.
    ///
    /// A blocked spawn ends the game: the timer stops and [`GameEvent::GameOver`]
    /// is queued so the host can run the restart flow.
    pub fn new_piece(&mut self) -> bool {
        let shape = Shape::new(self.shapes.next_shape());
        let x = (BOARD_WIDTH / 2) as i8 + 1;
        let y = BOARD_HEIGHT as i8 - 1 + shape.min_y();

        if self.try_move(shape, x, y) {
            debug!("spawned {} at ({}, {})", shape.kind().as_str(), x, y);
            return true;
        }

        self.active = None;
        self.stop_timer();
        self.started = false;
        self.game_over = true;
        self.dirty = true;
        info!(
            "game over: score {}, {} lines",
            self.score, self.lines_removed
        );
        self.emit(GameEvent::Status(StatusMessage::GameOver));
        self.emit(GameEvent::GameOver);
        false
    }

    /// Move the active piece down one row, landing it when blocked.
    ///
    /// Returns true if the piece moved.
    pub fn one_line_down(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self.try_move(active.shape, active.x, active.y - 1) {
            return true;
        }
        self.piece_dropped();
        false
    }

    /// Hard drop: move the active piece to its lowest legal row and land it.
    ///
    /// Returns the number of rows fallen.
    pub fn drop_down(&mut self) -> u32 {
        let Some(active) = self.active else {
            return 0;
        };

        let mut rows: i8 = 0;
        while self.try_move(active.shape, active.x, active.y - rows - 1) {
            rows += 1;
        }

        self.piece_dropped();
        rows as u32
    }

    /// Write the active piece into the grid and evaluate full rows.
    pub fn piece_dropped(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        let kind = active.kind();
        for (x, y) in active.cells() {
            self.board.set(x, y, kind);
        }

        self.remove_full_lines();

        if !self.waiting_after_line {
            self.new_piece();
        }
    }

    /// Remove all full rows, score them, and arm the waiting-after-line flag.
    ///
    /// Every call leaves no active piece behind; the next advance tick spawns.
    /// Returns the number of rows removed.
    pub fn remove_full_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows().len() as u32;

        if cleared > 0 {
            self.lines_removed += cleared;
            self.score = self
                .score
                .saturating_add(cleared.saturating_mul(LINE_CLEAR_POINTS));
            self.raise_max_score(self.score);

            debug!(
                "cleared {} line(s): score {}, max {}",
                cleared, self.score, self.max_score
            );
            self.emit(GameEvent::LinesCleared {
                count: cleared,
                score: self.score,
            });
            self.emit(GameEvent::Status(self.score_status()));
            self.emit(GameEvent::RecordScore(self.score));
        }

        self.waiting_after_line = true;
        self.active = None;
        self.dirty = true;
        cleared
    }

    /// One firing of the periodic timer.
    pub fn advance(&mut self) {
        if !self.started || self.paused {
            return;
        }

        if self.waiting_after_line {
            self.waiting_after_line = false;
            self.new_piece();
        } else {
            self.one_line_down();
        }
    }

    /// Feed elapsed time into the advance timer.
    ///
    /// Fires [`advance`](Self::advance) at most once per call. Time beyond
    /// one pending interval is dropped, so a stalled host does not replay the
    /// backlog. Returns true if the tick fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.timer_running {
            return false;
        }

        let interval = self.config.tick_ms.max(1);
        self.timer_ms = self
            .timer_ms
            .saturating_add(elapsed_ms)
            .min(interval.saturating_mul(2) - 1);
        if self.timer_ms < interval {
            return false;
        }

        self.timer_ms -= interval;
        self.advance();
        true
    }

    /// Apply a player action.
    ///
    /// Ignored unless a game is running with an active piece. While paused
    /// only [`GameAction::Pause`] is accepted. Returns true if the action
    /// took effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.started {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match action {
            GameAction::Pause => {
                self.pause();
                true
            }
            _ if self.paused => false,
            GameAction::MoveLeft => self.try_move(active.shape, active.x - 1, active.y),
            GameAction::MoveRight => self.try_move(active.shape, active.x + 1, active.y),
            GameAction::RotateRight => {
                self.try_move(active.shape.rotate_right(), active.x, active.y)
            }
            GameAction::RotateLeft => {
                self.try_move(active.shape.rotate_left(), active.x, active.y)
            }
            GameAction::HardDrop => {
                self.drop_down();
                true
            }
            GameAction::OneLineDown => {
                self.one_line_down();
                true
            }
            GameAction::Restart => {
                self.emit(GameEvent::RestartRequested);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomizer::ScriptedShapes;

    fn idle(kind: ShapeKind) -> GameState<ScriptedShapes> {
        GameState::new(ScriptedShapes::repeat(kind), EngineConfig::default())
    }

    fn started(kinds: &[ShapeKind]) -> GameState<ScriptedShapes> {
        let mut state = GameState::new(
            ScriptedShapes::new(kinds.iter().copied()),
            EngineConfig::default(),
        );
        state.start();
        state.take_events();
        state
    }

    fn fill_row_except(state: &mut GameState<ScriptedShapes>, y: i8, gap: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            if x != gap {
                state.board_mut().set(x, y, ShapeKind::Z);
            }
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(ScriptedShapes::repeat(ShapeKind::T), EngineConfig::default());

        assert!(!state.started);
        assert!(!state.game_over);
        assert!(!state.paused);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines_removed, 0);
        assert!(state.active.is_none());
        assert!(!state.timer_running);
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_start_spawns_and_reports() {
        let mut state = idle(ShapeKind::T).with_max_score(900);
        state.start();

        assert_eq!(state.phase(), Phase::Running);
        assert!(state.timer_running);
        assert!(state.active.is_some());
        assert_eq!(
            state.take_events(),
            vec![GameEvent::Status(StatusMessage::Score {
                score: 0,
                max_score: 900
            })]
        );
    }

    #[test]
    fn test_spawn_position() {
        let state = started(&[ShapeKind::Line]);
        let active = state.active.unwrap();

        assert_eq!((active.x, active.y), (6, 20));
        assert_eq!(active.cells(), [(6, 21), (6, 20), (6, 19), (6, 18)]);

        let state = started(&[ShapeKind::Square]);
        let active = state.active.unwrap();
        assert_eq!((active.x, active.y), (6, 21));
        assert_eq!(active.cells(), [(6, 21), (7, 21), (6, 20), (7, 20)]);
    }

    #[test]
    fn test_try_move_within_bounds() {
        let mut state = started(&[ShapeKind::Square]);
        let shape = state.active.unwrap().shape;

        assert!(state.try_move(shape, 8, 21));
        assert_eq!(state.active.unwrap().x, 8);

        // Right edge
        assert!(!state.try_move(shape, 9, 21));
        // Top edge
        assert!(!state.try_move(shape, 8, 22));
        // Bottom edge
        assert!(state.try_move(shape, 8, 1));
        assert!(!state.try_move(shape, 8, 0));
        assert_eq!((state.active.unwrap().x, state.active.unwrap().y), (8, 1));
    }

    #[test]
    fn test_try_move_collision_leaves_state_unchanged() {
        let mut state = started(&[ShapeKind::Square]);
        state.board_mut().set(4, 20, ShapeKind::T);
        let before_active = state.active;
        let before_board = state.board.clone();
        state.take_dirty();

        let shape = state.active.unwrap().shape;
        assert!(!state.try_move(shape, 4, 21));

        assert_eq!(state.active, before_active);
        assert_eq!(state.board, before_board);
        assert!(!state.take_dirty());
    }

    #[test]
    fn test_try_move_rejects_empty_shape() {
        let mut state = started(&[ShapeKind::T]);
        assert!(!state.try_move(Shape::empty(), 4, 10));
        assert_eq!(state.active.unwrap().kind(), ShapeKind::T);
    }

    #[test]
    fn test_rotation_goes_through_try_move() {
        let mut state = started(&[ShapeKind::T]);

        // At spawn the T's rotated stem would poke above the board.
        assert!(!state.apply_action(GameAction::RotateRight));
        assert_eq!(state.active.unwrap().shape, Shape::new(ShapeKind::T));

        assert!(state.one_line_down());
        assert!(state.apply_action(GameAction::RotateRight));
        let active = state.active.unwrap();
        assert_eq!(active.shape, Shape::new(ShapeKind::T).rotate_right());
        assert_eq!(active.cells(), [(6, 21), (6, 20), (6, 19), (5, 20)]);

        assert!(state.apply_action(GameAction::RotateLeft));
        assert_eq!(state.active.unwrap().shape, Shape::new(ShapeKind::T));
    }

    #[test]
    fn test_move_left_and_right() {
        let mut state = started(&[ShapeKind::Line]);

        assert!(state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.active.unwrap().x, 5);
        assert!(state.apply_action(GameAction::MoveRight));
        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active.unwrap().x, 7);

        let mut moved = 0;
        for _ in 0..10 {
            if state.apply_action(GameAction::MoveRight) {
                moved += 1;
            }
        }
        assert_eq!(moved, 2);
        assert_eq!(state.active.unwrap().x, 9);
    }

    #[test]
    fn test_hard_drop_lands_and_waits() {
        let mut state = started(&[ShapeKind::Square]);

        assert_eq!(state.drop_down(), 20);

        assert!(state.active.is_none());
        assert!(state.waiting_after_line);
        assert_eq!(state.phase(), Phase::LineClearPause);
        for (x, y) in [(6, 1), (7, 1), (6, 0), (7, 0)] {
            assert_eq!(state.board.get(x, y), Some(ShapeKind::Square));
        }
        assert_eq!(state.score, 0);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_advance_after_landing_spawns() {
        let mut state = started(&[ShapeKind::Square, ShapeKind::Line]);
        state.drop_down();

        state.advance();

        assert!(!state.waiting_after_line);
        let active = state.active.unwrap();
        assert_eq!(active.kind(), ShapeKind::Line);
        assert_eq!((active.x, active.y), (6, 20));
    }

    #[test]
    fn test_one_line_down_lands_on_floor() {
        let mut state = started(&[ShapeKind::Square]);
        let shape = state.active.unwrap().shape;
        assert!(state.try_move(shape, 0, 1));

        assert!(!state.one_line_down());
        assert!(state.active.is_none());
        assert_eq!(state.board.get(0, 0), Some(ShapeKind::Square));
        assert_eq!(state.board.get(1, 1), Some(ShapeKind::Square));
    }

    #[test]
    fn test_single_line_clear() {
        let mut state = started(&[ShapeKind::Line]);
        fill_row_except(&mut state, 0, 6);

        state.drop_down();

        assert_eq!(state.score, 100);
        assert_eq!(state.max_score, 100);
        assert_eq!(state.lines_removed, 1);
        assert!(!state.board.is_row_full(0));
        // The three Line cells above the cleared row slid down.
        for y in 0..3 {
            assert_eq!(state.board.get(6, y), Some(ShapeKind::Line));
        }
        assert_eq!(state.board.filled_count(), 3);
        assert_eq!(
            state.take_events(),
            vec![
                GameEvent::LinesCleared { count: 1, score: 100 },
                GameEvent::Status(StatusMessage::Score {
                    score: 100,
                    max_score: 100
                }),
                GameEvent::RecordScore(100),
            ]
        );
    }

    #[test]
    fn test_four_line_clear_scores_flat() {
        let mut state = started(&[ShapeKind::Line]);
        for y in 0..4 {
            fill_row_except(&mut state, y, 6);
        }

        state.drop_down();

        assert_eq!(state.lines_removed, 4);
        assert_eq!(state.score, 400);
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_max_score_only_rises() {
        let mut state = idle(ShapeKind::Line).with_max_score(1000);
        state.start();
        fill_row_except(&mut state, 0, 6);
        state.drop_down();

        assert_eq!(state.score, 100);
        assert_eq!(state.max_score, 1000);

        state.raise_max_score(10);
        assert_eq!(state.max_score, 1000);
    }

    #[test]
    fn test_timer_drives_gravity() {
        let mut state = started(&[ShapeKind::Square]);

        assert!(!state.tick(299));
        assert_eq!(state.active.unwrap().y, 21);

        assert!(state.tick(1));
        assert_eq!(state.active.unwrap().y, 20);

        // Two intervals in one call fire once; the second stays pending.
        assert!(state.tick(600));
        assert_eq!(state.active.unwrap().y, 19);
        assert!(state.tick(1));
        assert_eq!(state.active.unwrap().y, 18);
    }

    #[test]
    fn test_long_stall_advances_once() {
        let mut state = started(&[ShapeKind::Square]);

        assert!(state.tick(600_000));

        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.active.unwrap().y, 20);
        assert_eq!(state.board.filled_count(), 0);

        // At most one interval carries over.
        assert!(state.tick(0));
        assert_eq!(state.active.unwrap().y, 19);
        assert!(!state.tick(0));
    }

    #[test]
    fn test_custom_tick_interval() {
        let mut state = GameState::new(
            ScriptedShapes::repeat(ShapeKind::Square),
            EngineConfig::with_tick_ms(50),
        );
        state.start();

        assert!(state.tick(50));
        assert_eq!(state.active.unwrap().y, 20);
    }

    #[test]
    fn test_pause_blocks_movement_and_timer() {
        let mut state = started(&[ShapeKind::Square]);

        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.phase(), Phase::Paused);
        assert!(!state.timer_running);
        assert_eq!(
            state.take_events(),
            vec![GameEvent::Status(StatusMessage::Paused)]
        );

        let before = state.active;
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::RotateLeft));
        assert!(!state.apply_action(GameAction::HardDrop));
        assert!(!state.apply_action(GameAction::OneLineDown));
        assert!(!state.apply_action(GameAction::Restart));
        assert!(!state.tick(10_000));
        assert_eq!(state.active, before);

        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.phase(), Phase::Running);
        assert!(state.timer_running);
        assert_eq!(
            state.take_events(),
            vec![GameEvent::Status(StatusMessage::Score {
                score: 0,
                max_score: 0
            })]
        );
    }

    #[test]
    fn test_start_ignored_while_paused() {
        let mut state = started(&[ShapeKind::Square]);
        state.one_line_down();
        state.pause();

        state.start();

        assert!(state.paused);
        assert_eq!(state.active.unwrap().y, 20);
    }

    #[test]
    fn test_pause_ignored_before_start() {
        let mut state = idle(ShapeKind::T);
        state.pause();
        assert!(!state.paused);
        assert!(!state.has_events());
    }

    #[test]
    fn test_actions_ignored_without_active_piece() {
        let mut state = idle(ShapeKind::T);
        assert!(!state.apply_action(GameAction::MoveLeft));

        let mut state = started(&[ShapeKind::T]);
        state.drop_down();
        assert!(state.active.is_none());
        assert!(!state.apply_action(GameAction::Pause));
        assert!(!state.apply_action(GameAction::Restart));
    }

    #[test]
    fn test_restart_action_requests_decision() {
        let mut state = started(&[ShapeKind::T]);
        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.take_events(), vec![GameEvent::RestartRequested]);
        // The engine itself does not reset.
        assert!(state.started);
    }

    #[test]
    fn test_game_over_on_blocked_spawn() {
        let mut state = started(&[ShapeKind::Square]);
        state.board_mut().set(6, 21, ShapeKind::Z);
        state.drop_down();

        state.advance();

        assert_eq!(state.phase(), Phase::GameOver);
        assert!(state.active.is_none());
        assert!(!state.timer_running);
        assert!(!state.started);
        assert_eq!(
            state.take_events(),
            vec![
                GameEvent::Status(StatusMessage::GameOver),
                GameEvent::GameOver
            ]
        );

        // Nothing advances after game over.
        assert!(!state.tick(10_000));
        assert!(!state.has_events());
    }

    #[test]
    fn test_start_after_game_over_resets() {
        let mut state = started(&[ShapeKind::Line]);
        fill_row_except(&mut state, 0, 6);
        state.drop_down();
        state.board_mut().set(6, 21, ShapeKind::Z);
        state.advance();
        assert!(state.game_over);

        state.start();

        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines_removed, 0);
        assert_eq!(state.max_score, 100);
        assert_eq!(state.board.filled_count(), 0);
        assert!(state.active.is_some());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = started(&[ShapeKind::Square]);
        state.board_mut().set(0, 0, ShapeKind::L);

        let snap = state.snapshot();

        assert_eq!(snap.board[0][0], ShapeKind::L.index());
        assert_eq!(snap.cell(0, 0), ShapeKind::L);
        assert_eq!(snap.phase, Phase::Running);
        let active = snap.active.unwrap();
        assert_eq!(active.kind, ShapeKind::Square);
        assert_eq!(active.cells, [(6, 21), (7, 21), (6, 20), (7, 20)]);
    }
}
