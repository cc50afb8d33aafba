//! Session state and event dispatch.

use log::{debug, info, warn};

use tetromino_core::{EngineConfig, GameSnapshot, GameState, ShapeSource};
use tetromino_store::{ScoreStore, StoreError};
use tetromino_types::{GameAction, GameEvent};

use crate::shell::{Flow, RestartPrompt, StatusSink};

/// One player's game plus the score history it feeds.
pub struct GameSession<St, S> {
    state: GameState<S>,
    store: St,
    /// Highest score whose record failed to persist, if any
    unsaved_score: Option<u32>,
}

impl<St: ScoreStore, S: ShapeSource> GameSession<St, S> {
    /// Create an idle session, seeding the running maximum from `store`.
    pub fn new(store: St, shapes: S, config: EngineConfig) -> Result<Self, StoreError> {
        let max_score = store.max_score()?;
        info!("loaded max score {}", max_score);

        Ok(Self {
            state: GameState::new(shapes, config).with_max_score(max_score),
            store,
            unsaved_score: None,
        })
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    /// Direct engine access.
    ///
    /// Events queued through it are delivered on the next session call.
    pub fn state_mut(&mut self) -> &mut GameState<S> {
        &mut self.state
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn max_score(&self) -> u32 {
        self.state.max_score()
    }

    pub fn unsaved_score(&self) -> Option<u32> {
        self.unsaved_score
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Start (or restart) a game.
    pub fn start<U>(&mut self, ui: &mut U) -> Flow
    where
        U: StatusSink + RestartPrompt,
    {
        self.state.start();
        self.dispatch(ui)
    }

    /// Apply a player action and deliver its consequences.
    pub fn handle_action<U>(&mut self, action: GameAction, ui: &mut U) -> Flow
    where
        U: StatusSink + RestartPrompt,
    {
        self.state.apply_action(action);
        self.dispatch(ui)
    }

    /// Feed elapsed time into the engine timer.
    pub fn tick<U>(&mut self, elapsed_ms: u32, ui: &mut U) -> Flow
    where
        U: StatusSink + RestartPrompt,
    {
        self.state.tick(elapsed_ms);
        self.dispatch(ui)
    }

    /// Ask whether to play again; yes starts a new game, no ends the session.
    pub fn restart_game<U>(&mut self, ui: &mut U) -> Flow
    where
        U: StatusSink + RestartPrompt,
    {
        match self.confirm_restart(ui) {
            Flow::Continue => self.dispatch(ui),
            Flow::Quit => Flow::Quit,
        }
    }

    /// Close the score store.
    pub fn close(self) -> Result<(), StoreError> {
        self.store.close()
    }

    fn confirm_restart<U: RestartPrompt>(&mut self, ui: &mut U) -> Flow {
        if ui.confirm_restart() {
            info!("player chose to restart");
            self.state.start();
            Flow::Continue
        } else {
            info!("player declined to restart");
            Flow::Quit
        }
    }

    /// Deliver queued engine events in order until none remain.
    fn dispatch<U>(&mut self, ui: &mut U) -> Flow
    where
        U: StatusSink + RestartPrompt,
    {
        loop {
            let events = self.state.take_events();
            if events.is_empty() {
                return Flow::Continue;
            }

            for event in events {
                match event {
                    GameEvent::Status(message) => ui.show_status(&message),
                    GameEvent::LinesCleared { count, score } => {
                        debug!("cleared {} line(s), score now {}", count, score)
                    }
                    GameEvent::RecordScore(score) => self.record_score(score, ui),
                    GameEvent::GameOver | GameEvent::RestartRequested => {
                        if self.confirm_restart(ui) == Flow::Quit {
                            return Flow::Quit;
                        }
                    }
                }
            }
        }
    }

    fn record_score<U: StatusSink>(&mut self, score: u32, ui: &mut U) {
        match self.store.insert_score(score) {
            Ok(()) => {
                if matches!(self.unsaved_score, Some(unsaved) if unsaved <= score) {
                    self.unsaved_score = None;
                }
            }
            Err(err) => {
                warn!("could not record score {}: {}", score, err);
                self.unsaved_score = Some(self.unsaved_score.map_or(score, |s| s.max(score)));
                ui.report_store_error(&err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use tetromino_core::ScriptedShapes;
    use tetromino_store::{MemoryScoreStore, ScoreRecord};
    use tetromino_types::{Phase, ShapeKind, StatusMessage, BOARD_WIDTH};

    #[derive(Default)]
    struct RecordingUi {
        statuses: Vec<StatusMessage>,
        answers: VecDeque<bool>,
        prompts: usize,
        store_errors: usize,
    }

    impl RecordingUi {
        fn answering(answers: &[bool]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl StatusSink for RecordingUi {
        fn show_status(&mut self, message: &StatusMessage) {
            self.statuses.push(*message);
        }

        fn report_store_error(&mut self, _error: &StoreError) {
            self.store_errors += 1;
        }
    }

    impl RestartPrompt for RecordingUi {
        fn confirm_restart(&mut self) -> bool {
            self.prompts += 1;
            self.answers.pop_front().unwrap_or(false)
        }
    }

    struct FailingStore;

    impl ScoreStore for FailingStore {
        fn insert_score(&mut self, _score: u32) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk full".into()))
        }

        fn max_score(&self) -> Result<u32, StoreError> {
            Ok(0)
        }

        fn records(&self) -> Result<Vec<ScoreRecord>, StoreError> {
            Ok(Vec::new())
        }
    }

    fn session<St: ScoreStore>(store: St, kind: ShapeKind) -> GameSession<St, ScriptedShapes> {
        GameSession::new(store, ScriptedShapes::repeat(kind), EngineConfig::default()).unwrap()
    }

    fn fill_row_except(
        session: &mut GameSession<impl ScoreStore, ScriptedShapes>,
        y: i8,
        gap: i8,
    ) {
        for x in 0..BOARD_WIDTH as i8 {
            if x != gap {
                session.state_mut().board_mut().set(x, y, ShapeKind::Z);
            }
        }
    }

    fn scores<S: ShapeSource>(session: &GameSession<MemoryScoreStore, S>) -> Vec<u32> {
        session.store().records().unwrap().iter().map(|r| r.score).collect()
    }

    #[test]
    fn max_score_seeded_from_store() {
        let mut session = session(MemoryScoreStore::with_scores([50, 200, 75]), ShapeKind::T);
        let mut ui = RecordingUi::default();

        assert_eq!(session.max_score(), 200);
        assert_eq!(session.start(&mut ui), Flow::Continue);
        assert_eq!(
            ui.statuses,
            vec![StatusMessage::Score {
                score: 0,
                max_score: 200
            }]
        );
    }

    #[test]
    fn line_clear_is_recorded() {
        let mut session = session(MemoryScoreStore::with_scores([50]), ShapeKind::Line);
        let mut ui = RecordingUi::default();
        session.start(&mut ui);
        fill_row_except(&mut session, 0, 6);

        assert_eq!(session.handle_action(GameAction::HardDrop, &mut ui), Flow::Continue);

        assert_eq!(session.score(), 100);
        assert_eq!(session.max_score(), 100);
        assert_eq!(scores(&session), vec![50, 100]);
        assert_eq!(
            ui.statuses.last(),
            Some(&StatusMessage::Score {
                score: 100,
                max_score: 100
            })
        );
        assert_eq!(session.unsaved_score(), None);
    }

    #[test]
    fn multi_line_clear_reports_once() {
        let mut session = session(MemoryScoreStore::new(), ShapeKind::Line);
        let mut ui = RecordingUi::default();
        session.start(&mut ui);
        fill_row_except(&mut session, 0, 6);
        fill_row_except(&mut session, 1, 6);

        assert_eq!(session.handle_action(GameAction::HardDrop, &mut ui), Flow::Continue);

        assert_eq!(session.state().lines_removed(), 2);
        assert_eq!(scores(&session), vec![200]);
        assert_eq!(
            ui.statuses,
            vec![
                StatusMessage::Score {
                    score: 0,
                    max_score: 0
                },
                StatusMessage::Score {
                    score: 200,
                    max_score: 200
                },
            ]
        );
        assert_eq!(ui.prompts, 0);
    }

    #[test]
    fn store_failure_keeps_playing() {
        let mut session = session(FailingStore, ShapeKind::Line);
        let mut ui = RecordingUi::default();
        session.start(&mut ui);
        fill_row_except(&mut session, 0, 6);

        assert_eq!(session.handle_action(GameAction::HardDrop, &mut ui), Flow::Continue);

        assert_eq!(ui.store_errors, 1);
        assert_eq!(session.unsaved_score(), Some(100));
        assert_eq!(session.score(), 100);
        assert_eq!(session.max_score(), 100);

        // Next tick still spawns.
        session.tick(300, &mut ui);
        assert!(session.state().active().is_some());
    }

    #[test]
    fn game_over_prompts_once_and_quits_on_no() {
        let mut session = session(MemoryScoreStore::new(), ShapeKind::Square);
        let mut ui = RecordingUi::answering(&[false]);
        session.start(&mut ui);
        session.state_mut().board_mut().set(6, 21, ShapeKind::Z);

        assert_eq!(session.handle_action(GameAction::HardDrop, &mut ui), Flow::Continue);
        assert_eq!(ui.prompts, 0);

        assert_eq!(session.tick(300, &mut ui), Flow::Quit);
        assert_eq!(ui.prompts, 1);
        assert_eq!(ui.statuses.last(), Some(&StatusMessage::GameOver));
        assert_eq!(session.state().phase(), Phase::GameOver);
        assert!(!session.state().timer_running());
    }

    #[test]
    fn game_over_restarts_on_yes() {
        let mut session = session(MemoryScoreStore::new(), ShapeKind::Square);
        let mut ui = RecordingUi::answering(&[true]);
        session.start(&mut ui);
        session.state_mut().board_mut().set(6, 21, ShapeKind::Z);
        session.handle_action(GameAction::HardDrop, &mut ui);

        assert_eq!(session.tick(300, &mut ui), Flow::Continue);

        assert_eq!(ui.prompts, 1);
        assert_eq!(session.state().phase(), Phase::Running);
        assert_eq!(session.state().board().filled_count(), 0);
        assert_eq!(
            ui.statuses[ui.statuses.len() - 2..],
            [
                StatusMessage::GameOver,
                StatusMessage::Score {
                    score: 0,
                    max_score: 0
                }
            ]
        );
    }

    #[test]
    fn restart_key_asks_first() {
        let mut session = session(MemoryScoreStore::new(), ShapeKind::Line);
        let mut ui = RecordingUi::answering(&[true, false]);
        session.start(&mut ui);
        fill_row_except(&mut session, 0, 6);
        session.handle_action(GameAction::HardDrop, &mut ui);
        session.tick(300, &mut ui);
        assert_eq!(session.score(), 100);

        assert_eq!(session.handle_action(GameAction::Restart, &mut ui), Flow::Continue);
        assert_eq!(session.score(), 0);
        assert_eq!(session.max_score(), 100);

        assert_eq!(session.handle_action(GameAction::Restart, &mut ui), Flow::Quit);
        assert_eq!(ui.prompts, 2);
    }

    #[test]
    fn explicit_restart_game() {
        let mut session = session(MemoryScoreStore::new(), ShapeKind::T);
        let mut ui = RecordingUi::answering(&[true]);

        assert_eq!(session.restart_game(&mut ui), Flow::Continue);
        assert_eq!(session.state().phase(), Phase::Running);
        assert_eq!(ui.statuses.len(), 1);
    }

    #[test]
    fn close_reports_boxed_store_failure() {
        struct UnclosableStore;

        impl ScoreStore for UnclosableStore {
            fn insert_score(&mut self, _score: u32) -> Result<(), StoreError> {
                Ok(())
            }

            fn max_score(&self) -> Result<u32, StoreError> {
                Ok(0)
            }

            fn records(&self) -> Result<Vec<ScoreRecord>, StoreError> {
                Ok(Vec::new())
            }

            fn close_boxed(self: Box<Self>) -> Result<(), StoreError> {
                Err(StoreError::Unavailable("locked".into()))
            }
        }

        let store: Box<dyn ScoreStore> = Box::new(UnclosableStore);
        let session = session(store, ShapeKind::T);
        assert!(matches!(session.close(), Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn close_releases_store() {
        let session = session(MemoryScoreStore::new(), ShapeKind::T);
        assert!(session.close().is_ok());
    }
}
