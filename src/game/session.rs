//! Session controller
//!
//! Drives a game from abstract pointer events. Every operation returns a
//! [`RenderSnapshot`] describing what the front end should show, plus any
//! deferred tasks it should schedule. The controller never waits: delayed
//! effects come back as `(delay, task)` pairs and are executed later through
//! [`SessionController::run_deferred`].

use super::hints::{self, HintMeter, HintOutcome};
use super::judge::{Verdict, classify};
use super::state::{FoundConnection, GameState};
use super::store::SnapshotStore;
use crate::core::{Coord, PathTracker, TapOutcome};
use crate::puzzle::Puzzle;
use crate::wordlists::WordOracle;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long success banners and rejection messages stay up
pub const HOLD: Duration = Duration::from_secs(3);

/// Identifies one pointer-down..pointer-up gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DragId(u64);

/// Work the front end must hand back after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredTask {
    /// Clear the status message and any path held on screen
    ClearStatus(ClearToken),
}

/// Ties a clear to the message that scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClearToken(u64);

/// A task to run after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    pub delay: Duration,
    pub task: DeferredTask,
}

/// Styling class of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Rejected,
    Theme,
    Spangram,
}

/// Transient text shown in place of the current word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    pub auto_clear: bool,
}

/// Everything the front end needs to draw the game
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    /// Word spelled by the in-progress path
    pub current_word: String,
    /// Cells of the in-progress path, or of a just-found word still on screen
    pub path: Vec<Coord>,
    /// Every found word along its canonical path
    pub found: Vec<FoundConnection>,
    /// The word found by the latest submission, until its banner clears
    pub newly_found: Option<FoundConnection>,
    pub hint_cells: Option<Vec<Coord>>,
    pub hint_meter: HintMeter,
    pub status: Option<StatusMessage>,
    pub found_count: usize,
    pub total_words: usize,
    /// The active gesture, if a pointer is down
    pub drag: Option<DragId>,
    /// Verdict of a submission made by this operation
    pub verdict: Option<Verdict>,
    /// Result of a hint request made by this operation
    pub hint_outcome: Option<HintOutcome>,
    /// Tasks to schedule
    pub scheduled: Vec<Deferred>,
}

impl RenderSnapshot {
    /// "N of M theme words found."
    #[must_use]
    pub fn found_summary(&self) -> String {
        format!(
            "{} of {} theme words found.",
            self.found_count, self.total_words
        )
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.found_count == self.total_words
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Dragging {
        id: DragId,
        anchor: Coord,
        has_moved: bool,
    },
}

/// Owns one game and turns pointer gestures into game progress
pub struct SessionController<O: WordOracle, S: SnapshotStore> {
    puzzle: Puzzle,
    oracle: O,
    store: S,
    state: GameState,
    tracker: PathTracker,
    phase: Phase,
    next_drag: u64,
    held: Vec<Coord>,
    status: Option<StatusMessage>,
    newly_found: Option<FoundConnection>,
    clear_token: u64,
    rng: StdRng,
}

impl<O: WordOracle, S: SnapshotStore> SessionController<O, S> {
    /// Start a session, restoring saved progress from `store`
    ///
    /// An unreadable or corrupt snapshot is logged and replaced by a fresh game.
    pub fn new(puzzle: Puzzle, oracle: O, store: S) -> Self {
        let state = match store.load() {
            Ok(Some(snapshot)) => {
                let state = GameState::restore(snapshot, &puzzle);
                info!(
                    found = state.found_count(),
                    mistakes = state.mistake_count(),
                    "Restored saved game"
                );
                state
            }
            Ok(None) => GameState::new(),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable saved game");
                GameState::new()
            }
        };

        Self {
            puzzle,
            oracle,
            store,
            state,
            tracker: PathTracker::new(),
            phase: Phase::Idle,
            next_drag: 0,
            held: Vec::new(),
            status: None,
            newly_found: None,
            clear_token: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a specific random source for hint selection
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn oracle(&self) -> &O {
        &self.oracle
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Pointer pressed on `cell`: start a new gesture
    ///
    /// A hint pointing at an unfound word survives the press.
    pub fn pointer_down(&mut self, cell: Coord) -> RenderSnapshot {
        if !self.puzzle.grid().contains(cell) {
            return self.snapshot();
        }

        if self.state.release_stale_hint() {
            self.persist();
        }
        self.held.clear();

        let id = DragId(self.next_drag);
        self.next_drag += 1;
        self.phase = Phase::Dragging {
            id,
            anchor: cell,
            has_moved: false,
        };
        debug!(?id, %cell, "Pointer down");

        self.snapshot()
    }

    /// Pointer dragged over `cell` during gesture `drag`
    pub fn pointer_move(&mut self, drag: DragId, cell: Coord) -> RenderSnapshot {
        let Phase::Dragging {
            id,
            anchor,
            has_moved,
        } = self.phase
        else {
            return self.snapshot();
        };
        if id != drag {
            debug!(?drag, active = ?id, "Ignoring move from stale gesture");
            return self.snapshot();
        }
        if !self.puzzle.grid().contains(cell) {
            return self.snapshot();
        }

        if !has_moved {
            if cell == anchor {
                return self.snapshot();
            }
            self.phase = Phase::Dragging {
                id,
                anchor,
                has_moved: true,
            };
            self.tracker.begin(anchor);
        }
        self.tracker.extend(cell);

        self.snapshot()
    }

    /// Pointer released, over `cell` or outside the grid (`None`)
    ///
    /// A gesture that moved submits its path. A tap builds the path one cell at
    /// a time; tapping the last cell again submits it.
    pub fn pointer_up(&mut self, drag: DragId, cell: Option<Coord>) -> RenderSnapshot {
        let Phase::Dragging { id, has_moved, .. } = self.phase else {
            return self.snapshot();
        };
        if id != drag {
            debug!(?drag, active = ?id, "Ignoring release from stale gesture");
            return self.snapshot();
        }
        self.phase = Phase::Idle;

        if has_moved {
            return self.commit();
        }

        let Some(cell) = cell.filter(|&c| self.puzzle.grid().contains(c)) else {
            return self.snapshot();
        };
        match self.tracker.tap(cell) {
            TapOutcome::Commit => self.commit(),
            TapOutcome::Started | TapOutcome::Extended | TapOutcome::Restarted => {
                self.snapshot()
            }
        }
    }

    /// Spend a banked hint
    pub fn request_hint(&mut self) -> RenderSnapshot {
        let outcome = hints::request_hint(&mut self.state, &self.puzzle, &mut self.rng);
        if outcome != HintOutcome::Unavailable {
            info!(?outcome, spent = self.state.spent_hints(), "Hint spent");
            self.persist();
        }

        let mut snapshot = self.snapshot();
        snapshot.hint_outcome = Some(outcome);
        snapshot
    }

    /// Throw away all progress and the saved snapshot
    pub fn new_game(&mut self) -> RenderSnapshot {
        info!("Starting new game");
        self.state = GameState::new();
        self.store.clear();
        self.tracker.reset();
        self.phase = Phase::Idle;
        self.held.clear();
        self.status = None;
        self.newly_found = None;
        self.clear_token += 1;
        self.snapshot()
    }

    /// Execute a task previously returned in [`RenderSnapshot::scheduled`]
    ///
    /// Tasks superseded by a newer message or a new game are ignored.
    pub fn run_deferred(&mut self, task: DeferredTask) -> RenderSnapshot {
        match task {
            DeferredTask::ClearStatus(ClearToken(token)) if token == self.clear_token => {
                self.status = None;
                self.newly_found = None;
                self.held.clear();
            }
            DeferredTask::ClearStatus(_) => debug!("Ignoring superseded clear"),
        }
        self.snapshot()
    }

    /// Current render state, with no new events
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        let path = if self.tracker.is_empty() {
            self.held.clone()
        } else {
            self.tracker.cells().to_vec()
        };

        RenderSnapshot {
            current_word: self.tracker.current_word(self.puzzle.grid()),
            path,
            found: self.state.found_connections(&self.puzzle),
            newly_found: self.newly_found.clone(),
            hint_cells: self.state.hint_cells(&self.puzzle).map(<[Coord]>::to_vec),
            hint_meter: hints::meter(self.state.mistake_count(), self.state.spent_hints()),
            status: self.status.clone(),
            found_count: self.state.found_count(),
            total_words: self.puzzle.total_words(),
            drag: match self.phase {
                Phase::Dragging { id, .. } => Some(id),
                Phase::Idle => None,
            },
            verdict: None,
            hint_outcome: None,
            scheduled: Vec::new(),
        }
    }

    fn commit(&mut self) -> RenderSnapshot {
        let word = self.tracker.current_word(self.puzzle.grid());
        let cells = self.tracker.take();
        let verdict = classify(&word, &mut self.state, &self.puzzle, &self.oracle);
        info!(word = %word, ?verdict, "Submitted word");

        let deferred = if verdict.is_solution() {
            self.state.mark_found(&word);
            self.newly_found = self
                .state
                .found_connections(&self.puzzle)
                .into_iter()
                .find(|c| c.word == word);
            self.held = cells;

            let (text, kind) = if verdict == Verdict::Spangram {
                ("SPANGRAM!".to_string(), MessageKind::Spangram)
            } else {
                (word, MessageKind::Theme)
            };
            self.show(text, kind)
        } else {
            if verdict.is_mistake() {
                self.state.add_mistake();
            }
            let text = verdict.rejection_message().unwrap_or_default();
            self.show(text.to_string(), MessageKind::Rejected)
        };

        if !matches!(
            verdict,
            Verdict::TooShort | Verdict::AlreadyUsed | Verdict::NotAWord
        ) {
            self.persist();
        }

        let mut snapshot = self.snapshot();
        snapshot.verdict = Some(verdict);
        snapshot.scheduled.push(deferred);
        snapshot
    }

    fn show(&mut self, text: String, kind: MessageKind) -> Deferred {
        self.clear_token += 1;
        self.status = Some(StatusMessage {
            text,
            kind,
            auto_clear: true,
        });
        Deferred {
            delay: HOLD,
            task: DeferredTask::ClearStatus(ClearToken(self.clear_token)),
        }
    }

    fn persist(&self) {
        self.store.save(&self.state.to_persisted());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::store::{MemoryStore, decode};
    use crate::puzzle::{SolutionKind, builtin, fixtures};
    use crate::wordlists::Dictionary;

    type Controller = SessionController<Dictionary, MemoryStore>;

    fn oracle() -> Dictionary {
        Dictionary::from_words(["real", "stir", "rats", "stair", "laser"])
    }

    fn sample_session(store: MemoryStore) -> Controller {
        SessionController::new(fixtures::sample(), oracle(), store)
            .with_rng(StdRng::seed_from_u64(42))
    }

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    /// Press on the first cell, drag through the rest, release on the last
    fn drag(session: &mut Controller, cells: &[Coord]) -> RenderSnapshot {
        let down = session.pointer_down(cells[0]);
        let id = down.drag.unwrap();
        for &cell in &cells[1..] {
            session.pointer_move(id, cell);
        }
        session.pointer_up(id, cells.last().copied())
    }

    fn tap(session: &mut Controller, cell: Coord) -> RenderSnapshot {
        let id = session.pointer_down(cell).drag.unwrap();
        session.pointer_up(id, Some(cell))
    }

    fn stir_path() -> Vec<Coord> {
        vec![c(2, 0), c(2, 1), c(1, 2), c(1, 1)]
    }

    fn rats_path() -> Vec<Coord> {
        vec![c(2, 3), c(2, 2), c(2, 1), c(2, 0)]
    }

    #[test]
    fn theme_word_on_builtin_grid() {
        let puzzle = builtin().unwrap();
        let iris = puzzle.solution("IRIS").unwrap().path.clone();
        let mut session =
            SessionController::new(puzzle, Dictionary::fallback(), MemoryStore::new());

        let snapshot = drag(&mut session, &iris);

        assert_eq!(snapshot.verdict, Some(Verdict::ThemeWord));
        assert!(session.state().is_found("IRIS"));
        assert_eq!(session.state().mistake_count(), 0);
        assert_eq!(snapshot.found_count, 1);
        assert_eq!(snapshot.found_summary(), "1 of 7 theme words found.");
    }

    #[test]
    fn theme_word_holds_path_until_clear() {
        let mut session = sample_session(MemoryStore::new());
        let snapshot = drag(&mut session, &fixtures::iris_path());

        let status = snapshot.status.clone().unwrap();
        assert_eq!(status.text, "IRIS");
        assert_eq!(status.kind, MessageKind::Theme);
        assert!(status.auto_clear);
        assert_eq!(snapshot.path, fixtures::iris_path());
        assert_eq!(snapshot.current_word, "");
        assert_eq!(snapshot.newly_found.as_ref().unwrap().word, "IRIS");
        assert_eq!(snapshot.scheduled.len(), 1);
        assert_eq!(snapshot.scheduled[0].delay, HOLD);

        let cleared = session.run_deferred(snapshot.scheduled[0].task);
        assert!(cleared.status.is_none());
        assert!(cleared.path.is_empty());
        assert!(cleared.newly_found.is_none());
        assert_eq!(cleared.found.len(), 1);
    }

    #[test]
    fn real_word_is_a_mistake_then_already_used() {
        let mut session = sample_session(MemoryStore::new());

        let first = drag(&mut session, &fixtures::real_path());
        assert_eq!(first.verdict, Some(Verdict::ValidNonTheme));
        assert_eq!(first.status.unwrap().text, "Not a theme word...");
        assert_eq!(session.state().mistake_count(), 1);

        let second = drag(&mut session, &fixtures::real_alt_path());
        assert_eq!(second.verdict, Some(Verdict::AlreadyUsed));
        assert_eq!(second.status.unwrap().text, "Word already found...");
        assert_eq!(session.state().mistake_count(), 1);
    }

    #[test]
    fn short_drag_is_rejected_without_side_effects() {
        let store = MemoryStore::new();
        let mut session = sample_session(store.clone());

        let snapshot = drag(&mut session, &[c(0, 0), c(0, 1), c(0, 2)]);

        assert_eq!(snapshot.verdict, Some(Verdict::TooShort));
        assert_eq!(snapshot.status.unwrap().text, "Too short...");
        assert!(snapshot.path.is_empty());
        assert_eq!(session.state(), &GameState::new());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn non_word_is_rejected_without_side_effects() {
        let store = MemoryStore::new();
        let mut session = sample_session(store.clone());

        // R-E-I-R along (0,0) (0,1) (1,2) (1,1)
        let snapshot = drag(&mut session, &[c(0, 0), c(0, 1), c(1, 2), c(1, 1)]);

        assert_eq!(snapshot.verdict, Some(Verdict::NotAWord));
        assert_eq!(snapshot.status.unwrap().text, "Not a word...");
        assert!(!session.state().is_used("reir"));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn three_mistakes_earn_a_hint() {
        let mut session = sample_session(MemoryStore::new());
        drag(&mut session, &fixtures::real_path());
        drag(&mut session, &stir_path());
        let snapshot = drag(&mut session, &rats_path());

        assert_eq!(session.state().mistake_count(), 3);
        assert!(snapshot.hint_meter.ready);

        let hinted = session.request_hint();
        let Some(HintOutcome::Revealed(word)) = hinted.hint_outcome else {
            panic!("expected a revealed hint, got {:?}", hinted.hint_outcome);
        };
        assert!(word == "IRIS" || word == "SIRE");
        assert_eq!(session.state().active_hint(), Some(word.as_str()));
        assert_eq!(
            hinted.hint_cells.as_deref(),
            session
                .puzzle()
                .solution(&word)
                .map(|s| s.path.as_slice())
        );
        assert!(!hinted.hint_meter.ready);

        let again = session.request_hint();
        assert_eq!(again.hint_outcome, Some(HintOutcome::Unavailable));
    }

    #[test]
    fn hint_survives_pointer_down_and_clears_when_found() {
        let mut session = sample_session(MemoryStore::new());
        drag(&mut session, &fixtures::real_path());
        drag(&mut session, &stir_path());
        drag(&mut session, &rats_path());
        let Some(HintOutcome::Revealed(word)) = session.request_hint().hint_outcome else {
            panic!("expected a revealed hint");
        };

        let down = session.pointer_down(c(0, 0));
        assert!(down.hint_cells.is_some());
        session.pointer_up(down.drag.unwrap(), None);

        let path = session.puzzle().solution(&word).unwrap().path.clone();
        let found = drag(&mut session, &path);
        assert_eq!(found.verdict, Some(Verdict::ThemeWord));
        assert!(found.hint_cells.is_none());
        assert_eq!(session.state().active_hint(), None);
    }

    #[test]
    fn spangram_is_styled_distinctly() {
        let mut session = sample_session(MemoryStore::new());
        let snapshot = drag(&mut session, &fixtures::star_path());

        assert_eq!(snapshot.verdict, Some(Verdict::Spangram));
        let status = snapshot.status.unwrap();
        assert_eq!(status.text, "SPANGRAM!");
        assert_eq!(status.kind, MessageKind::Spangram);
        assert_eq!(snapshot.found_count, 1);
        assert_eq!(snapshot.found[0].kind, SolutionKind::Spangram);
    }

    #[test]
    fn newly_found_reports_connection() {
        let mut session = sample_session(MemoryStore::new());
        let snapshot = drag(&mut session, &fixtures::sire_path());
        let connection = snapshot.newly_found.unwrap();
        assert_eq!(connection.cells, fixtures::sire_path());
        assert_eq!(connection.kind, SolutionKind::Theme);
    }

    #[test]
    fn backtracking_during_drag_shortens_word() {
        let mut session = sample_session(MemoryStore::new());
        let id = session.pointer_down(c(1, 0)).drag.unwrap();
        session.pointer_move(id, c(1, 1));
        session.pointer_move(id, c(1, 2));
        let back = session.pointer_move(id, c(1, 1));
        assert_eq!(back.current_word, "IR");

        session.pointer_move(id, c(1, 2));
        let snapshot = session.pointer_move(id, c(1, 3));
        assert_eq!(snapshot.current_word, "IRIS");
        assert_eq!(
            session.pointer_up(id, Some(c(1, 3))).verdict,
            Some(Verdict::ThemeWord)
        );
    }

    #[test]
    fn non_adjacent_moves_are_ignored() {
        let mut session = sample_session(MemoryStore::new());
        let id = session.pointer_down(c(0, 0)).drag.unwrap();
        session.pointer_move(id, c(0, 1));
        let snapshot = session.pointer_move(id, c(2, 3));
        assert_eq!(snapshot.current_word, "RE");
    }

    #[test]
    fn first_move_registers_anchor_and_target() {
        let mut session = sample_session(MemoryStore::new());
        let id = session.pointer_down(c(0, 0)).drag.unwrap();

        let same_cell = session.pointer_move(id, c(0, 0));
        assert!(same_cell.path.is_empty());

        let moved = session.pointer_move(id, c(0, 1));
        assert_eq!(moved.path, [c(0, 0), c(0, 1)]);
    }

    #[test]
    fn stale_gestures_are_ignored() {
        let mut session = sample_session(MemoryStore::new());
        let old = session.pointer_down(c(1, 0)).drag.unwrap();
        let new = session.pointer_down(c(0, 0)).drag.unwrap();
        assert_ne!(old, new);

        let moved = session.pointer_move(old, c(1, 1));
        assert!(moved.path.is_empty());

        let released = session.pointer_up(old, Some(c(1, 1)));
        assert!(released.verdict.is_none());
        assert_eq!(released.drag, Some(new));
        assert!(session.is_dragging());
    }

    #[test]
    fn release_after_idle_is_ignored() {
        let mut session = sample_session(MemoryStore::new());
        let id = session.pointer_down(c(1, 0)).drag.unwrap();
        session.pointer_up(id, Some(c(1, 0)));
        let again = session.pointer_up(id, Some(c(1, 0)));
        assert!(again.verdict.is_none());
        assert_eq!(again.path, [c(1, 0)]);
    }

    #[test]
    fn taps_build_and_commit_a_path() {
        let mut session = sample_session(MemoryStore::new());
        for cell in fixtures::iris_path() {
            let snapshot = tap(&mut session, cell);
            assert!(snapshot.verdict.is_none());
        }
        assert_eq!(session.snapshot().current_word, "IRIS");

        let committed = tap(&mut session, c(1, 3));
        assert_eq!(committed.verdict, Some(Verdict::ThemeWord));
    }

    #[test]
    fn double_tap_on_single_cell_is_too_short() {
        let mut session = sample_session(MemoryStore::new());
        tap(&mut session, c(0, 0));
        let snapshot = tap(&mut session, c(0, 0));
        assert_eq!(snapshot.verdict, Some(Verdict::TooShort));
        assert!(snapshot.path.is_empty());
    }

    #[test]
    fn tap_elsewhere_restarts_path() {
        let mut session = sample_session(MemoryStore::new());
        tap(&mut session, c(0, 0));
        tap(&mut session, c(0, 1));
        let snapshot = tap(&mut session, c(2, 3));
        assert_eq!(snapshot.path, [c(2, 3)]);
        assert_eq!(snapshot.current_word, "R");
    }

    #[test]
    fn release_off_grid_without_moving_keeps_path() {
        let mut session = sample_session(MemoryStore::new());
        tap(&mut session, c(0, 0));
        let id = session.pointer_down(c(0, 1)).drag.unwrap();
        let snapshot = session.pointer_up(id, None);
        assert!(snapshot.verdict.is_none());
        assert_eq!(snapshot.path, [c(0, 0)]);
        assert!(!session.is_dragging());
    }

    #[test]
    fn release_off_grid_after_moving_commits() {
        let mut session = sample_session(MemoryStore::new());
        let id = session.pointer_down(c(2, 0)).drag.unwrap();
        for cell in &fixtures::star_path()[1..] {
            session.pointer_move(id, *cell);
        }
        let snapshot = session.pointer_up(id, None);
        assert_eq!(snapshot.verdict, Some(Verdict::Spangram));
    }

    #[test]
    fn newer_message_supersedes_older_clear() {
        let mut session = sample_session(MemoryStore::new());
        let first = drag(&mut session, &fixtures::real_path());
        let second = drag(&mut session, &fixtures::iris_path());

        let stale = session.run_deferred(first.scheduled[0].task);
        assert_eq!(stale.status.as_ref().unwrap().text, "IRIS");
        assert_eq!(stale.path, fixtures::iris_path());

        let cleared = session.run_deferred(second.scheduled[0].task);
        assert!(cleared.status.is_none());
    }

    #[test]
    fn new_drag_releases_held_path() {
        let mut session = sample_session(MemoryStore::new());
        drag(&mut session, &fixtures::iris_path());
        let down = session.pointer_down(c(0, 0));
        assert!(down.path.is_empty());
        // Banner stays until its timer fires
        assert!(down.status.is_some());
    }

    #[test]
    fn progress_is_persisted_and_restored() {
        let store = MemoryStore::new();
        {
            let mut session = sample_session(store.clone());
            drag(&mut session, &fixtures::iris_path());
            drag(&mut session, &fixtures::real_path());
        }

        let saved = decode(&store.contents().unwrap()).unwrap();
        assert_eq!(saved.found, ["IRIS"]);
        assert_eq!(saved.used_words, ["iris", "real"]);
        assert_eq!(saved.mistake_count, 1);

        let session = sample_session(store);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.found_count, 1);
        assert_eq!(snapshot.found[0].cells, fixtures::iris_path());
        assert!((snapshot.hint_meter.fill - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn corrupt_snapshot_starts_fresh() {
        let store = MemoryStore::with_contents("{\"found\": [\"IRIS\"");
        let session = sample_session(store);
        assert_eq!(session.state(), &GameState::new());
    }

    #[test]
    fn restored_hint_is_highlighted() {
        let store = MemoryStore::with_contents(
            r#"{"found":[],"usedWords":["real","stir","rats"],"mistakeCount":3,"spentHints":1,"currentHintWord":"SIRE"}"#,
        );
        let session = sample_session(store);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.hint_cells, Some(fixtures::sire_path()));
        assert!(!snapshot.hint_meter.ready);
    }

    #[test]
    fn new_game_clears_everything() {
        let store = MemoryStore::new();
        let mut session = sample_session(store.clone());
        let found = drag(&mut session, &fixtures::iris_path());
        assert!(store.contents().is_some());

        let fresh = session.new_game();
        assert_eq!(fresh.found_count, 0);
        assert!(fresh.status.is_none());
        assert!(fresh.path.is_empty());
        assert!(store.contents().is_none());
        assert_eq!(session.state(), &GameState::new());

        // Timers from the old game no longer apply
        let after = session.run_deferred(found.scheduled[0].task);
        assert_eq!(after, fresh);

        // The word can be found again
        let again = drag(&mut session, &fixtures::iris_path());
        assert_eq!(again.verdict, Some(Verdict::ThemeWord));
    }

    #[test]
    fn finding_every_word_completes_the_puzzle() {
        let mut session = sample_session(MemoryStore::new());
        drag(&mut session, &fixtures::iris_path());
        drag(&mut session, &fixtures::sire_path());
        let last = drag(&mut session, &fixtures::star_path());
        assert!(last.is_complete());
        assert_eq!(last.found_summary(), "3 of 3 theme words found.");
    }
}
