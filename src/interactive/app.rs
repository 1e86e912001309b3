//! TUI application state and event loop
//!
//! Mouse events become pointer gestures on the session controller. Deferred
//! tasks wait in a timer queue that the loop drains between `event::poll`
//! timeouts.

use super::rendering::{board_rect, cell_at, ui};
use crate::game::{DeferredTask, HintOutcome, RenderSnapshot, SessionController, SnapshotStore};
use crate::wordlists::DictionaryHandle;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest the loop sleeps without input, so dictionary status stays fresh
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<S: SnapshotStore> {
    pub session: SessionController<DictionaryHandle, S>,
    pub view: RenderSnapshot,
    /// One-line feedback for key commands
    pub notice: Option<String>,
    pub should_quit: bool,
    timers: Vec<(Instant, DeferredTask)>,
}

impl<S: SnapshotStore> App<S> {
    #[must_use]
    pub fn new(session: SessionController<DictionaryHandle, S>) -> Self {
        let view = session.snapshot();
        Self {
            session,
            view,
            notice: None,
            should_quit: false,
            timers: Vec::new(),
        }
    }

    #[must_use]
    pub fn dictionary_ready(&self) -> bool {
        self.session.oracle().is_resolved()
    }

    /// Adopt a new snapshot and queue its deferred tasks
    pub fn apply(&mut self, snapshot: RenderSnapshot, now: Instant) {
        for deferred in &snapshot.scheduled {
            self.timers.push((now + deferred.delay, deferred.task));
        }
        self.view = snapshot;
    }

    /// When the next timer fires, if any
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|&(at, _)| at).min()
    }

    /// Run every timer due at `now`, oldest first
    pub fn run_due_timers(&mut self, now: Instant) {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|&(at, _)| at <= now);
        self.timers = pending;
        due.sort_by_key(|&(at, _)| at);

        for (_, task) in due {
            self.view = self.session.run_deferred(task);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('h') => {
                let snapshot = self.session.request_hint();
                self.notice = match &snapshot.hint_outcome {
                    Some(HintOutcome::Unavailable) => Some("No hint yet".to_string()),
                    Some(HintOutcome::Banked) => Some("A hint is already showing".to_string()),
                    Some(HintOutcome::Exhausted) => Some("Nothing left to hint".to_string()),
                    Some(HintOutcome::Revealed(_)) | None => None,
                };
                self.apply(snapshot, now);
            }
            KeyCode::Char('n') => {
                self.timers.clear();
                self.notice = Some("New game started".to_string());
                let snapshot = self.session.new_game();
                self.apply(snapshot, now);
            }
            _ => {}
        }
    }

    /// Translate a mouse event given the frame area it was delivered against
    pub fn on_mouse(&mut self, mouse: MouseEvent, frame: Rect, now: Instant) {
        let grid = self.session.puzzle().grid();
        let board = board_rect(frame, grid.rows(), grid.cols());
        let cell = cell_at(board, grid.rows(), grid.cols(), mouse.column, mouse.row);

        let snapshot = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(cell) = cell else { return };
                self.notice = None;
                self.session.pointer_down(cell)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (Some(id), Some(cell)) = (self.view.drag, cell) else {
                    return;
                };
                self.session.pointer_move(id, cell)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(id) = self.view.drag else { return };
                self.session.pointer_up(id, cell)
            }
            _ => return,
        };
        self.apply(snapshot, now);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SnapshotStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SnapshotStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    let mut frame = Rect::default();

    loop {
        terminal.draw(|f| {
            frame = f.area();
            ui(f, &app);
        })?;

        let now = Instant::now();
        let timeout = app
            .next_deadline()
            .map_or(IDLE_POLL, |at| at.saturating_duration_since(now).min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.on_key(key, Instant::now());
                }
                Event::Mouse(mouse) => app.on_mouse(mouse, frame, Instant::now()),
                Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
                _ => {}
            }
        }

        app.run_due_timers(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
