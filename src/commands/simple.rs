//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. A line of `row,col` pairs is replayed as
//! one drag gesture; `tap row,col` replays a single tap. Deferred tasks run as
//! soon as the result has been printed.

use crate::core::{Coord, CoordError};
use crate::game::{RenderSnapshot, SessionController, SnapshotStore};
use crate::output::{print_help, print_snapshot};
use crate::wordlists::WordOracle;
use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Drag(Vec<Coord>),
    Tap(Coord),
    Hint,
    New,
    Grid,
    Help,
    Quit,
}

/// Error type for unparseable input lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    Coord(CoordError),
    Unknown(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Enter cells like '1,0 1,1' or a command"),
            Self::Coord(e) => write!(f, "{e}"),
            Self::Unknown(cmd) => write!(f, "Unknown command '{cmd}', type 'help'"),
        }
    }
}

impl std::error::Error for InputError {}

impl From<CoordError> for InputError {
    fn from(e: CoordError) -> Self {
        Self::Coord(e)
    }
}

/// Parse one input line
///
/// # Errors
/// Returns `InputError` for blank lines, bad coordinates and unknown words.
pub fn parse_command(line: &str) -> Result<SimpleCommand, InputError> {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "" => Err(InputError::Empty),
        "quit" | "q" | "exit" => Ok(SimpleCommand::Quit),
        "hint" | "h" => Ok(SimpleCommand::Hint),
        "new" | "n" => Ok(SimpleCommand::New),
        "grid" | "g" => Ok(SimpleCommand::Grid),
        "help" | "?" => Ok(SimpleCommand::Help),
        _ => {
            if let Some(rest) = line.strip_prefix("tap ") {
                return Ok(SimpleCommand::Tap(rest.trim().parse()?));
            }
            if !line.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(InputError::Unknown(line));
            }
            let cells = line
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<Coord>, _>>()?;
            Ok(SimpleCommand::Drag(cells))
        }
    }
}

/// Apply a gameplay command, running any deferred work after `show` sees the result
///
/// Returns `None` for commands that do not touch the session.
pub fn apply<O, S>(
    session: &mut SessionController<O, S>,
    command: &SimpleCommand,
    mut show: impl FnMut(&RenderSnapshot),
) -> Option<RenderSnapshot>
where
    O: WordOracle,
    S: SnapshotStore,
{
    let snapshot = match command {
        SimpleCommand::Drag(cells) => replay_drag(session, cells)?,
        SimpleCommand::Tap(cell) => {
            let id = session.pointer_down(*cell).drag?;
            session.pointer_up(id, Some(*cell))
        }
        SimpleCommand::Hint => session.request_hint(),
        SimpleCommand::New => session.new_game(),
        SimpleCommand::Grid => session.snapshot(),
        SimpleCommand::Help | SimpleCommand::Quit => return None,
    };

    show(&snapshot);
    let mut last = snapshot.clone();
    for deferred in &snapshot.scheduled {
        last = session.run_deferred(deferred.task);
    }
    Some(last)
}

fn replay_drag<O, S>(session: &mut SessionController<O, S>, cells: &[Coord]) -> Option<RenderSnapshot>
where
    O: WordOracle,
    S: SnapshotStore,
{
    let (&first, rest) = cells.split_first()?;
    let id = session.pointer_down(first).drag?;
    for &cell in rest {
        session.pointer_move(id, cell);
    }
    Some(session.pointer_up(id, cells.last().copied()))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<O, S>(session: &mut SessionController<O, S>) -> Result<(), String>
where
    O: WordOracle,
    S: SnapshotStore,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Strands - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let puzzle = session.puzzle().clone();
    print_snapshot(&puzzle, &session.snapshot());

    loop {
        let Some(line) = get_user_input("Move")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{} {e}\n", "❌".red());
                continue;
            }
        };

        match command {
            SimpleCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            SimpleCommand::Help => print_help(),
            SimpleCommand::New => {
                apply(session, &command, |_| {});
                println!("\n🔄 New game started!\n");
                print_snapshot(&puzzle, &session.snapshot());
            }
            _ => {
                let shown = apply(session, &command, |snapshot| {
                    print_snapshot(&puzzle, snapshot);
                });
                if shown.as_ref().is_some_and(RenderSnapshot::is_complete)
                    && command != SimpleCommand::Grid
                {
                    println!("{}", "🎉 All theme words found!".bright_green().bold());
                }
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MemoryStore, Verdict};
    use crate::puzzle::fixtures;
    use crate::wordlists::Dictionary;

    fn session() -> SessionController<Dictionary, MemoryStore> {
        SessionController::new(
            fixtures::sample(),
            Dictionary::from_words(["real"]),
            MemoryStore::new(),
        )
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(" Q "), Ok(SimpleCommand::Quit));
        assert_eq!(parse_command("hint"), Ok(SimpleCommand::Hint));
        assert_eq!(parse_command("n"), Ok(SimpleCommand::New));
        assert_eq!(parse_command("grid"), Ok(SimpleCommand::Grid));
        assert_eq!(
            parse_command("tap 2,3"),
            Ok(SimpleCommand::Tap(Coord::new(2, 3)))
        );
        assert_eq!(
            parse_command("1,0 1,1  1,2"),
            Ok(SimpleCommand::Drag(vec![
                Coord::new(1, 0),
                Coord::new(1, 1),
                Coord::new(1, 2)
            ]))
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_command("   "), Err(InputError::Empty));
        assert!(matches!(parse_command("dance"), Err(InputError::Unknown(_))));
        assert!(matches!(parse_command("1,0 1;1"), Err(InputError::Coord(_))));
        assert!(matches!(parse_command("tap x"), Err(InputError::Coord(_))));
    }

    #[test]
    fn drag_line_submits_word_then_clears() {
        let mut session = session();
        let command = parse_command("1,0 1,1 1,2 1,3").unwrap();

        let mut shown = Vec::new();
        let last = apply(&mut session, &command, |s| shown.push(s.clone())).unwrap();

        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].verdict, Some(Verdict::ThemeWord));
        assert_eq!(shown[0].status.as_ref().unwrap().text, "IRIS");
        assert!(last.status.is_none());
        assert!(last.path.is_empty());
        assert!(session.state().is_found("IRIS"));
    }

    #[test]
    fn taps_build_a_word() {
        let mut session = session();
        for line in ["tap 0,0", "tap 0,1", "tap 0,2", "tap 0,3"] {
            let snapshot = apply(&mut session, &parse_command(line).unwrap(), |_| {}).unwrap();
            assert!(snapshot.verdict.is_none());
        }
        let mut verdict = None;
        apply(&mut session, &SimpleCommand::Tap(Coord::new(0, 3)), |s| {
            verdict = s.verdict;
        });
        assert_eq!(verdict, Some(Verdict::ValidNonTheme));
        assert_eq!(session.state().mistake_count(), 1);
    }

    #[test]
    fn off_grid_drag_start_is_ignored() {
        let mut session = session();
        let command = parse_command("9,9 1,1").unwrap();
        assert!(apply(&mut session, &command, |_| {}).is_none());
    }

    #[test]
    fn help_and_quit_do_not_touch_session() {
        let mut session = session();
        assert!(apply(&mut session, &SimpleCommand::Help, |_| {}).is_none());
        assert!(apply(&mut session, &SimpleCommand::Quit, |_| {}).is_none());
    }
}
