//! Formatting utilities shared by the CLI and TUI front ends

use crate::core::Coord;
use crate::game::{HintMeter, RenderSnapshot};
use crate::puzzle::SolutionKind;

/// How a grid cell should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    /// Part of the in-progress or just-submitted path
    Path,
    Found(SolutionKind),
    Hint,
}

/// Pick the style for `cell`: path beats found, found beats hint
#[must_use]
pub fn cell_style(cell: Coord, snapshot: &RenderSnapshot) -> CellStyle {
    if snapshot.path.contains(&cell) {
        return CellStyle::Path;
    }
    if let Some(connection) = snapshot.found.iter().find(|c| c.cells.contains(&cell)) {
        return CellStyle::Found(connection.kind);
    }
    if snapshot
        .hint_cells
        .as_ref()
        .is_some_and(|cells| cells.contains(&cell))
    {
        return CellStyle::Hint;
    }
    CellStyle::Plain
}

/// Text for the word line: the word being traced, else any live message
#[must_use]
pub fn status_text(snapshot: &RenderSnapshot) -> &str {
    if !snapshot.current_word.is_empty() {
        return &snapshot.current_word;
    }
    snapshot.status.as_ref().map_or("", |s| s.text.as_str())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Hint button as a bar, full when a hint can be spent
#[must_use]
pub fn hint_meter_bar(meter: HintMeter, width: usize) -> String {
    create_progress_bar(meter.fill, 1.0, width)
}

/// Path as space-separated `row,col` pairs, the same form simple mode reads
#[must_use]
pub fn format_path(cells: &[Coord]) -> String {
    cells
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MemoryStore, SessionController};
    use crate::puzzle::fixtures;
    use crate::wordlists::Dictionary;

    fn snapshot_after_iris() -> RenderSnapshot {
        let mut session =
            SessionController::new(fixtures::sample(), Dictionary::default(), MemoryStore::new());
        let path = fixtures::iris_path();
        let id = session.pointer_down(path[0]).drag.unwrap();
        for &cell in &path[1..] {
            session.pointer_move(id, cell);
        }
        let submitted = session.pointer_up(id, Some(path[3]));
        session.run_deferred(submitted.scheduled[0].task)
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn hint_meter_thirds() {
        let meter = HintMeter {
            fill: 1.0 / 3.0,
            ready: false,
        };
        assert_eq!(hint_meter_bar(meter, 6), "██░░░░");
    }

    #[test]
    fn path_format_matches_simple_mode_input() {
        assert_eq!(format_path(&fixtures::iris_path()), "1,0 1,1 1,2 1,3");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn found_cells_take_their_kind() {
        let snapshot = snapshot_after_iris();
        assert_eq!(
            cell_style(Coord::new(1, 2), &snapshot),
            CellStyle::Found(SolutionKind::Theme)
        );
        assert_eq!(cell_style(Coord::new(2, 2), &snapshot), CellStyle::Plain);
    }

    #[test]
    fn path_overrides_found_and_hint() {
        let mut snapshot = snapshot_after_iris();
        snapshot.hint_cells = Some(fixtures::sire_path());
        snapshot.path = vec![Coord::new(1, 1)];

        assert_eq!(cell_style(Coord::new(1, 1), &snapshot), CellStyle::Path);
        assert_eq!(
            cell_style(Coord::new(1, 3), &snapshot),
            CellStyle::Found(SolutionKind::Theme)
        );
        assert_eq!(cell_style(Coord::new(0, 1), &snapshot), CellStyle::Hint);
    }

    #[test]
    fn status_text_shows_traced_word_over_message() {
        let mut snapshot = snapshot_after_iris();
        assert_eq!(status_text(&snapshot), "");

        snapshot.status = Some(crate::game::StatusMessage {
            text: "Too short...".to_string(),
            kind: crate::game::MessageKind::Rejected,
            auto_clear: true,
        });
        assert_eq!(status_text(&snapshot), "Too short...");

        snapshot.current_word = "RE".to_string();
        assert_eq!(status_text(&snapshot), "RE");
    }
}
