//! Display functions for command results

use super::formatters::{CellStyle, cell_style, format_path, hint_meter_bar, status_text};
use crate::commands::{CheckReport, WordSearchResult};
use crate::core::Coord;
use crate::game::{MessageKind, RenderSnapshot};
use crate::puzzle::{Puzzle, SolutionKind};
use colored::{ColoredString, Colorize};

fn styled_letter(letter: char, style: CellStyle) -> ColoredString {
    let text = format!(" {letter} ");
    match style {
        CellStyle::Plain => text.normal(),
        CellStyle::Path => text.black().on_bright_white().bold(),
        CellStyle::Found(SolutionKind::Theme) => text.black().on_cyan(),
        CellStyle::Found(SolutionKind::Spangram) => text.black().on_yellow().bold(),
        CellStyle::Hint => text.bright_magenta().underline(),
    }
}

/// Print the letter grid styled from a snapshot
pub fn print_grid(puzzle: &Puzzle, snapshot: &RenderSnapshot) {
    let grid = puzzle.grid();
    let header: String = (0..grid.cols()).map(|col| format!("{col:^3}")).collect();
    println!("    {}", header.bright_black());

    for row in 0..grid.rows() {
        let cells: Vec<String> = (0..grid.cols())
            .map(|col| {
                let cell = Coord::new(row, col);
                let letter = grid.letter(cell).unwrap_or(' ');
                styled_letter(letter, cell_style(cell, snapshot)).to_string()
            })
            .collect();
        println!("  {} {}", row.to_string().bright_black(), cells.concat());
    }
}

/// Print the full game view: grid, word line, progress and hint meter
pub fn print_snapshot(puzzle: &Puzzle, snapshot: &RenderSnapshot) {
    println!();
    print_grid(puzzle, snapshot);
    println!();

    let text = status_text(snapshot);
    let kind = snapshot
        .status
        .as_ref()
        .filter(|_| snapshot.current_word.is_empty())
        .map(|s| s.kind);
    let line = match kind {
        Some(MessageKind::Rejected) => text.red().bold(),
        Some(MessageKind::Theme) => text.bright_cyan().bold(),
        Some(MessageKind::Spangram) => text.bright_yellow().bold(),
        None => text.bright_white().bold(),
    };
    println!("  {line}");

    println!("  {}", snapshot.found_summary());

    let bar = hint_meter_bar(snapshot.hint_meter, 9);
    if snapshot.hint_meter.ready {
        println!("  Hint [{}] {}", bar.green(), "ready".green().bold());
    } else {
        println!("  Hint [{}]", bar.bright_black());
    }

    if let Some(cells) = &snapshot.hint_cells {
        println!("  Hinted cells: {}", format_path(cells).bright_magenta());
    }
    println!();
}

/// Print the commands simple mode understands
pub fn print_help() {
    println!("Trace a word by listing cells in order: {}", "1,0 1,1 1,2 1,3".bright_cyan());
    println!("Tap cells one at a time with {}; tap the last cell again to submit", "tap r,c".bright_cyan());
    println!("Commands: 'hint', 'new', 'grid', 'help', 'quit'\n");
}

/// Print a puzzle validation report
pub fn print_check_report(puzzle: &Puzzle, report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📐 Grid:        {}×{}", report.rows, report.cols);
    println!("📝 Theme words: {}", report.theme_words);
    println!("⭐ Spangram:    {}", report.spangram.bright_yellow().bold());
    println!();

    for solution in puzzle.solutions() {
        let word = match solution.kind {
            SolutionKind::Theme => solution.word.cyan(),
            SolutionKind::Spangram => solution.word.bright_yellow().bold(),
        };
        println!("   {word:<12} {}", format_path(&solution.path).bright_black());
    }

    // Every solution drawn as found
    let mut snapshot_grid = String::new();
    for row in 0..report.rows {
        for col in 0..report.cols {
            let cell = Coord::new(row, col);
            let letter = puzzle.grid().letter(cell).unwrap_or(' ');
            let style = puzzle
                .solutions()
                .iter()
                .find(|s| s.path.contains(&cell))
                .map_or(CellStyle::Plain, |s| CellStyle::Found(s.kind));
            snapshot_grid.push_str(&styled_letter(letter, style).to_string());
        }
        snapshot_grid.push('\n');
    }
    println!("\n{snapshot_grid}");

    if report.uncovered.is_empty() {
        println!("{}", "✅ Every cell is covered".green());
    } else {
        println!(
            "{} {}",
            "⚠️  Uncovered cells:".yellow().bold(),
            format_path(&report.uncovered)
        );
    }
    if report.overlapping.is_empty() {
        println!("{}", "✅ No overlapping paths".green());
    } else {
        println!(
            "{} {}",
            "⚠️  Overlapping cells:".yellow().bold(),
            format_path(&report.overlapping)
        );
    }
}

/// Print the words found by a grid search
pub fn print_word_search(result: &WordSearchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GRID WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for hit in &result.words {
        let word = match hit.kind {
            Some(SolutionKind::Spangram) => hit.word.bright_yellow().bold(),
            Some(SolutionKind::Theme) => hit.word.cyan().bold(),
            None => hit.word.normal(),
        };
        println!("   {word:<14} {}", format_path(&hit.path).bright_black());
    }

    println!(
        "\n📊 {} words traceable ({} shown, {} solutions) in {:.2}s",
        result.total_found,
        result.words.len(),
        result.solutions_found(),
        result.duration.as_secs_f64()
    );
}
