//! TUI rendering with ratatui
//!
//! The board is laid out on a fixed cell pitch so mouse positions can be
//! mapped back to grid cells with [`cell_at`].

use super::app::App;
use crate::core::Coord;
use crate::game::{MessageKind, SnapshotStore};
use crate::output::formatters::{CellStyle, cell_style, status_text};
use crate::puzzle::SolutionKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Terminal columns per grid cell, including the gap
pub const CELL_WIDTH: u16 = 4;
/// Terminal rows per grid cell, including the spacer line
pub const CELL_HEIGHT: u16 = 2;

struct Regions {
    header: Rect,
    board: Rect,
    info: Rect,
    word: Rect,
    status: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and info
            Constraint::Length(3), // Word line
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    Regions {
        header: chunks[0],
        board: main_chunks[0],
        info: main_chunks[1],
        word: chunks[2],
        status: chunks[3],
    }
}

fn board_block() -> Block<'static> {
    Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Screen rectangle occupied by the letter grid for a frame of size `area`
#[must_use]
pub fn board_rect(area: Rect, rows: usize, cols: usize) -> Rect {
    let inner = board_block().inner(regions(area).board);
    let width = (cols as u16).saturating_mul(CELL_WIDTH);
    let height = (rows as u16).saturating_mul(CELL_HEIGHT);
    Rect::new(
        inner.x + inner.width.saturating_sub(width) / 2,
        inner.y + inner.height.saturating_sub(height) / 2,
        width.min(inner.width),
        height.min(inner.height),
    )
}

/// Map a terminal position to the grid cell drawn there
#[must_use]
pub fn cell_at(board: Rect, rows: usize, cols: usize, column: u16, row: u16) -> Option<Coord> {
    if column < board.x
        || row < board.y
        || column >= board.x + board.width
        || row >= board.y + board.height
    {
        return None;
    }
    let cell = Coord::new(
        usize::from((row - board.y) / CELL_HEIGHT),
        usize::from((column - board.x) / CELL_WIDTH),
    );
    (cell.row < rows && cell.col < cols).then_some(cell)
}

/// Main UI rendering function
pub fn ui<S: SnapshotStore>(f: &mut Frame, app: &App<S>) {
    let regions = regions(f.area());

    render_header(f, regions.header);
    render_board(f, app, regions.board);
    render_info_panel(f, app, regions.info);
    render_word(f, app, regions.word);
    render_status(f, app, regions.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧵 STRANDS")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(style: CellStyle) -> Style {
    match style {
        CellStyle::Plain => Style::default().fg(Color::White),
        CellStyle::Path => Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD),
        CellStyle::Found(SolutionKind::Theme) => Style::default().fg(Color::Black).bg(Color::LightBlue),
        CellStyle::Found(SolutionKind::Spangram) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellStyle::Hint => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    }
}

fn render_board<S: SnapshotStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    f.render_widget(board_block(), area);

    let grid = app.session.puzzle().grid();
    let board = board_rect(f.area(), grid.rows(), grid.cols());

    let mut lines = Vec::with_capacity(grid.rows() * 2);
    for row in 0..grid.rows() {
        let spans: Vec<Span> = (0..grid.cols())
            .flat_map(|col| {
                let cell = Coord::new(row, col);
                let letter = grid.letter(cell).unwrap_or(' ');
                [
                    Span::styled(
                        format!(" {letter} "),
                        tile_style(cell_style(cell, &app.view)),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    f.render_widget(Paragraph::new(lines), board);
}

fn render_info_panel<S: SnapshotStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Hint meter
            Constraint::Min(3),    // Found words
        ])
        .split(area);

    render_hint_meter(f, app, chunks[0]);
    render_found(f, app, chunks[1]);
}

fn render_hint_meter<S: SnapshotStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let meter = app.view.hint_meter;
    let (label, style) = if meter.ready {
        (
            "Hint ready: press h".to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::REVERSED | Modifier::BOLD),
        )
    } else {
        (
            format!("{:.0}%", meter.fill * 100.0),
            Style::default().fg(Color::Cyan),
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(style)
        .ratio(meter.fill.clamp(0.0, 1.0))
        .label(label);

    f.render_widget(gauge, area);
}

fn render_found<S: SnapshotStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let items: Vec<ListItem> = app
        .view
        .found
        .iter()
        .map(|connection| {
            let style = match connection.kind {
                SolutionKind::Theme => Style::default().fg(Color::LightBlue),
                SolutionKind::Spangram => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            };
            ListItem::new(connection.word.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", app.view.found_summary()))
            .borders(Borders::ALL),
    );

    f.render_widget(list, area);
}

fn render_word<S: SnapshotStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let text = app
        .notice
        .as_deref()
        .filter(|_| app.view.status.is_none() && app.view.current_word.is_empty())
        .unwrap_or_else(|| status_text(&app.view));

    let kind = app
        .view
        .status
        .as_ref()
        .filter(|_| app.view.current_word.is_empty())
        .map(|s| s.kind);
    let style = match kind {
        Some(MessageKind::Rejected) => Style::default().fg(Color::Red),
        Some(MessageKind::Theme) => Style::default().fg(Color::LightBlue),
        Some(MessageKind::Spangram) => Style::default().fg(Color::Yellow),
        None => Style::default().fg(Color::White),
    };

    let title = if app.view.is_complete() {
        " 🎉 All theme words found! | n: New Game "
    } else {
        " Word "
    };

    let word = Paragraph::new(text)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );

    f.render_widget(word, area);
}

fn render_status<S: SnapshotStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let dictionary = if app.dictionary_ready() {
        Span::styled("Dictionary: ready", Style::default().fg(Color::Green))
    } else {
        Span::styled("Dictionary: loading", Style::default().fg(Color::Yellow))
    };
    f.render_widget(
        Paragraph::new(Line::from(dictionary)).alignment(Alignment::Center),
        chunks[0],
    );

    let help = Paragraph::new("Drag or tap letters | h: Hint | n: New Game | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
