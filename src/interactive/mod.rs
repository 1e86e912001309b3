//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, run_tui};
pub use rendering::{CELL_HEIGHT, CELL_WIDTH, board_rect, cell_at};
