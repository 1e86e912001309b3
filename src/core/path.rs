//! In-progress selection path
//!
//! The path is an ordered list of distinct, consecutively adjacent cells.
//! Dragging back over a visited cell shortens the path to that cell instead
//! of creating a cycle.

use super::{Coord, Grid};

/// What a tap (pointer press and release on one cell) did to the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The path was empty and now holds the tapped cell
    Started,
    /// The tapped cell was appended
    Extended,
    /// The last cell was tapped again: the path should be submitted
    Commit,
    /// The tap was not a valid extension; the path restarted at the tapped cell
    Restarted,
}

/// Tracks the cells selected by the current gesture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTracker {
    cells: Vec<Coord>,
}

impl PathTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Start a new path at `cell`
    pub fn begin(&mut self, cell: Coord) {
        self.cells.clear();
        self.cells.push(cell);
    }

    /// Extend the path towards `cell`
    ///
    /// - empty path: same as [`begin`](Self::begin)
    /// - `cell` already at index `i`: truncate to `cells[..=i]`
    /// - `cell` adjacent to the last cell: append
    /// - otherwise: ignored
    ///
    /// # Examples
    /// ```
    /// use strands::core::{Coord, PathTracker};
    ///
    /// let mut path = PathTracker::new();
    /// path.extend(Coord::new(0, 0));
    /// path.extend(Coord::new(0, 1));
    /// path.extend(Coord::new(1, 2));
    /// path.extend(Coord::new(3, 3)); // not adjacent, ignored
    /// assert_eq!(path.len(), 3);
    ///
    /// path.extend(Coord::new(0, 0)); // backtrack
    /// assert_eq!(path.cells(), &[Coord::new(0, 0)]);
    /// ```
    pub fn extend(&mut self, cell: Coord) {
        let Some(&last) = self.cells.last() else {
            self.begin(cell);
            return;
        };

        if let Some(index) = self.position(cell) {
            self.cells.truncate(index + 1);
        } else if last.is_adjacent_to(cell) {
            self.cells.push(cell);
        }
    }

    /// Apply click-to-build semantics for a tap on `cell`
    pub fn tap(&mut self, cell: Coord) -> TapOutcome {
        match self.cells.last() {
            None => {
                self.begin(cell);
                TapOutcome::Started
            }
            Some(&last) if last == cell => TapOutcome::Commit,
            Some(&last) if last.is_adjacent_to(cell) && !self.contains(cell) => {
                self.cells.push(cell);
                TapOutcome::Extended
            }
            Some(_) => {
                self.begin(cell);
                TapOutcome::Restarted
            }
        }
    }

    pub fn reset(&mut self) {
        self.cells.clear();
    }

    /// Take the cells out of the tracker, leaving it empty
    pub fn take(&mut self) -> Vec<Coord> {
        std::mem::take(&mut self.cells)
    }

    /// Upper-case word spelled by the path on `grid`
    #[must_use]
    pub fn current_word(&self, grid: &Grid) -> String {
        grid.spell(&self.cells).to_uppercase()
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, cell: Coord) -> bool {
        self.cells.contains(&cell)
    }

    fn position(&self, cell: Coord) -> Option<usize> {
        self.cells.iter().position(|&c| c == cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    fn snake() -> PathTracker {
        let mut path = PathTracker::new();
        for cell in [c(0, 0), c(0, 1), c(0, 2), c(1, 3), c(2, 3), c(2, 2)] {
            path.extend(cell);
        }
        path
    }

    /// Consecutive cells adjacent, no duplicates
    fn assert_well_formed(path: &PathTracker) {
        for pair in path.cells().windows(2) {
            assert!(pair[0].is_adjacent_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
        for (i, cell) in path.cells().iter().enumerate() {
            assert!(!path.cells()[i + 1..].contains(cell), "duplicate {cell}");
        }
    }

    #[test]
    fn extend_on_empty_begins() {
        let mut path = PathTracker::new();
        path.extend(c(4, 4));
        assert_eq!(path.cells(), &[c(4, 4)]);
    }

    #[test]
    fn extend_appends_adjacent_cells() {
        let path = snake();
        assert_eq!(path.len(), 6);
        assert_well_formed(&path);
    }

    #[test]
    fn extend_ignores_non_adjacent_cells() {
        let mut path = snake();
        path.extend(c(5, 5));
        path.extend(c(0, 4));
        assert_eq!(path.len(), 6);
        assert_eq!(path.last(), Some(c(2, 2)));
    }

    #[test]
    fn revisiting_truncates_to_that_index() {
        let original = snake();
        for (i, &cell) in original.cells().iter().enumerate() {
            let mut path = original.clone();
            path.extend(cell);
            assert_eq!(path.len(), i + 1, "revisiting index {i}");
            assert_eq!(path.cells(), &original.cells()[..=i]);
            assert_well_formed(&path);
        }
    }

    #[test]
    fn revisit_then_extend_stays_well_formed() {
        let mut path = snake();
        path.extend(c(0, 2));
        path.extend(c(1, 2));
        path.extend(c(2, 1));
        assert_eq!(path.cells(), &[c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(2, 1)]);
        assert_well_formed(&path);
    }

    #[test]
    fn begin_and_reset() {
        let mut path = snake();
        path.begin(c(3, 3));
        assert_eq!(path.cells(), &[c(3, 3)]);
        path.reset();
        assert!(path.is_empty());
    }

    #[test]
    fn current_word_reads_letters_upper_case() {
        let grid = Grid::new(&["real", "iris", "star"]).unwrap();
        let mut path = PathTracker::new();
        for cell in [c(1, 0), c(1, 1), c(1, 2), c(1, 3)] {
            path.extend(cell);
        }
        assert_eq!(path.current_word(&grid), "IRIS");
    }

    #[test]
    fn tap_builds_then_commits() {
        let mut path = PathTracker::new();
        assert_eq!(path.tap(c(0, 0)), TapOutcome::Started);
        assert_eq!(path.tap(c(1, 1)), TapOutcome::Extended);
        assert_eq!(path.tap(c(1, 2)), TapOutcome::Extended);
        assert_eq!(path.tap(c(1, 2)), TapOutcome::Commit);
        assert_eq!(path.cells(), &[c(0, 0), c(1, 1), c(1, 2)]);
    }

    #[test]
    fn tap_on_visited_or_distant_cell_restarts() {
        let mut path = PathTracker::new();
        path.tap(c(0, 0));
        path.tap(c(0, 1));
        assert_eq!(path.tap(c(0, 0)), TapOutcome::Restarted);
        assert_eq!(path.cells(), &[c(0, 0)]);

        assert_eq!(path.tap(c(3, 3)), TapOutcome::Restarted);
        assert_eq!(path.cells(), &[c(3, 3)]);
    }

    #[test]
    fn take_empties_tracker() {
        let mut path = snake();
        let cells = path.take();
        assert_eq!(cells.len(), 6);
        assert!(path.is_empty());
    }
}
