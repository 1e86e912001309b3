//! Core domain types for the letter grid
//!
//! Coordinates, the adjacency model, the grid itself and the in-progress
//! selection path. Everything here is pure and free of I/O.

mod coord;
mod grid;
mod path;

pub use coord::{Coord, CoordError, is_adjacent};
pub use grid::{Edges, Grid, GridError};
pub use path::{PathTracker, TapOutcome};
