//! A* pathfinding over weighted terrain boards.
//!
//! A board is a rectangular grid of terrain cells, each with a cost for
//! entering it (roads are cheap, water is expensive, walls are impassable).
//! The search finds a lowest-cost route from the unique start cell 'A' to
//! the unique goal cell 'B' using A* with a Manhattan heuristic and a
//! duplicate-insertion frontier (no decrease-key).
//!
//! The core entry points are [`search`], which produces the predecessor and
//! cost-so-far maps for one run, and [`reconstruct`], which walks the
//! predecessor map back from the goal. Board parsing, rendering, and the
//! CLI are thin wrappers around that core.

pub mod config;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod path;
pub mod render;
pub mod search;

pub use error::{GridError, PathError};
pub use frontier::Frontier;
pub use grid::{Grid, Position, Terrain};
pub use path::{path_cost, reconstruct};
pub use render::render;
pub use search::{manhattan, search, SearchResult};
