use rustc_hash::FxHashMap;

use crate::error::PathError;
use crate::grid::{Grid, Position};

/// Walks the predecessor map backward from `goal` to `start`.
///
/// Returns the path in goal-to-start order (reverse it for presentation).
/// Fails with [`PathError::Unreachable`] when the goal was never reached,
/// or when the chain does not lead back to the start (a corrupted map);
/// the walk is bounded so a corrupted map can never hang it.
pub fn reconstruct(
    came_from: &FxHashMap<Position, Option<Position>>,
    start: Position,
    goal: Position,
) -> Result<Vec<Position>, PathError> {
    if !came_from.contains_key(&goal) {
        return Err(PathError::Unreachable { start, goal });
    }

    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(current);
        match came_from.get(&current) {
            Some(&Some(prev)) => current = prev,
            _ => return Err(PathError::Unreachable { start, goal }),
        }
        // A chain longer than the map itself can only mean a cycle.
        if path.len() > came_from.len() {
            return Err(PathError::Unreachable { start, goal });
        }
    }
    path.push(start);
    Ok(path)
}

/// Total cost of a path: the cost of entering every cell after the first.
///
/// Works on either orientation of the path, since the start and goal cells
/// both cost 1 and so contribute the same amount whichever end is skipped.
pub fn path_cost(grid: &Grid, path: &[Position]) -> u32 {
    path.iter()
        .skip(1)
        .filter_map(|&pos| grid.cost(pos))
        .sum()
}
