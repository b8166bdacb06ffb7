use rustc_hash::FxHashMap;

use crate::frontier::Frontier;
use crate::grid::{Grid, Position};

/// Working maps produced by one A* run. All state is local to the run;
/// searching the same grid twice yields independent results.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Backpointers: the position each cell was most cheaply reached from,
    /// `None` for the start. A cell absent from this map was never reached.
    pub came_from: FxHashMap<Position, Option<Position>>,
    /// Minimal known cost from the start to each reached cell.
    pub cost_so_far: FxHashMap<Position, u32>,
}

/// Manhattan distance between two positions.
pub fn manhattan(a: Position, b: Position) -> u32 {
    (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as u32
}

/// A* search from the grid's start to its goal.
///
/// Costs are charged for entering a cell; the start cell's own cost is
/// never charged. Cost updates are handled by re-inserting into the
/// frontier rather than decrease-key: a superseded entry stays in the
/// queue, and when it is popped its relaxations all fail the
/// strict-improvement test, so it is a harmless no-op.
///
/// If the goal is unreachable the frontier drains and the goal is simply
/// absent from `came_from`; reconstruction reports that case explicitly.
pub fn search(grid: &Grid) -> SearchResult {
    let goal = grid.goal;
    let mut frontier = Frontier::new();
    let mut came_from: FxHashMap<Position, Option<Position>> = FxHashMap::default();
    let mut cost_so_far: FxHashMap<Position, u32> = FxHashMap::default();

    frontier.put(grid.start, 0);
    came_from.insert(grid.start, None);
    cost_so_far.insert(grid.start, 0);

    while let Some(current) = frontier.get() {
        if current == goal {
            break;
        }

        let current_cost = cost_so_far[&current];
        for next in grid.neighbors(current) {
            let Some(step) = grid.cost(next) else {
                continue;
            };
            let new_cost = current_cost + step;
            if cost_so_far.get(&next).map_or(true, |&c| new_cost < c) {
                cost_so_far.insert(next, new_cost);
                came_from.insert(next, Some(current));
                frontier.put(next, new_cost + manhattan(next, goal));
            }
        }
    }

    log::debug!(
        "a* reached {} of {} cells",
        came_from.len(),
        grid.width * grid.height
    );

    SearchResult {
        came_from,
        cost_so_far,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{path_cost, reconstruct};

    fn run(board: &str) -> (Grid, SearchResult) {
        let grid = Grid::parse(board).unwrap();
        let result = search(&grid);
        (grid, result)
    }

    #[test]
    fn straight_line_on_empty_cells() {
        let (grid, result) = run("A.B\n");
        let path = reconstruct(&result.came_from, grid.start, grid.goal).unwrap();
        assert_eq!(
            path,
            vec![
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(0, 0),
            ]
        );
        assert_eq!(result.cost_so_far[&grid.goal], 2);
    }

    #[test]
    fn water_is_expensive_but_not_impassable() {
        // The only route crosses water: cost is 100 to enter it plus 1 to
        // enter the goal, confirming cost accounting over step counting.
        let (grid, result) = run("AwB\n");
        let path = reconstruct(&result.came_from, grid.start, grid.goal).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(result.cost_so_far[&grid.goal], 101);
    }

    #[test]
    fn wall_blocks_the_only_route() {
        let (grid, result) = run("A#B\n");
        assert!(!result.came_from.contains_key(&grid.goal));
        assert!(reconstruct(&result.came_from, grid.start, grid.goal).is_err());
    }

    #[test]
    fn detour_beats_expensive_terrain() {
        // Straight through water costs 101; dipping through grass costs 8.
        let (grid, result) = run("AwB\n.g.\n");
        let path = reconstruct(&result.came_from, grid.start, grid.goal).unwrap();
        assert_eq!(result.cost_so_far[&grid.goal], 8);
        assert!(!path.contains(&Position::new(1, 0)));
        assert!(path.contains(&Position::new(1, 1)));
    }

    #[test]
    fn reconstructed_cost_matches_cost_so_far() {
        let (grid, result) = run("A.gg.\n.w#m.\n..fwB\n");
        let path = reconstruct(&result.came_from, grid.start, grid.goal).unwrap();
        assert_eq!(path_cost(&grid, &path), result.cost_so_far[&grid.goal]);
    }

    #[test]
    fn search_is_idempotent_on_an_immutable_grid() {
        let grid = Grid::parse("A.g.\n#wm.\n...B\n").unwrap();
        let first = search(&grid);
        let second = search(&grid);

        let cost_a = path_cost(
            &grid,
            &reconstruct(&first.came_from, grid.start, grid.goal).unwrap(),
        );
        let cost_b = path_cost(
            &grid,
            &reconstruct(&second.came_from, grid.start, grid.goal).unwrap(),
        );
        assert_eq!(cost_a, cost_b);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Position::new(0, 0), Position::new(3, 4)), 7);
        assert_eq!(manhattan(Position::new(5, 2), Position::new(1, 2)), 4);
        assert_eq!(manhattan(Position::new(2, 2), Position::new(2, 2)), 0);
    }
}
