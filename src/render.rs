use crate::grid::{Grid, Position, Terrain};

/// Renders the board as ASCII, one row per line.
///
/// Start and goal keep their 'A'/'B' symbols; other cells on the attached
/// path render as 'o'; everything else renders its terrain symbol.
pub fn render(grid: &Grid) -> String {
    let path = grid.path().unwrap_or(&[]);
    let mut out = String::with_capacity((grid.width + 1) * grid.height);

    for y in 0..grid.height {
        for x in 0..grid.width {
            let pos = Position::new(x, y);
            let terrain = grid.terrain(pos).unwrap_or(Terrain::Empty);
            let symbol = match terrain {
                Terrain::Start | Terrain::Goal => terrain.symbol(),
                _ if path.contains(&pos) => 'o',
                _ => terrain.symbol(),
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_board_without_path() {
        let grid = Grid::parse("A.w\n#gB\n").unwrap();
        assert_eq!(render(&grid), "A.w\n#gB\n");
    }

    #[test]
    fn overlays_path_and_keeps_endpoints_visible() {
        let mut grid = Grid::parse("A.B\nw.g\n").unwrap();
        grid.set_path(vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
        ]);
        assert_eq!(render(&grid), "AoB\nw.g\n");
    }
}
