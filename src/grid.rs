use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::GridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Terrain types a board cell can hold, with their board-file symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Empty,
    Start,
    Goal,
    Wall,
    Water,
    Mountain,
    Forest,
    Grass,
    Road,
}

impl Terrain {
    pub fn from_symbol(symbol: char) -> Option<Terrain> {
        match symbol {
            '.' => Some(Terrain::Empty),
            'A' => Some(Terrain::Start),
            'B' => Some(Terrain::Goal),
            '#' => Some(Terrain::Wall),
            'w' => Some(Terrain::Water),
            'm' => Some(Terrain::Mountain),
            'f' => Some(Terrain::Forest),
            'g' => Some(Terrain::Grass),
            'r' => Some(Terrain::Road),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Terrain::Empty => '.',
            Terrain::Start => 'A',
            Terrain::Goal => 'B',
            Terrain::Wall => '#',
            Terrain::Water => 'w',
            Terrain::Mountain => 'm',
            Terrain::Forest => 'f',
            Terrain::Grass => 'g',
            Terrain::Road => 'r',
        }
    }

    /// Cost of entering a cell of this terrain. Walls have no cost at all:
    /// they are impassable, not merely expensive.
    pub fn cost(self) -> Option<u32> {
        match self {
            Terrain::Empty | Terrain::Start | Terrain::Goal | Terrain::Road => Some(1),
            Terrain::Grass => Some(5),
            Terrain::Forest => Some(10),
            Terrain::Mountain => Some(50),
            Terrain::Water => Some(100),
            Terrain::Wall => None,
        }
    }
}

/// A rectangular board of terrain cells, stored row-major with explicit
/// width and height. Immutable after construction except for the attached
/// last-computed path.
pub struct Grid {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Terrain>,
    pub start: Position,
    pub goal: Position,
    path: Option<Vec<Position>>,
}

impl Grid {
    /// Parses a board from text: one row per line, one symbol per cell.
    ///
    /// Validates that the board is non-empty and rectangular, that every
    /// symbol is known, and that it holds exactly one start ('A') and one
    /// goal ('B') cell.
    pub fn parse(text: &str) -> Result<Grid, GridError> {
        let mut tiles = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (y, line) in text.lines().enumerate() {
            let mut row_width = 0;
            for (x, symbol) in line.chars().enumerate() {
                let terrain = Terrain::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                    symbol,
                    position: Position::new(x, y),
                })?;
                tiles.push(terrain);
                row_width += 1;
            }
            if y == 0 {
                width = row_width;
            } else if row_width != width {
                return Err(GridError::Ragged {
                    row: y,
                    found: row_width,
                    expected: width,
                });
            }
            height += 1;
        }

        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }

        let start = Self::locate_unique(&tiles, width, Terrain::Start)?;
        let goal = Self::locate_unique(&tiles, width, Terrain::Goal)?;

        Ok(Grid {
            width,
            height,
            tiles,
            start,
            goal,
            path: None,
        })
    }

    /// Reads a board file and parses it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Grid, GridError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    fn locate_unique(
        tiles: &[Terrain],
        width: usize,
        terrain: Terrain,
    ) -> Result<Position, GridError> {
        let mut found = None;
        for (i, &tile) in tiles.iter().enumerate() {
            if tile == terrain {
                if found.is_some() {
                    return Err(GridError::Duplicate(terrain.symbol()));
                }
                found = Some(Position::new(i % width, i / width));
            }
        }
        found.ok_or(GridError::Missing(terrain.symbol()))
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Terrain at a position, or `None` outside the board.
    pub fn terrain(&self, pos: Position) -> Option<Terrain> {
        if self.in_bounds(pos) {
            Some(self.tiles[pos.y * self.width + pos.x])
        } else {
            None
        }
    }

    /// True iff the cell exists and is not a wall.
    pub fn passable(&self, pos: Position) -> bool {
        matches!(self.terrain(pos), Some(t) if t != Terrain::Wall)
    }

    /// Cost of entering a cell. `None` for walls and positions outside the
    /// board; callers should only pass positions returned by `neighbors`.
    pub fn cost(&self, pos: Position) -> Option<u32> {
        self.terrain(pos).and_then(Terrain::cost)
    }

    /// The four axis-aligned neighbors (east, north, west, south, in that
    /// fixed order) that are in bounds and passable.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let (x, y) = (pos.x as isize, pos.y as isize);
        let mut neighbors = Vec::with_capacity(4);

        for (dx, dy) in [(1isize, 0isize), (0, -1), (-1, 0), (0, 1)] {
            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || ny < 0 {
                continue;
            }
            let next = Position::new(nx as usize, ny as usize);
            if self.passable(next) {
                neighbors.push(next);
            }
        }
        neighbors
    }

    /// First position holding the given terrain, scanning row-major.
    pub fn find(&self, terrain: Terrain) -> Option<Position> {
        self.tiles
            .iter()
            .position(|&t| t == terrain)
            .map(|i| Position::new(i % self.width, i / self.width))
    }

    /// Attaches the last computed path for rendering.
    pub fn set_path(&mut self, path: Vec<Position>) {
        self.path = Some(path);
    }

    pub fn path(&self) -> Option<&[Position]> {
        self.path.as_deref()
    }
}
