use super::direction::Coord;
use super::error::GameError;

/// Rank of the head segment. Ranks increase by one toward the tail.
pub const HEAD_RANK: u16 = 1;
/// Rank of the segment directly behind the head.
pub const NECK_RANK: u16 = 2;

/// A single cell of the bordered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Empty,
    Fruit,
    /// Walkable like fruit, but inert: nothing ever places it and it
    /// awards no score.
    Poison,
    /// Snake body segment carrying its position in the body path
    Segment(u16),
}

impl Cell {
    /// The body rank stored in this cell, if it is part of the snake
    pub fn rank(&self) -> Option<u16> {
        match self {
            Cell::Segment(rank) => Some(*rank),
            _ => None,
        }
    }
}

/// Rectangular grid with a one-cell wall ring around the playable area.
///
/// Owned by a `GameSession`; only snake movement/growth and fruit
/// spawning write to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a bordered board around a playable area of the given size
    pub fn new(playable_width: usize, playable_height: usize) -> Self {
        let width = playable_width + 2;
        let height = playable_height + 2;
        let mut cells = vec![Cell::Empty; width * height];

        for x in 0..width {
            cells[x] = Cell::Wall;
            cells[(height - 1) * width + x] = Cell::Wall;
        }
        for y in 0..height {
            cells[y * width] = Cell::Wall;
            cells[y * width + width - 1] = Cell::Wall;
        }

        Self {
            width,
            height,
            cells,
        }
    }

    /// Total width including the wall ring
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total height including the wall ring
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn playable_width(&self) -> usize {
        self.width - 2
    }

    pub fn playable_height(&self) -> usize {
        self.height - 2
    }

    /// Whether the coordinate lands inside the allocated grid, walls included
    pub fn in_bounds(&self, at: Coord) -> bool {
        at.x >= 0 && (at.x as usize) < self.width && at.y >= 0 && (at.y as usize) < self.height
    }

    /// Cell at the given coordinate, or `OutOfBounds` outside the grid
    pub fn cell(&self, at: Coord) -> Result<Cell, GameError> {
        if !self.in_bounds(at) {
            return Err(GameError::OutOfBounds { x: at.x, y: at.y });
        }
        Ok(self.cells[at.y as usize * self.width + at.x as usize])
    }

    /// Unchecked read; callers stay within the bordered frame
    pub(crate) fn at(&self, at: Coord) -> Cell {
        debug_assert!(self.in_bounds(at));
        self.cells[at.y as usize * self.width + at.x as usize]
    }

    pub(crate) fn set(&mut self, at: Coord, cell: Cell) {
        debug_assert!(self.in_bounds(at));
        self.cells[at.y as usize * self.width + at.x as usize] = cell;
    }

    /// All playable (non-wall) coordinates, row-major
    pub fn interior(&self) -> impl Iterator<Item = Coord> + '_ {
        (1..self.height - 1)
            .flat_map(move |y| (1..self.width - 1).map(move |x| Coord::new(x as i32, y as i32)))
    }
}
