use super::board::{Board, Cell, HEAD_RANK, NECK_RANK};
use super::direction::{Coord, Direction};

/// What the head would run into when advancing in some direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    Empty,
    Fruit,
    Poison,
    /// A body segment other than the neck: fatal
    Body,
    /// The segment directly behind the head: the move is silently ignored
    Neck,
    Wall,
}

/// The snake, stored implicitly in the board's rank-encoded cells.
///
/// Only the endpoints and the heading are cached here; the body path is
/// recovered by walking ranks across the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    head: Coord,
    tail: Coord,
    heading: Option<Direction>,
}

impl Snake {
    /// Place the starting snake: three cells in a vertical line with the
    /// head on top, no heading until the first input.
    pub fn place(board: &mut Board, start: Coord) -> Self {
        board.set(start, Cell::Segment(HEAD_RANK));
        board.set(start.moved_by(0, 1), Cell::Segment(HEAD_RANK + 1));
        board.set(start.moved_by(0, 2), Cell::Segment(HEAD_RANK + 2));

        Self {
            head: start,
            tail: start.moved_by(0, 2),
            heading: None,
        }
    }

    pub fn head(&self) -> Coord {
        self.head
    }

    pub fn tail(&self) -> Coord {
        self.tail
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Option<Direction>) {
        self.heading = heading;
    }

    /// Body length, read off the tail cell's rank
    pub fn len(&self, board: &Board) -> usize {
        board.at(self.tail).rank().unwrap_or(0) as usize
    }

    /// Inspect the cell next to the head.
    ///
    /// Priority mirrors the cell encoding: a segment cell is checked for
    /// the neck rank before being treated as a fatal body hit.
    pub fn can_advance(&self, board: &Board, direction: Direction) -> (bool, Obstacle) {
        match board.at(self.head.moved_in(direction)) {
            Cell::Empty => (true, Obstacle::Empty),
            Cell::Segment(NECK_RANK) => (false, Obstacle::Neck),
            Cell::Segment(_) => (false, Obstacle::Body),
            Cell::Fruit => (true, Obstacle::Fruit),
            Cell::Poison => (true, Obstacle::Poison),
            Cell::Wall => (false, Obstacle::Wall),
        }
    }

    /// Move one cell in `direction`, pulling the whole body along and
    /// vacating the tail cell. Length is preserved. The caller has already
    /// validated the target with `can_advance`.
    pub fn advance(&mut self, board: &mut Board, direction: Direction) {
        self.shift(board, direction, false);
    }

    /// Like `advance`, but the tail cell is re-ranked instead of cleared,
    /// so the body gains one cell.
    pub fn grow(&mut self, board: &mut Board, direction: Direction) {
        self.shift(board, direction, true);
    }

    /// Iterative re-ranking walk from the new head toward the tail.
    ///
    /// After the new head cell is written, each step finds the neighbor
    /// still holding the current rank (the next segment toward the tail)
    /// and bumps it by one. Ranks are unique on the board, so the match
    /// is unambiguous. The walk is bounded by the body length, itself
    /// bounded by the board area.
    fn shift(&mut self, board: &mut Board, direction: Direction, keep_tail: bool) {
        let new_head = self.head.moved_in(direction);
        board.set(new_head, Cell::Segment(HEAD_RANK));

        let mut at = new_head;
        let mut rank = HEAD_RANK;
        loop {
            let next = at
                .neighbors()
                .into_iter()
                .find(|&c| board.at(c) == Cell::Segment(rank));
            let Some(next) = next else {
                debug_assert!(false, "broken rank path behind {at:?}");
                break;
            };

            if next == self.tail {
                if keep_tail {
                    board.set(next, Cell::Segment(rank + 1));
                } else {
                    board.set(next, Cell::Empty);
                    self.tail = at;
                }
                break;
            }

            board.set(next, Cell::Segment(rank + 1));
            at = next;
            rank += 1;
        }

        self.head = new_head;
    }
}
