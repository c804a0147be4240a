use crate::direction::Direction;
use crate::world::{Color, Coord};

/// A single ant: where it stands and where it is heading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ant {
    pub pos: Coord,
    pub dir: Direction,
}

impl Ant {
    /// Create a new ant at the given position
    pub fn new(pos: Coord, dir: Direction) -> Self {
        Self { pos, dir }
    }

    /// Position one step ahead, which may lie off the board
    #[inline]
    pub fn next_position(&self) -> Coord {
        self.pos + self.dir.offset()
    }

    /// Langton's rule: left on black, right on white
    #[inline]
    pub fn turn(&mut self, under: Color) {
        self.dir = match under {
            Color::Black => self.dir.turn_left(),
            Color::White => self.dir.turn_right(),
        };
    }

    /// Shift the ant after the board grew in front of it
    #[inline]
    pub fn rebase(&mut self, offset: Coord) {
        self.pos += offset;
    }
}
