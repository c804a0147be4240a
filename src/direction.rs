use crate::error::Error;
use crate::world::Coord;
use std::str::FromStr;

/// Heading of an ant, in clockwise order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl FromStr for Direction {
    type Err = Error;

    /// Accepts the numeric encoding used by world files as well as names
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            b"0" | b"up" => Ok(Direction::Up),
            b"1" | b"right" => Ok(Direction::Right),
            b"2" | b"down" => Ok(Direction::Down),
            b"3" | b"left" => Ok(Direction::Left),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

impl Direction {
    /// All possible directions, in clockwise order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Get direction index (0..4) in clockwise order
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Direction {
        Self::ALL[index % 4]
    }

    /// Quarter turn clockwise
    #[inline]
    pub const fn turn_right(self) -> Direction {
        Self::from_index(self.index() + 1)
    }

    /// Quarter turn counter-clockwise
    #[inline]
    pub const fn turn_left(self) -> Direction {
        Self::from_index(self.index() + 3)
    }

    /// Unit displacement for one step in this direction
    #[inline]
    pub const fn offset(self) -> Coord {
        match self {
            Direction::Up => Coord::new(-1, 0),
            Direction::Right => Coord::new(0, 1),
            Direction::Down => Coord::new(1, 0),
            Direction::Left => Coord::new(0, -1),
        }
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}
