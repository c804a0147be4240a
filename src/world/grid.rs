use crate::direction::Direction;
use crate::error::{Error, Result};
use std::ops::{Add, AddAssign};

/// Cell color; white is the initial state of every cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    #[default]
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Character used by the world file format
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

/// (row, col) pair, used both as a position and as a displacement
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Coord) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

/// Row-major board that can double along either axis.
///
/// Both dimensions always fit in an `i32` so that every cell is addressable
/// by a [`Coord`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Color>,
    max_cells: usize,
}

impl Grid {
    /// Create an all-white board
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let max_cells = usize::MAX;
        let cells = Self::alloc(rows, cols, max_cells)?;
        Ok(Self {
            rows,
            cols,
            cells,
            max_cells,
        })
    }

    /// Cap the number of cells growth may reach
    #[cfg(test)]
    pub(crate) fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Reserve a white buffer for `rows x cols` cells without aborting on OOM
    fn alloc(rows: usize, cols: usize, max_cells: usize) -> Result<Vec<Color>> {
        let fits = |n: usize| i32::try_from(n).is_ok();
        let len = rows
            .checked_mul(cols)
            .filter(|&len| fits(rows) && fits(cols) && len <= max_cells)
            .ok_or(Error::Allocation { rows, cols })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { rows, cols })?;
        cells.resize(len, Color::White);
        Ok(cells)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Linear index of `pos`, if it lies on the board
    #[inline]
    fn index(&self, pos: Coord) -> Option<usize> {
        let row = usize::try_from(pos.row).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(pos.col).ok().filter(|&c| c < self.cols)?;
        Some(row * self.cols + col)
    }

    #[inline]
    pub fn contains(&self, pos: Coord) -> bool {
        self.index(pos).is_some()
    }

    pub(crate) fn out_of_bounds(&self, pos: Coord) -> Error {
        Error::OutOfBounds {
            row: pos.row,
            col: pos.col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Color at `pos`, or `None` off the board
    #[inline]
    pub fn get(&self, pos: Coord) -> Option<Color> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn set(&mut self, pos: Coord, color: Color) -> Result<()> {
        let i = self.index(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.cells[i] = color;
        Ok(())
    }

    /// Flip the cell at `pos` and return its new color
    pub fn flip(&mut self, pos: Coord) -> Result<Color> {
        let i = self.index(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.cells[i] = self.cells[i].flip();
        Ok(self.cells[i])
    }

    /// Cells of one row, or `None` past the last row
    pub fn row(&self, row: usize) -> Option<&[Color]> {
        if row >= self.rows {
            return None;
        }
        Some(&self.cells[row * self.cols..(row + 1) * self.cols])
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Double the board towards `direction` and return the offset that maps
    /// every old coordinate onto the same cell in the new board.
    ///
    /// ```text
    ///   Up        Down      Left        Right
    ///   +---+     +---+     +------+    +------+
    ///   |000|     |bbb|     |000bbb|    |bbb000|
    ///   |bbb|     |000|     +------+    +------+
    ///   +---+     +---+
    /// ```
    ///
    /// Old content is copied row by row into a fresh buffer, so nothing
    /// overlaps. On failure the board is left untouched.
    pub fn expand(&mut self, direction: Direction) -> Result<Coord> {
        let (rows, cols) = match direction {
            Direction::Up | Direction::Down => (self.rows.saturating_mul(2), self.cols),
            Direction::Left | Direction::Right => (self.rows, self.cols.saturating_mul(2)),
        };
        let mut cells = Self::alloc(rows, cols, self.max_cells)?;

        // Both old dimensions fit in i32 (checked by alloc on the way in)
        let offset = match direction {
            Direction::Up => Coord::new(self.rows as i32, 0),
            Direction::Left => Coord::new(0, self.cols as i32),
            Direction::Down | Direction::Right => Coord::new(0, 0),
        };
        let (dr, dc) = (offset.row as usize, offset.col as usize);

        for (r, old) in self.cells.chunks_exact(self.cols.max(1)).enumerate() {
            let start = (r + dr) * cols + dc;
            cells[start..start + self.cols].copy_from_slice(old);
        }

        self.rows = rows;
        self.cols = cols;
        self.cells = cells;
        Ok(offset)
    }
}
