use crate::ant::Ant;
use crate::direction::Direction;
use crate::error::Result;
use crate::world::grid::{Color, Coord, Grid};
use tracing::{debug, trace};

/// The board plus every ant walking on it.
///
/// Ants and cells may be added at any time, also between steps; a new ant
/// simply joins the next tick.
#[derive(Clone, Debug)]
pub struct World {
    grid: Grid,
    ants: Vec<Ant>,
    steps: u64,
    expansions: u32,
}

impl World {
    /// Create an all-white board with no ants
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            ants: Vec::new(),
            steps: 0,
            expansions: 0,
        })
    }

    /// Append an ant; it must stand on the current board
    pub fn add_ant(&mut self, pos: Coord, dir: Direction) -> Result<()> {
        if !self.grid.contains(pos) {
            return Err(self.grid.out_of_bounds(pos));
        }
        self.ants.push(Ant::new(pos, dir));
        Ok(())
    }

    /// Paint a cell, e.g. while setting up the initial board
    #[inline]
    pub fn set_cell(&mut self, pos: Coord, color: Color) -> Result<()> {
        self.grid.set(pos, color)
    }

    /// Place `count` ants on random cells with random headings
    pub fn scatter_ants(&mut self, count: usize, rng: &mut fastrand::Rng) -> Result<()> {
        if count > 0 && self.grid.rows() * self.grid.cols() == 0 {
            return Err(self.grid.out_of_bounds(Coord::default()));
        }
        for _ in 0..count {
            let pos = Coord::new(
                rng.i32(0..self.grid.rows() as i32),
                rng.i32(0..self.grid.cols() as i32),
            );
            let dir = Direction::from_index(rng.usize(..4));
            self.add_ant(pos, dir)?;
        }
        Ok(())
    }

    /// Direction the board must grow in for `pos` to become valid.
    ///
    /// Only one axis is checked per call; ants move one cell along a single
    /// axis, so a position can never overflow two axes at once.
    fn overflow(&self, pos: Coord) -> Option<Direction> {
        if pos.row < 0 {
            Some(Direction::Up)
        } else if pos.row >= self.grid.rows() as i32 {
            Some(Direction::Down)
        } else if pos.col < 0 {
            Some(Direction::Left)
        } else if pos.col >= self.grid.cols() as i32 {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Advance every ant by one cell, in insertion order.
    ///
    /// Later ants see the flips and board growth caused by earlier ants in
    /// the same tick. If growing the board fails, the error is returned
    /// before the failing ant touches anything; ants before it keep their
    /// moves.
    pub fn step(&mut self) -> Result<()> {
        for i in 0..self.ants.len() {
            let mut next = self.ants[i].next_position();

            if let Some(dir) = self.overflow(next) {
                let offset = self.grid.expand(dir)?;
                for ant in &mut self.ants {
                    ant.rebase(offset);
                }
                next += offset;
                self.expansions += 1;
                debug!(
                    ant = i,
                    direction = dir.as_str(),
                    rows = self.grid.rows(),
                    cols = self.grid.cols(),
                    offset_row = offset.row,
                    offset_col = offset.col,
                    "board expanded"
                );
            }

            self.grid.flip(self.ants[i].pos)?;

            let under = self
                .grid
                .get(next)
                .ok_or_else(|| self.grid.out_of_bounds(next))?;
            let ant = &mut self.ants[i];
            ant.pos = next;
            ant.turn(under);
        }

        self.steps += 1;
        trace!(step = self.steps, ants = self.ants.len(), "tick done");
        Ok(())
    }

    #[inline]
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    #[inline]
    pub fn ant_count(&self) -> usize {
        self.ants.len()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    #[inline]
    pub fn cell(&self, pos: Coord) -> Option<Color> {
        self.grid.get(pos)
    }

    /// Completed ticks
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of times the board has doubled
    pub fn expansions(&self) -> u32 {
        self.expansions
    }
}

/// Two worlds are equal when board and ants match; counters are ignored
impl PartialEq for World {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid && self.ants == other.ants
    }
}

impl Eq for World {}
