use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::world::grid::{Color, Coord};
use crate::world::world::World;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

/// Parse a world from a file path
pub fn parse_world(path: impl AsRef<Path>) -> Result<World> {
    let src = fs::read_to_string(path)?;
    parse_world_from_str(&src)
}

/// Parse a world description:
///
/// ```text
/// rows cols ants
/// row col direction     (one line per ant)
/// WWBW...               (one token of `cols` cells per row, 'B' = black)
/// ```
pub fn parse_world_from_str(src: &str) -> Result<World> {
    let mut tokens = Tokens(src.split_whitespace());

    let rows: usize = tokens.number("board rows")?;
    let cols: usize = tokens.number("board cols")?;
    let ant_count: usize = tokens.number("ant count")?;

    let mut world = World::new(rows, cols)?;

    for _ in 0..ant_count {
        let row: i32 = tokens.number("ant row")?;
        let col: i32 = tokens.number("ant col")?;
        let dir: Direction = tokens.next("ant direction")?.parse()?;
        world.add_ant(Coord::new(row, col), dir)?;
    }

    // Rows of a zero-width board are written as empty lines, which leave no token
    for r in (0..rows).filter(|_| cols > 0) {
        let line = tokens.next("board row")?;
        if line.chars().count() != cols {
            return Err(Error::InvalidLine(format!(
                "board row {} has {} cells, expected {}",
                r,
                line.chars().count(),
                cols
            )));
        }
        for (c, ch) in line.chars().enumerate() {
            if ch == 'B' {
                world.set_cell(Coord::new(r as i32, c as i32), Color::Black)?;
            }
        }
    }

    Ok(world)
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn next(&mut self, what: &'static str) -> Result<&'a str> {
        self.0.next().ok_or(Error::UnexpectedEof(what))
    }

    fn number<T: FromStr>(&mut self, what: &'static str) -> Result<T> {
        let token = self.next(what)?;
        token
            .parse()
            .map_err(|_| Error::InvalidLine(format!("{}: expected a number, got {:?}", what, token)))
    }
}

/// Snapshot in the same format `parse_world_from_str` reads
impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} {}", self.rows(), self.cols(), self.ant_count())?;
        for ant in self.ants() {
            writeln!(f, "{} {} {}", ant.pos.row, ant.pos.col, ant.dir.index())?;
        }

        let mut line = String::with_capacity(self.cols());
        for r in 0..self.rows() {
            line.clear();
            line.extend(self.grid().row(r).into_iter().flatten().map(|c| c.as_char()));
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::Ant;

    #[test]
    fn test_parse_basic_world() {
        let src = "3 4 2\n0 0 0\n2 3 1\nWBWW\nWWWW\nBWWB\n";
        let world = parse_world_from_str(src).unwrap();

        assert_eq!((world.rows(), world.cols()), (3, 4));
        assert_eq!(
            world.ants(),
            &[
                Ant::new(Coord::new(0, 0), Direction::Up),
                Ant::new(Coord::new(2, 3), Direction::Right),
            ]
        );
        assert_eq!(world.cell(Coord::new(0, 1)), Some(Color::Black));
        assert_eq!(world.cell(Coord::new(2, 0)), Some(Color::Black));
        assert_eq!(world.cell(Coord::new(2, 3)), Some(Color::Black));
        assert_eq!(world.grid().count(Color::Black), 3);
    }

    #[test]
    fn test_non_b_characters_are_white() {
        let world = parse_world_from_str("1 3 0\n.x#\n").unwrap();

        assert_eq!(world.grid().count(Color::White), 3);
    }

    #[test]
    fn test_layout_is_whitespace_insensitive() {
        let a = parse_world_from_str("2 2 1 1 1 3 BW WB").unwrap();
        let b = parse_world_from_str("2 2 1\n1 1 3\nBW\nWB\n").unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_world_from_str("3 3"),
            Err(Error::UnexpectedEof("ant count"))
        ));
        assert!(matches!(
            parse_world_from_str("3 x 0"),
            Err(Error::InvalidLine(_))
        ));
        assert!(matches!(
            parse_world_from_str("1 1 1\n0 0 7\nW\n"),
            Err(Error::InvalidDirection(_))
        ));
        assert!(matches!(
            parse_world_from_str("1 2 0\nWWW\n"),
            Err(Error::InvalidLine(_))
        ));
        assert!(matches!(
            parse_world_from_str("2 2 1\n5 0 0\nWW\nWW\n"),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(matches!(
            parse_world_from_str("2 2 0\nWW\n"),
            Err(Error::UnexpectedEof("board row"))
        ));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut world = World::new(2, 3).unwrap();
        world.add_ant(Coord::new(1, 2), Direction::Left).unwrap();
        world.add_ant(Coord::new(0, 0), Direction::Down).unwrap();
        world.set_cell(Coord::new(0, 1), Color::Black).unwrap();
        for _ in 0..25 {
            world.step().unwrap();
        }

        let snapshot = world.to_string();
        let rebuilt = parse_world_from_str(&snapshot).unwrap();

        assert_eq!(rebuilt, world);
        assert_eq!(rebuilt.to_string(), snapshot);
    }

    #[test]
    fn test_zero_sized_boards_round_trip() {
        for (rows, cols) in [(2, 0), (0, 3), (0, 0)] {
            let world = World::new(rows, cols).unwrap();

            let snapshot = world.to_string();
            let rebuilt = parse_world_from_str(&snapshot).unwrap();

            assert_eq!(rebuilt, world, "{rows}x{cols}");
            assert_eq!((rebuilt.rows(), rebuilt.cols()), (rows, cols));
        }
        assert_eq!(World::new(2, 0).unwrap().to_string(), "2 0 0\n\n\n");
    }

    #[test]
    fn test_snapshot_format() {
        let mut world = World::new(2, 2).unwrap();
        world.add_ant(Coord::new(0, 1), Direction::Down).unwrap();
        world.set_cell(Coord::new(1, 0), Color::Black).unwrap();

        assert_eq!(world.to_string(), "2 2 1\n0 1 2\nWW\nBW\n");
    }
}
