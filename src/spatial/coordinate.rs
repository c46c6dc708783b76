//! Cell addressing for fixed-size grids

use std::fmt;
use std::str::FromStr;

use crate::io::error::{SpriteError, invalid_parameter};

/// Column/row address of a single grid cell
///
/// `x` is the column index and `y` the row index, both counted from the
/// top-left corner. Ordering is row-major (`y` first, then `x`) so sorted
/// coordinates follow the same visiting order as the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Coordinate {
    /// Create a coordinate from a column and row index
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses the `x,y` form used on the command line
impl FromStr for Coordinate {
    type Err = SpriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| invalid_parameter("coordinate", &s, &"expected the form x,y"))?;

        let parse_axis = |axis: &str| {
            axis.trim().parse::<usize>().map_err(|e| {
                invalid_parameter("coordinate", &s, &format!("'{}': {e}", axis.trim()))
            })
        };

        Ok(Self::new(parse_axis(x)?, parse_axis(y)?))
    }
}
