//! Fixed-size grid storage with bounds-checked access and neighbour queries
//!
//! Cells live in a row-major `Array2` indexed `[row, col]`, so a
//! [`Coordinate`] `(x, y)` maps to `[y, x]`. Dimensions are validated once
//! when a [`Dimensions`] value is built; every grid created from one is
//! non-empty by construction.

use std::fmt;
use std::num::NonZeroUsize;

use ndarray::Array2;

use crate::io::error::{Result, SpriteError, invalid_coordinate, invalid_parameter};
use crate::spatial::Coordinate;

/// Validated, non-zero grid extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: NonZeroUsize,
    height: NonZeroUsize,
}

impl Dimensions {
    /// Validate a width and height
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if either extent is zero
    pub const fn new(width: usize, height: usize) -> Result<Self> {
        match (NonZeroUsize::new(width), NonZeroUsize::new(height)) {
            (Some(width), Some(height)) => Ok(Self { width, height }),
            _ => Err(SpriteError::InvalidDimension { width, height }),
        }
    }

    /// Number of columns
    pub const fn width(self) -> usize {
        self.width.get()
    }

    /// Number of rows
    pub const fn height(self) -> usize {
        self.height.get()
    }

    /// Same height, twice the width
    ///
    /// The width saturates at `usize::MAX`; such a grid can never be
    /// allocated, so every produced grid has exactly twice the width.
    pub const fn with_doubled_width(self) -> Self {
        Self {
            width: self.width.saturating_add(self.width.get()),
            height: self.height,
        }
    }

    /// Check whether a coordinate lies in `[0, width) x [0, height)`
    pub const fn contains(self, coord: Coordinate) -> bool {
        coord.x < self.width() && coord.y < self.height()
    }

    /// Fail with `InvalidCoordinate` unless the coordinate is in bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if the coordinate lies outside these dimensions
    pub const fn check(self, coord: Coordinate) -> Result<()> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(invalid_coordinate(coord, self.width(), self.height()))
        }
    }

    /// In-bound cells directly above, below, left and right of `coord`
    ///
    /// Diagonals and `coord` itself are never included. Edge and corner cells
    /// yield fewer than four neighbours.
    pub fn orthogonal_neighbours(self, coord: Coordinate) -> Vec<Coordinate> {
        let Coordinate { x, y } = coord;
        [
            y.checked_sub(1).map(|above| Coordinate::new(x, above)),
            y.checked_add(1).map(|below| Coordinate::new(x, below)),
            x.checked_sub(1).map(|left| Coordinate::new(left, y)),
            x.checked_add(1).map(|right| Coordinate::new(right, y)),
        ]
        .into_iter()
        .flatten()
        .filter(|&neighbour| self.contains(neighbour))
        .collect()
    }

    /// Every coordinate in row-major order (`y` ascending, then `x` ascending)
    pub fn coordinates(self) -> impl Iterator<Item = Coordinate> {
        let width = self.width();
        (0..self.height()).flat_map(move |y| (0..width).map(move |x| Coordinate::new(x, y)))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

/// Fixed-size two dimensional container holding one value per cell
///
/// Equality is structural: two grids are equal when their dimensions match
/// and every coordinate holds equal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Array2<T>,
    dimensions: Dimensions,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `default`
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimension` if `width` or `height` is zero
    pub fn new(width: usize, height: usize, default: T) -> Result<Self> {
        Ok(Self::from_dimensions(Dimensions::new(width, height)?, default))
    }

    /// Create a grid of already validated dimensions
    pub fn from_dimensions(dimensions: Dimensions, default: T) -> Self {
        Self {
            cells: Array2::from_elem((dimensions.height(), dimensions.width()), default),
            dimensions,
        }
    }

    /// Build a grid from rows of values, top row first
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no rows, or the first row is empty (`InvalidDimension`)
    /// - Any row differs in length from the first (`InvalidParameter`)
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let dimensions = Dimensions::new(width, rows.len())?;

        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(invalid_parameter(
                "rows",
                &format!("row {y} has {} cells", row.len()),
                &format!("every row must have {width} cells"),
            ));
        }

        let flat: Vec<T> = rows.iter().flatten().cloned().collect();
        let cells = Array2::from_shape_vec((dimensions.height(), width), flat)
            .map_err(|e| invalid_parameter("rows", &dimensions, &e))?;

        Ok(Self { cells, dimensions })
    }

    /// Copy the grid out as rows of values, top row first
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f` once for every coordinate
    ///
    /// The call order is unspecified, so `f` should depend only on its argument.
    pub fn from_fn(dimensions: Dimensions, mut f: impl FnMut(Coordinate) -> T) -> Self {
        Self {
            cells: Array2::from_shape_fn((dimensions.height(), dimensions.width()), |(y, x)| {
                f(Coordinate::new(x, y))
            }),
            dimensions,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.dimensions.width()
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.dimensions.height()
    }

    /// Construction-time dimensions
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Check whether a coordinate lies inside this grid
    pub const fn contains(&self, coord: Coordinate) -> bool {
        self.dimensions.contains(coord)
    }

    /// Value at `coord`, or `None` when out of bounds
    pub fn cell(&self, coord: Coordinate) -> Option<&T> {
        self.cells.get([coord.y, coord.x])
    }

    /// Mutable value at `coord`, or `None` when out of bounds
    pub fn cell_mut(&mut self, coord: Coordinate) -> Option<&mut T> {
        self.cells.get_mut([coord.y, coord.x])
    }

    /// Value at `coord`
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if `coord` lies outside the grid
    pub fn get(&self, coord: Coordinate) -> Result<&T> {
        self.cell(coord)
            .ok_or_else(|| invalid_coordinate(coord, self.width(), self.height()))
    }

    /// Replace the value at `coord`
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if `coord` lies outside the grid; the grid
    /// is left unchanged
    pub fn set(&mut self, coord: Coordinate, value: T) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        let cell = self
            .cell_mut(coord)
            .ok_or_else(|| invalid_coordinate(coord, width, height))?;
        *cell = value;
        Ok(())
    }

    /// In-bound orthogonal neighbours of `coord` (above, below, left, right)
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` if `coord` itself lies outside the grid
    pub fn orthogonal_neighbours(&self, coord: Coordinate) -> Result<Vec<Coordinate>> {
        self.dimensions.check(coord)?;
        Ok(self.dimensions.orthogonal_neighbours(coord))
    }

    /// Every coordinate of the grid in row-major order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<T> {
        self.dimensions.coordinates()
    }
}

impl Grid<bool> {
    /// Number of cells set to `true`
    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }
}

/// Draws filled cells as `#` and empty cells as `.`, one line per row
impl fmt::Display for Grid<bool> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.rows().into_iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &filled in row {
                write!(f, "{}", if filled { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}
