//! Tests for grid storage, dimension validation and neighbour queries

#[cfg(test)]
mod tests {
    use sprite_outline::spatial::{Coordinate, Dimensions, Grid};
    use sprite_outline::{Result, SpriteError};

    // Tests zero extents are rejected at construction
    // Verified by removing the zero check from Dimensions::new
    #[test]
    fn test_new_rejects_zero_dimensions() {
        for (width, height) in [(0, 3), (3, 0), (0, 0)] {
            let result = Grid::new(width, height, false);
            assert!(
                matches!(
                    result,
                    Err(SpriteError::InvalidDimension { width: w, height: h }) if w == width && h == height
                ),
                "{width}x{height} should be rejected"
            );
        }
    }

    // Tests dimensions and default fill after construction
    // Verified by swapping the array shape to (width, height)
    #[test]
    fn test_new_fills_default_value() -> Result<()> {
        let grid = Grid::new(4, 2, 7_u8)?;
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        for coord in grid.coordinates() {
            assert_eq!(grid.get(coord).copied()?, 7);
        }
        Ok(())
    }

    // Tests get and set round through the same cell without touching others
    // Verified by indexing the array as [x, y]
    #[test]
    fn test_set_then_get() -> Result<()> {
        let mut grid = Grid::new(3, 2, false)?;
        grid.set(Coordinate::new(2, 1), true)?;

        assert!(grid.get(Coordinate::new(2, 1)).copied()?);
        assert!(!grid.get(Coordinate::new(1, 1)).copied()?);
        assert_eq!(grid.count_filled(), 1);
        Ok(())
    }

    // Tests out-of-bounds access fails without modifying the grid
    // Verified by letting set ignore missing cells silently
    #[test]
    fn test_out_of_bounds_access_fails() -> Result<()> {
        let mut grid = Grid::new(3, 2, false)?;
        let outside = Coordinate::new(3, 0);

        assert!(matches!(
            grid.get(outside),
            Err(SpriteError::InvalidCoordinate { width: 3, height: 2, .. })
        ));
        assert!(grid.set(outside, true).is_err());
        assert!(grid.set(Coordinate::new(0, 2), true).is_err());
        assert_eq!(grid.count_filled(), 0);
        Ok(())
    }

    // Tests interior cells have exactly the four orthogonal neighbours in fixed order
    // Verified by adding diagonal offsets to the neighbour list
    #[test]
    fn test_orthogonal_neighbours_interior() -> Result<()> {
        let grid = Grid::new(3, 3, false)?;
        let neighbours = grid.orthogonal_neighbours(Coordinate::new(1, 1))?;
        assert_eq!(
            neighbours,
            vec![
                Coordinate::new(1, 0),
                Coordinate::new(1, 2),
                Coordinate::new(0, 1),
                Coordinate::new(2, 1),
            ]
        );
        Ok(())
    }

    // Tests corners and edges drop out-of-bound neighbours
    // Verified by removing the bounds filter
    #[test]
    fn test_orthogonal_neighbours_edges() -> Result<()> {
        let grid = Grid::new(3, 2, false)?;

        let corner = grid.orthogonal_neighbours(Coordinate::new(0, 0))?;
        assert_eq!(corner, vec![Coordinate::new(0, 1), Coordinate::new(1, 0)]);

        let far_corner = grid.orthogonal_neighbours(Coordinate::new(2, 1))?;
        assert_eq!(
            far_corner,
            vec![Coordinate::new(2, 0), Coordinate::new(1, 1)]
        );

        let edge = grid.orthogonal_neighbours(Coordinate::new(1, 0))?;
        assert_eq!(edge.len(), 3);
        assert!(!edge.contains(&Coordinate::new(1, 0)));
        Ok(())
    }

    // Tests a single-cell grid has no neighbours
    // Verified by including the cell itself in the result
    #[test]
    fn test_orthogonal_neighbours_single_cell() -> Result<()> {
        let grid = Grid::new(1, 1, true)?;
        assert!(grid.orthogonal_neighbours(Coordinate::new(0, 0))?.is_empty());
        Ok(())
    }

    // Tests neighbour queries on out-of-bounds coordinates fail
    // Verified by skipping the bounds check in Grid::orthogonal_neighbours
    #[test]
    fn test_orthogonal_neighbours_out_of_bounds() -> Result<()> {
        let grid = Grid::new(2, 2, false)?;
        assert!(grid.orthogonal_neighbours(Coordinate::new(2, 1)).is_err());
        Ok(())
    }

    // Tests structural equality compares dimensions and values
    // Verified by comparing only the cell arrays
    #[test]
    fn test_structural_equality() -> Result<()> {
        let a = Grid::new(2, 3, false)?;
        let mut b = Grid::new(2, 3, false)?;
        assert_eq!(a, b);

        b.set(Coordinate::new(1, 2), true)?;
        assert_ne!(a, b);

        let wide = Grid::new(3, 2, false)?;
        assert_ne!(a, wide);
        Ok(())
    }

    // Tests rows round-trip through from_rows and to_rows
    // Verified by transposing the flattened data
    #[test]
    fn test_from_rows_layout() -> Result<()> {
        let rows = vec![vec![true, true, false], vec![false, true, false]];
        let grid = Grid::from_rows(&rows)?;

        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert!(grid.get(Coordinate::new(1, 0)).copied()?);
        assert!(!grid.get(Coordinate::new(0, 1)).copied()?);
        assert_eq!(grid.to_rows(), rows);
        Ok(())
    }

    // Tests ragged and empty row input is rejected
    // Verified by removing the row length check
    #[test]
    fn test_from_rows_rejects_bad_input() {
        let ragged = vec![vec![true, false], vec![true]];
        assert!(matches!(
            Grid::from_rows(&ragged),
            Err(SpriteError::InvalidParameter { .. })
        ));

        let empty: Vec<Vec<bool>> = Vec::new();
        assert!(matches!(
            Grid::from_rows(&empty),
            Err(SpriteError::InvalidDimension { .. })
        ));

        let empty_row: Vec<Vec<bool>> = vec![Vec::new()];
        assert!(Grid::from_rows(&empty_row).is_err());
    }

    // Tests coordinates are visited row-major
    // Verified by swapping the nested iteration order
    #[test]
    fn test_coordinates_row_major() -> Result<()> {
        let dims = Dimensions::new(2, 2)?;
        let order: Vec<Coordinate> = dims.coordinates().collect();
        assert_eq!(
            order,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
            ]
        );
        Ok(())
    }

    // Tests from_fn places each value at its own coordinate
    // Verified by passing (row, col) straight through as (x, y)
    #[test]
    fn test_from_fn_uses_coordinates() -> Result<()> {
        let dims = Dimensions::new(3, 2)?;
        let grid = Grid::from_fn(dims, |coord| coord.x * 10 + coord.y);
        assert_eq!(grid.get(Coordinate::new(2, 1)).copied()?, 21);
        assert_eq!(grid.get(Coordinate::new(0, 1)).copied()?, 1);
        Ok(())
    }

    // Tests width doubling keeps height
    // Verified by doubling height instead
    #[test]
    fn test_doubled_width() -> Result<()> {
        let dims = Dimensions::new(3, 5)?.with_doubled_width();
        assert_eq!((dims.width(), dims.height()), (6, 5));
        assert_eq!(dims.to_string(), "6x5");
        Ok(())
    }

    // Tests doubling saturates instead of wrapping for widths beyond half of usize
    // Verified by replacing saturating_add with wrapping_add
    #[test]
    fn test_doubled_width_saturates() -> Result<()> {
        let dims = Dimensions::new(usize::MAX / 2 + 1, 1)?.with_doubled_width();
        assert_eq!(dims.width(), usize::MAX);
        assert_eq!(dims.height(), 1);
        Ok(())
    }

    // Tests text rendering of boolean grids
    // Verified by swapping the filled and empty characters
    #[test]
    fn test_display_draws_rows() -> Result<()> {
        let grid = Grid::from_rows(&[vec![true, false], vec![false, true]])?;
        assert_eq!(grid.to_string(), "#.\n.#");
        Ok(())
    }
}
