use gridoku_core::{Digit, Grid, Position};

/// A unit of the grid a candidate placement can collide with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Conflict {
    /// The digit already appears elsewhere in the row.
    #[display("row")]
    Row,
    /// The digit already appears elsewhere in the column.
    #[display("column")]
    Column,
    /// The digit already appears elsewhere in the 3x3 region.
    #[display("region")]
    Region,
}

impl Conflict {
    /// Returns the unit name as the check API spells it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
            Self::Region => "region",
        }
    }
}

/// The set of units a candidate placement collides with.
///
/// Produced by [`check_placement`]. Iteration order is fixed: row, then
/// column, then region.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Conflicts {
    row: bool,
    column: bool,
    region: bool,
}

impl Conflicts {
    /// Returns `true` when the placement collides with no unit.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.row || self.column || self.region)
    }

    /// Returns `true` when the placement collides with the given unit.
    #[must_use]
    pub const fn contains(self, conflict: Conflict) -> bool {
        match conflict {
            Conflict::Row => self.row,
            Conflict::Column => self.column,
            Conflict::Region => self.region,
        }
    }

    /// Returns the colliding units in row, column, region order.
    pub fn iter(self) -> impl Iterator<Item = Conflict> {
        [Conflict::Row, Conflict::Column, Conflict::Region]
            .into_iter()
            .filter(move |&c| self.contains(c))
    }
}

/// Returns `true` if placing `value` at `pos` would not collide with another
/// filled cell in the same row.
///
/// The target cell itself is excluded from the comparison, so re-checking a
/// digit that is already on the board against its own cell never reports a
/// conflict. The exclusion is by position, not by current value: the cell at
/// `pos` may hold a different digit, or nothing, and the answer is the same.
#[must_use]
pub fn check_row_placement(grid: &Grid, pos: Position, value: Digit) -> bool {
    (0..9)
        .map(|col| Position::new(pos.row(), col))
        .all(|cell| cell == pos || grid.get(cell) != Some(value))
}

/// Returns `true` if placing `value` at `pos` would not collide with another
/// filled cell in the same column.
///
/// Same exclusion rule as [`check_row_placement`].
#[must_use]
pub fn check_col_placement(grid: &Grid, pos: Position, value: Digit) -> bool {
    (0..9)
        .map(|row| Position::new(row, pos.col()))
        .all(|cell| cell == pos || grid.get(cell) != Some(value))
}

/// Returns `true` if placing `value` at `pos` would not collide with another
/// filled cell in the same 3x3 region.
///
/// Same exclusion rule as [`check_row_placement`].
#[must_use]
pub fn check_region_placement(grid: &Grid, pos: Position, value: Digit) -> bool {
    let origin = pos.region_origin();
    (origin.row()..origin.row() + 3)
        .flat_map(|row| (origin.col()..origin.col() + 3).map(move |col| Position::new(row, col)))
        .all(|cell| cell == pos || grid.get(cell) != Some(value))
}

/// Returns `true` if placing `value` at `pos` collides with no unit.
#[must_use]
pub fn is_valid_placement(grid: &Grid, pos: Position, value: Digit) -> bool {
    check_row_placement(grid, pos, value)
        && check_col_placement(grid, pos, value)
        && check_region_placement(grid, pos, value)
}

/// Runs all three unit checks and reports which ones fail.
///
/// Unlike [`is_valid_placement`] this does not short-circuit, so the caller
/// learns every colliding unit, which is what the check API responds with.
#[must_use]
pub fn check_placement(grid: &Grid, pos: Position, value: Digit) -> Conflicts {
    Conflicts {
        row: !check_row_placement(grid, pos, value),
        column: !check_col_placement(grid, pos, value),
        region: !check_region_placement(grid, pos, value),
    }
}

/// Returns `true` if no filled cell conflicts with another in any unit.
///
/// Each filled cell's digit is tested as a placement at its own position.
/// The unit checks exclude the target cell by position, so the cell's own
/// value never counts against itself. An inconsistent grid must be rejected
/// before search starts rather than discovered mid-search.
#[must_use]
pub fn is_consistent(grid: &Grid) -> bool {
    grid.filled()
        .all(|(pos, digit)| is_valid_placement(grid, pos, digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

    fn puzzle() -> Grid {
        PUZZLE.parse().unwrap()
    }

    // Row A of the puzzle is "1.5..2.84"; column 2 (index 1) is empty.
    const A2: Position = Position::new(0, 1);

    #[test]
    fn test_row_placement() {
        let grid = puzzle();
        // No 3 in row A.
        assert!(check_row_placement(&grid, A2, Digit::D3));
        // 1 already sits at A1.
        assert!(!check_row_placement(&grid, A2, Digit::D1));
    }

    #[test]
    fn test_col_placement() {
        let grid = puzzle();
        assert!(check_col_placement(&grid, A2, Digit::D3));
        // 9 already sits at D2 in column 2.
        assert!(!check_col_placement(&grid, A2, Digit::D9));
    }

    #[test]
    fn test_region_placement() {
        let grid = puzzle();
        assert!(check_region_placement(&grid, A2, Digit::D3));
        // 5 already sits at A3 in the top-left region.
        assert!(!check_region_placement(&grid, A2, Digit::D5));
    }

    #[test]
    fn test_self_exclusion() {
        let grid = puzzle();
        let a1 = Position::new(0, 0);
        // A1 already holds 1; checking 1 against its own cell is not a
        // conflict in any unit.
        assert!(check_row_placement(&grid, a1, Digit::D1));
        assert!(check_col_placement(&grid, a1, Digit::D1));
        assert!(check_region_placement(&grid, a1, Digit::D1));
        assert!(is_valid_placement(&grid, a1, Digit::D1));
    }

    #[test]
    fn test_conflict_in_another_column_of_same_row() {
        let grid = puzzle();
        // 1 at A1 conflicts with placing 1 anywhere else in row A.
        for col in 1..9 {
            let pos = Position::new(0, col);
            if grid.get(pos).is_none() {
                assert!(!check_row_placement(&grid, pos, Digit::D1));
            }
        }
    }

    #[test]
    fn test_check_placement_single_conflict() {
        // 8 at A2 collides with A8 and nothing else.
        let conflicts = check_placement(&puzzle(), A2, Digit::D8);
        assert!(conflicts.contains(Conflict::Row));
        assert_eq!(conflicts.iter().collect::<Vec<_>>(), vec![Conflict::Row]);
    }

    #[test]
    fn test_check_placement_multiple_conflicts() {
        // 5 at A2 collides with A3, which is in both row A and the top-left
        // region.
        let conflicts = check_placement(&puzzle(), A2, Digit::D5);
        assert_eq!(
            conflicts.iter().collect::<Vec<_>>(),
            vec![Conflict::Row, Conflict::Region]
        );
    }

    #[test]
    fn test_check_placement_all_conflicts() {
        // 2 at B1 collides in row B (B7), column 1 (I1), and the top-left
        // region (C2).
        let conflicts = check_placement(&puzzle(), Position::new(1, 0), Digit::D2);
        assert!(conflicts.contains(Conflict::Row));
        assert!(conflicts.contains(Conflict::Column));
        assert!(conflicts.contains(Conflict::Region));
        assert_eq!(
            conflicts.iter().collect::<Vec<_>>(),
            vec![Conflict::Row, Conflict::Column, Conflict::Region]
        );
    }

    #[test]
    fn test_check_placement_no_conflict() {
        let conflicts = check_placement(&puzzle(), A2, Digit::D3);
        assert!(conflicts.is_empty());
        assert_eq!(conflicts.iter().count(), 0);
    }

    #[test]
    fn test_conflict_names() {
        assert_eq!(Conflict::Row.as_str(), "row");
        assert_eq!(Conflict::Column.as_str(), "column");
        assert_eq!(Conflict::Region.as_str(), "region");
        assert_eq!(Conflict::Region.to_string(), "region");
    }

    #[test]
    fn test_consistent_grid() {
        assert!(is_consistent(&puzzle()));
        assert!(is_consistent(&Grid::empty()));
    }

    #[test]
    fn test_inconsistent_row() {
        // Duplicate 1 in row A.
        let text = format!("11{}", &PUZZLE[2..]);
        let grid: Grid = text.parse().unwrap();
        assert!(!is_consistent(&grid));
    }

    #[test]
    fn test_inconsistent_column() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), Digit::D4);
        grid.set(Position::new(7, 0), Digit::D4);
        assert!(!is_consistent(&grid));
    }

    #[test]
    fn test_inconsistent_region() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), Digit::D4);
        grid.set(Position::new(2, 2), Digit::D4);
        assert!(!is_consistent(&grid));
    }
}
