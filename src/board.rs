use crate::{Line, Tile};
use serde::{Deserialize, Serialize};
use std::{cmp, iter};

/// A `(row, column)` pair addressing a cell of the [board](Board). Row `0` is the top edge
/// and column `0` is the left edge.
///
/// # See Also
///
/// * [Board::extend_if_at_edge]
/// * [GameState::place_tile](crate::GameState::place_tile)
pub type Position = (usize, usize);

/// Selects whether a line runs along a row (horizontally) or along a column (vertically).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Cells sharing a row.
    Row,
    /// Cells sharing a column.
    Column,
}

/// Selects which way to walk along an [axis](Axis).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
enum Direction {
    Increasing,
    Decreasing,
}

/// The offset applied to every existing [position](Position) after the board grew
/// at its top or left edge.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Shift {
    /// The number of rows inserted above row `0`.
    pub rows: usize,
    /// The number of columns inserted left of column `0`.
    pub cols: usize,
}

impl Shift {
    /// # Returns
    ///
    /// Whether no existing [position](Position) moves.
    #[inline]
    pub fn is_none(self) -> bool {
        self.rows == 0 && self.cols == 0
    }

    /// # Returns
    ///
    /// The new [position](Position) of a cell which was at `(row, col)` before the board grew.
    #[inline]
    pub fn apply(self, (row, col): Position) -> Position {
        (row + self.rows, col + self.cols)
    }
}

/// A rectangular grid of cells which either hold a [tile](Tile) or are empty.
///
/// The grid only ever grows: placing on an edge cell and then calling
/// [Board::extend_if_at_edge] keeps one empty row or column of margin around every
/// [tile](Tile), so every legal placement stays inside the grid.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: Vec<Option<Tile>>,
    /// The length of every row.
    cols: usize,
}

impl Board {
    /// Creates an empty board. Both dimensions are raised to at least `1`.
    pub fn new(rows: usize, cols: usize) -> Board {
        let (rows, cols) = (cmp::max(rows, 1), cmp::max(cols, 1));
        Board {
            cells: vec![None; rows * cols],
            cols,
        }
    }

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    /// The number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies inside the grid.
    #[inline]
    pub fn contains(&self, (row, col): Position) -> bool {
        row < self.rows() && col < self.cols
    }

    /// The number of [tiles](Tile) on the board.
    pub fn len(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Whether no [tile](Tile) has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// # Returns
    ///
    /// The [tile](Tile) at `position`, or [None] if the cell is empty or outside the grid.
    #[inline]
    pub fn tile_at(&self, position: Position) -> Option<Tile> {
        let (row, col) = position;
        if !self.contains(position) {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Writes `tile` into the cell at `position`. Does nothing if `position` is outside
    /// the grid.
    pub(crate) fn place(&mut self, (row, col): Position, tile: Tile) {
        if self.contains((row, col)) {
            self.cells[row * self.cols + col] = Some(tile);
        }
    }

    /// Walks outward from `position` along `axis` in both directions while cells are
    /// occupied and collects the run with `tile` standing in for the cell at `position`.
    ///
    /// # Returns
    ///
    /// The line which would exist through `position` if `tile` were placed there.
    pub fn line_through(&self, position: Position, axis: Axis, tile: Tile) -> Line {
        iter::once(tile)
            .chain(self.ray(position, axis, Direction::Increasing))
            .chain(self.ray(position, axis, Direction::Decreasing))
            .collect()
    }

    /// # Returns
    ///
    /// The length of the line through the occupied cell at `position` along `axis`, or `0`
    /// if the cell is empty.
    pub fn line_len(&self, position: Position, axis: Axis) -> usize {
        match self.tile_at(position) {
            Some(_) => {
                1 + self.ray(position, axis, Direction::Increasing).count()
                    + self.ray(position, axis, Direction::Decreasing).count()
            }
            None => 0,
        }
    }

    /// # Returns
    ///
    /// Whether `first` and `second` share a row or a column and every cell strictly
    /// between them holds a [tile](Tile).
    pub fn is_continuous(&self, first: Position, second: Position) -> bool {
        let ((first_row, first_col), (second_row, second_col)) = (first, second);
        if first_row == second_row {
            let (start, end) = (
                cmp::min(first_col, second_col),
                cmp::max(first_col, second_col),
            );
            (start + 1..end).all(|col| self.tile_at((first_row, col)).is_some())
        } else if first_col == second_col {
            let (start, end) = (
                cmp::min(first_row, second_row),
                cmp::max(first_row, second_row),
            );
            (start + 1..end).all(|row| self.tile_at((row, first_col)).is_some())
        } else {
            false
        }
    }

    /// Grows the grid by one row or column on every edge that `position` lies on.
    ///
    /// # Returns
    ///
    /// The [shift](Shift) that callers must apply to every [position](Position) they keep,
    /// including `position` itself, since growing at row `0` or column `0` moves
    /// every existing cell.
    pub fn extend_if_at_edge(&mut self, position: Position) -> Shift {
        let mut shift = Shift::default();
        let (mut row, mut col) = position;

        if row == 0 {
            self.insert_row(0);
            shift.rows = 1;
            row += 1;
        }
        if row + 1 == self.rows() {
            self.insert_row(self.rows());
        }
        if col == 0 {
            self.insert_col(0);
            shift.cols = 1;
            col += 1;
        }
        if col + 1 == self.cols {
            self.insert_col(self.cols);
        }

        shift
    }

    /// An [iterator](Iterator) over every cell [position](Position) in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows()).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// An [iterator](Iterator) over every occupied cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.positions()
            .zip(self.cells.iter())
            .filter_map(|(position, cell)| cell.map(|tile| (position, tile)))
    }

    /// An [iterator](Iterator) over the rows of the grid, top to bottom.
    pub fn grid(&self) -> impl Iterator<Item = &[Option<Tile>]> + '_ {
        self.cells.chunks(self.cols)
    }

    fn insert_row(&mut self, at: usize) {
        let start = at * self.cols;
        self.cells
            .splice(start..start, iter::repeat(None).take(self.cols));
    }

    fn insert_col(&mut self, at: usize) {
        let cols = self.cols + 1;
        let mut cells = Vec::with_capacity(self.rows() * cols);
        for row in self.cells.chunks(self.cols) {
            cells.extend_from_slice(&row[..at]);
            cells.push(None);
            cells.extend_from_slice(&row[at..]);
        }
        self.cells = cells;
        self.cols = cols;
    }

    /// Walks from the cell next to `position` along `axis` while cells are occupied.
    fn ray(
        &self,
        position: Position,
        axis: Axis,
        direction: Direction,
    ) -> impl Iterator<Item = Tile> + '_ {
        fn step((row, col): Position, axis: Axis, direction: Direction) -> Option<Position> {
            match (axis, direction) {
                (Axis::Row, Direction::Increasing) => Some((row, col + 1)),
                (Axis::Row, Direction::Decreasing) => Some((row, col.checked_sub(1)?)),
                (Axis::Column, Direction::Increasing) => Some((row + 1, col)),
                (Axis::Column, Direction::Decreasing) => Some((row.checked_sub(1)?, col)),
            }
        }

        iter::successors(step(position, axis, direction), move |&next| {
            step(next, axis, direction)
        })
        .map_while(move |next| self.tile_at(next))
    }
}
