//! Two-dimensional views over flat slices.

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for [T] {}
}

use self::sealed::Sealed;

/// The eight directions surrounding a cell as `(row, column)` offsets.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub trait GridExt<T>: Sealed {
    /// Convert slice into grid with a stride of `0`.
    ///
    /// See [GridExt::as_grid_with_stride].
    #[inline]
    fn as_grid(&self, columns: usize) -> Grid<'_, T> {
        self.as_grid_with_stride(columns, 0)
    }

    /// Convert slice into a grid with the given topology.
    ///
    /// The `columns` is the width of a row while `stride` is the number of
    /// elements between each row, like the newline separating rows of puzzle
    /// input.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let grid = b"ab\ncd\n".as_grid_with_stride(2, 1);
    /// assert_eq!(grid.rows_len(), 2);
    /// assert_eq!(grid.columns_len(), 2);
    /// assert_eq!(*grid.get(1, 0), b'c');
    /// ```
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> Grid<'_, T>;

    /// Convert slice into a mutable grid with a stride of `0`.
    #[inline]
    fn as_grid_mut(&mut self, columns: usize) -> GridMut<'_, T> {
        self.as_grid_mut_with_stride(columns, 0)
    }

    /// Convert slice into a mutable grid with the given topology.
    ///
    /// See [GridExt::as_grid_with_stride].
    fn as_grid_mut_with_stride(&mut self, columns: usize, stride: usize) -> GridMut<'_, T>;
}

impl<T> GridExt<T> for [T] {
    #[inline]
    fn as_grid_with_stride(&self, columns: usize, stride: usize) -> Grid<'_, T> {
        Grid {
            data: self,
            columns,
            stride,
        }
    }

    #[inline]
    fn as_grid_mut_with_stride(&mut self, columns: usize, stride: usize) -> GridMut<'_, T> {
        GridMut {
            data: self,
            columns,
            stride,
        }
    }
}

/// An immutable grid.
#[derive(Debug)]
pub struct Grid<'a, T> {
    data: &'a [T],
    columns: usize,
    stride: usize,
}

impl<T> Clone for Grid<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Grid<'_, T> {}

impl<'a, T> Grid<'a, T> {
    /// Get number of rows in the grid.
    ///
    /// A trailing row separator is optional.
    #[inline]
    pub fn rows_len(&self) -> usize {
        rows_len(self.data.len(), self.columns, self.stride)
    }

    /// Get number of columns in the grid.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Access the specified row in the grid.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        let start = row.checked_mul(self.columns + self.stride)?;
        self.data.get(start..start.checked_add(self.columns)?)
    }

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [1, 2, 3, 4, 5, 6];
    /// let grid = values.as_grid(3);
    /// assert!(grid.rows().flatten().copied().eq([1, 2, 3, 4, 5, 6]));
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = &'a [T]> + 'a {
        let grid = *self;
        (0..grid.rows_len()).filter_map(move |row| grid.row(row))
    }

    /// Get the element at the given row and column.
    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, column: usize) -> &'a T {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    #[inline]
    pub fn try_get(&self, row: usize, column: usize) -> Option<&'a T> {
        if column >= self.columns {
            return None;
        }

        self.row(row)?.get(column)
    }

    /// Iterate over every `(row, column)` position in the grid.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let columns = self.columns;
        (0..self.rows_len()).flat_map(move |row| (0..columns).map(move |column| (row, column)))
    }

    /// Iterate over the in-bounds positions surrounding the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let values = [0u8; 9];
    /// let grid = values.as_grid(3);
    /// assert_eq!(grid.neighbours(0, 0).count(), 3);
    /// assert_eq!(grid.neighbours(1, 1).count(), 8);
    /// assert_eq!(grid.neighbours(2, 1).count(), 5);
    /// ```
    pub fn neighbours(&self, row: usize, column: usize) -> impl Iterator<Item = (usize, usize)> {
        let rows = self.rows_len();
        let columns = self.columns;

        NEIGHBOURS.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = column.checked_add_signed(dc)?;
            (r < rows && c < columns).then_some((r, c))
        })
    }
}

/// A mutable grid.
#[derive(Debug)]
pub struct GridMut<'a, T> {
    data: &'a mut [T],
    columns: usize,
    stride: usize,
}

impl<T> GridMut<'_, T> {
    /// Borrow as an immutable grid.
    #[inline]
    pub fn as_grid(&self) -> Grid<'_, T> {
        self.data.as_grid_with_stride(self.columns, self.stride)
    }

    /// Get a mutable reference to the element at the given row and column.
    #[inline]
    pub fn try_get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if column >= self.columns || row >= self.as_grid().rows_len() {
            return None;
        }

        let index = row * (self.columns + self.stride) + column;
        self.data.get_mut(index)
    }

    /// Set the element at the given row and column, returning `false` if it's
    /// out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut values = *b"..\n..\n";
    /// let mut grid = values.as_grid_mut_with_stride(2, 1);
    /// assert!(grid.set(1, 1, b'@'));
    /// assert!(!grid.set(2, 0, b'@'));
    /// assert_eq!(&values, b"..\n.@\n");
    /// ```
    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: T) -> bool {
        let Some(slot) = self.try_get_mut(row, column) else {
            return false;
        };

        *slot = value;
        true
    }
}

#[inline]
fn rows_len(len: usize, columns: usize, stride: usize) -> usize {
    if columns == 0 {
        return 0;
    }

    (len + stride) / (columns + stride)
}
