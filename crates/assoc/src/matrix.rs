//! Per-point, per-lag overlap counts.

/// Overlap counts with one row per series-1 point and one column per lag.
///
/// Stored row-major. Cell `(i, j)` is the number of series-2 events within
/// the window around point `i` shifted by lag `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMatrix {
    data: Vec<usize>,
    n_rows: usize,
    n_cols: usize,
}

impl CountMatrix {
    /// Assembles a matrix from per-lag columns, each of length `n_rows`.
    ///
    /// # Panics
    ///
    /// Panics if any column length differs from `n_rows`.
    pub(crate) fn from_columns(n_rows: usize, columns: &[Vec<usize>]) -> Self {
        let n_cols = columns.len();
        let mut data = vec![0; n_rows * n_cols];
        for (j, col) in columns.iter().enumerate() {
            assert_eq!(col.len(), n_rows, "column {j} has wrong length");
            for (i, &c) in col.iter().enumerate() {
                data[i * n_cols + j] = c;
            }
        }
        Self {
            data,
            n_rows,
            n_cols,
        }
    }

    /// Number of rows (series-1 points).
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns (lags).
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns cell `(row, col)`, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.n_rows && col < self.n_cols {
            Some(self.data[row * self.n_cols + col])
        } else {
            None
        }
    }

    /// Returns one row (all lags for one series-1 point).
    ///
    /// # Panics
    ///
    /// Panics if `row >= n_rows`.
    pub fn row(&self, row: usize) -> &[usize] {
        &self.data[row * self.n_cols..(row + 1) * self.n_cols]
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        // chunks() rejects a zero chunk size; a zero-column matrix has no cells.
        self.data.chunks(self.n_cols.max(1)).take(self.n_rows)
    }

    /// Returns one column (all points for one lag) as `f64`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= n_cols`.
    pub fn column(&self, col: usize) -> Vec<f64> {
        assert!(col < self.n_cols, "column {col} out of range");
        (0..self.n_rows)
            .map(|i| self.data[i * self.n_cols + col] as f64)
            .collect()
    }

    /// Sums each column over all rows.
    pub fn column_sums(&self) -> Vec<u64> {
        let mut sums = vec![0_u64; self.n_cols];
        for row in self.rows() {
            for (s, &c) in sums.iter_mut().zip(row) {
                *s += c as u64;
            }
        }
        sums
    }
}
