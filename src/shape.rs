use std::fmt::{Display, Formatter};

/// The `(rows, cols)` pair of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn is_valid(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }

    /// `rows * cols`, or `None` when the product does not fit in `usize`.
    pub const fn num_elems(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Row-major strides: stepping one row skips `cols` elements, stepping one
    /// column skips one.
    pub const fn stride(&self) -> [usize; 2] {
        [self.cols, 1]
    }

    pub const fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}
