use crate::{
    errors::MatrixError,
    iterator::Iter,
    numeric::Numeric,
    shape::Shape,
    storage::{calc_storage_idx, nth_idx, storage_idx},
};
use num::ToPrimitive;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::ops::{Index, IndexMut};

/// A dense, row-major matrix with a shape fixed at construction.
///
/// Element `(i, j)` lives at offset `i * cols + j` of a single owned buffer.
/// Both dimensions are always positive and the buffer always holds exactly
/// `rows * cols` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T: Numeric> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<T>,
}

/// Checks both dimensions are positive and returns the shape with its element
/// count, which is guaranteed to fit in `usize`.
pub(crate) fn validate_shape(rows: usize, cols: usize) -> Result<(Shape, usize), MatrixError> {
    let shape = Shape::new(rows, cols);
    if !shape.is_valid() {
        log::debug!("rejecting matrix of shape {}", shape);
        return Err(MatrixError::InvalidShape { rows, cols });
    }

    match shape.num_elems() {
        Some(len) => Ok((shape, len)),
        None => {
            log::debug!("rejecting matrix of shape {}: too many elements", shape);
            Err(MatrixError::TooLarge { rows, cols })
        }
    }
}

impl<T: Numeric> Matrix<T> {
    /// Builds a zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::repeat(rows, cols, T::zero())
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::new(rows, cols)
    }

    pub fn ones(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::repeat(rows, cols, T::one())
    }

    pub fn repeat(rows: usize, cols: usize, val: T) -> Result<Self, MatrixError> {
        let (shape, len) = validate_shape(rows, cols)?;

        Ok(Self::from_parts(shape, vec![val; len]))
    }

    /// Adopts a row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        let (shape, len) = validate_shape(rows, cols)?;
        if data.len() != len {
            log::debug!(
                "buffer of length {} does not fit shape {}",
                data.len(),
                shape
            );
            return Err(MatrixError::LengthMismatch {
                shape,
                len: data.len(),
            });
        }

        Ok(Self::from_parts(shape, data))
    }

    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, MatrixError> {
        let (shape, len) = validate_shape(rows, cols)?;
        let data = (0..len)
            .map(|n| {
                let (i, j) = nth_idx(n, shape);
                f(i, j)
            })
            .collect();

        Ok(Self::from_parts(shape, data))
    }

    /// The `n x n` matrix with ones on the diagonal.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Samples every element, in row-major order, from `d`.
    pub fn rand(
        rows: usize,
        cols: usize,
        d: impl Distribution<T>,
        rng: &mut impl Rng,
    ) -> Result<Self, MatrixError> {
        let (shape, len) = validate_shape(rows, cols)?;
        let data = d.sample_iter(rng).take(len).collect();

        Ok(Self::from_parts(shape, data))
    }

    pub fn randn(rows: usize, cols: usize, rng: &mut impl Rng) -> Result<Self, MatrixError>
    where
        StandardNormal: Distribution<T>,
    {
        Self::rand(rows, cols, StandardNormal, rng)
    }

    /// Callers guarantee `shape` is valid and `data` matches it.
    pub(crate) fn from_parts(shape: Shape, data: Vec<T>) -> Self {
        debug_assert!(shape.is_valid());
        debug_assert_eq!(Some(data.len()), shape.num_elems());

        Self {
            rows: shape.rows,
            cols: shape.cols,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Number of elements. Never zero.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let i = storage_idx(row, col, self.shape())?;
        Ok(self.data[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let i = storage_idx(row, col, self.shape())?;
        Ok(&mut self.data[i])
    }

    pub fn set(&mut self, row: usize, col: usize, val: T) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = val;
        Ok(())
    }

    pub fn row(&self, row: usize) -> Result<&[T], MatrixError> {
        let start = storage_idx(row, 0, self.shape())?;
        Ok(&self.data[start..start + self.cols])
    }

    pub fn col(&self, col: usize) -> Result<Vec<T>, MatrixError> {
        storage_idx(0, col, self.shape())?;
        Ok(self.data.iter().skip(col).step_by(self.cols).copied().collect())
    }

    /// Rows as contiguous slices, top to bottom.
    pub fn row_iter(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.cols)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Overwrites every element with a value losslessly convertible to `T`.
    pub fn fill<U: Into<T>>(&mut self, val: U) {
        let val = val.into();
        self.data.iter_mut().for_each(|x| *x = val);
    }

    /// Overwrites every element with `val` cast to `T`, which may narrow
    /// (`f64` into `f32`, `i64` into `u8`). Fails without touching the matrix
    /// when `val` has no representation in `T`.
    pub fn fill_cast<U: ToPrimitive>(&mut self, val: U) -> Result<(), MatrixError> {
        let val = <T as num::NumCast>::from(val).ok_or(MatrixError::Unrepresentable)?;
        self.fill(val);
        Ok(())
    }

    /// Returns a new `(cols, rows)` matrix with `result(j, i) == self(i, j)`.
    pub fn transpose(&self) -> Self {
        let shape = self.shape();
        let out_shape = shape.transpose();
        log::trace!("transpose {} -> {}", shape, out_shape);

        let data = (0..self.len())
            .map(|n| {
                let (j, i) = nth_idx(n, out_shape);
                self.data[calc_storage_idx(i, j, shape)]
            })
            .collect();

        Self::from_parts(out_shape, data)
    }

    pub fn map<U: Numeric>(&self, f: impl FnMut(T) -> U) -> Matrix<U> {
        Matrix::from_parts(self.shape(), self.data.iter().copied().map(f).collect())
    }

    /// Combines corresponding elements of two same-shape matrices.
    pub fn zip_with(
        &self,
        other: &Self,
        mut f: impl FnMut(T, T) -> T,
    ) -> Result<Self, MatrixError> {
        if self.shape() != other.shape() {
            log::debug!("shape mismatch: {} vs {}", self.shape(), other.shape());
            return Err(MatrixError::ShapeMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();

        Ok(Self::from_parts(self.shape(), data))
    }
}

impl<T: Numeric, const R: usize, const C: usize> TryFrom<[[T; C]; R]> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(vals: [[T; C]; R]) -> Result<Self, Self::Error> {
        Self::from_fn(R, C, |i, j| vals[i][j])
    }
}

impl<T: Numeric> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match storage_idx(row, col, self.shape()) {
            Ok(i) => &self.data[i],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Numeric> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        match storage_idx(row, col, self.shape()) {
            Ok(i) => &mut self.data[i],
            Err(e) => panic!("{}", e),
        }
    }
}
