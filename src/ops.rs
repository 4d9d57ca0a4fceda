use crate::{
    errors::MatrixError,
    matrix::{validate_shape, Matrix},
    numeric::Numeric,
    shape::Shape,
};
use std::ops::{Add, Mul, MulAssign, Sub};

impl<T: Numeric> Matrix<T> {
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Element-wise product.
    pub fn hadamard(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_with(rhs, |a, b| a * b)
    }

    /// Multiplies every element by `k`. Same result as `k * self`.
    pub fn scale(&self, k: T) -> Self {
        self.map(|x| x * k)
    }

    /// Output shape and element count of `self * rhs`.
    fn matmul_shape(&self, rhs: &Self) -> Result<(Shape, usize), MatrixError> {
        if self.cols != rhs.rows {
            log::debug!(
                "cannot multiply {} by {}",
                self.shape(),
                rhs.shape()
            );
            return Err(MatrixError::DimensionIncompatible {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        validate_shape(self.rows, rhs.cols)
    }

    /// Matrix product `self * rhs`.
    ///
    /// Every output cell `(i, j)` starts from zero and accumulates
    /// `self(i, t) * rhs(t, j)` for `t = 0, 1, ..., k - 1`, in that order, so
    /// floating point results are reproducible.
    pub fn matmul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        let (shape, len) = self.matmul_shape(rhs)?;
        log::trace!("matmul {} x {} -> {}", self.shape(), rhs.shape(), shape);

        let mut data = Vec::with_capacity(len);
        for a_row in self.row_iter() {
            for j in 0..shape.cols {
                data.push(row_times_col(a_row, &rhs.data, j, shape.cols));
            }
        }

        Ok(Self::from_parts(shape, data))
    }

    /// [`matmul`](Self::matmul) with output rows computed in parallel. Each
    /// cell is accumulated by a single task in the same order, so the result
    /// is bit-identical to the sequential product.
    #[cfg(feature = "rayon")]
    pub fn par_matmul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        use rayon::prelude::*;

        let (shape, len) = self.matmul_shape(rhs)?;
        log::trace!("par_matmul {} x {} -> {}", self.shape(), rhs.shape(), shape);

        let mut data = vec![T::zero(); len];
        data.par_chunks_mut(shape.cols)
            .zip(self.data.par_chunks(self.cols))
            .for_each(|(out_row, a_row)| {
                for (j, out) in out_row.iter_mut().enumerate() {
                    *out = row_times_col(a_row, &rhs.data, j, shape.cols);
                }
            });

        Ok(Self::from_parts(shape, data))
    }
}

/// Dot product of one row of the left operand with column `col` of a
/// row-major right operand that has `b_cols` columns.
#[inline]
fn row_times_col<T: Numeric>(a_row: &[T], b: &[T], col: usize, b_cols: usize) -> T {
    let mut acc = T::zero();
    for (t, &a) in a_row.iter().enumerate() {
        acc = acc + a * b[t * b_cols + col];
    }

    acc
}

impl<'a, 'b, T: Numeric> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &'b Matrix<T>) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<'a, T: Numeric> Add<&'a Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &'a Matrix<T>) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<'a, 'b, T: Numeric> Sub<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &'b Matrix<T>) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl<'a, T: Numeric> Sub<&'a Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn sub(self, rhs: &'a Matrix<T>) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl<'a, 'b, T: Numeric> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &'b Matrix<T>) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<T: Numeric> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(mut self, k: T) -> Self::Output {
        self *= k;
        self
    }
}

impl<'a, T: Numeric> Mul<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, k: T) -> Self::Output {
        self.scale(k)
    }
}

impl<T: Numeric> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, k: T) {
        self.data.iter_mut().for_each(|x| *x *= k);
    }
}

// `scalar * matrix` has to name each scalar type: a blanket
// `impl<T> Mul<Matrix<T>> for T` is rejected by coherence.
macro_rules! scalar_lhs_mul_impls {
    ( $( $t:ty ),* ) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: Matrix<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl<'a> Mul<&'a Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, rhs: &'a Matrix<$t>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )*
    };
}

scalar_lhs_mul_impls!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = Matrix::try_from([[1, 2], [3, 4]]).unwrap();
        let b = Matrix::try_from([[10, 20], [30, 40]]).unwrap();

        assert_eq!((&a + &b).unwrap().as_slice(), &[11, 22, 33, 44]);
        assert_eq!((&b - &a).unwrap().as_slice(), &[9, 18, 27, 36]);
        assert_eq!((a.clone() + &b).unwrap(), a.checked_add(&b).unwrap());
        // operands untouched
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_shape_mismatch() {
        let a: Matrix<i32> = Matrix::new(2, 2).unwrap();
        let b: Matrix<i32> = Matrix::new(3, 2).unwrap();
        let err = MatrixError::ShapeMismatch {
            lhs: Shape::new(2, 2),
            rhs: Shape::new(3, 2),
        };

        assert_eq!(&a + &b, Err(err));
        assert_eq!(&a - &b, Err(err));
        assert!(a.hadamard(&b).is_err());
    }

    #[test]
    fn test_scale_both_sides() {
        let mut m: Matrix<i32> = Matrix::new(1, 2).unwrap();
        m.fill(5i32);

        let right = m.clone() * 3;
        let left = 3i32 * &m;
        assert_eq!(right.as_slice(), &[15, 15]);
        assert_eq!(left, right);
        assert_eq!(&m * 3, right);
        assert_eq!(m.scale(3), right);

        m *= 2;
        assert_eq!(m.as_slice(), &[10, 10]);
    }

    #[test]
    #[rustfmt::skip]
    fn test_matmul() {
        let a = Matrix::try_from([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]).unwrap();
        let b = Matrix::try_from([
            [7.0, 8.0],
            [9.0, 10.0],
            [11.0, 12.0],
        ]).unwrap();

        let c = (&a * &b).unwrap();
        assert_eq!(c.shape(), Shape::new(2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_matmul_incompatible() {
        let a: Matrix<f64> = Matrix::new(2, 3).unwrap();
        let b: Matrix<f64> = Matrix::new(2, 2).unwrap();

        assert_eq!(
            a.matmul(&b),
            Err(MatrixError::DimensionIncompatible {
                lhs: Shape::new(2, 3),
                rhs: Shape::new(2, 2)
            })
        );
        assert!(b.matmul(&a).is_ok());
    }

    #[test]
    fn test_matmul_one_by_one() {
        let a = Matrix::try_from([[3]]).unwrap();
        let b = Matrix::try_from([[-4]]).unwrap();
        assert_eq!(a.matmul(&b).unwrap().as_slice(), &[-12]);
    }

    #[test]
    fn test_matmul_summation_order() {
        // 1e17 + 1 - 1e17 is 0 when summed left to right, 1 otherwise
        let a = Matrix::try_from([[1e17, 1.0, -1e17]]).unwrap();
        let b = Matrix::try_from([[1.0], [1.0], [1.0]]).unwrap();

        assert_eq!(a.matmul(&b).unwrap().as_slice(), &[0.0]);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_par_matmul_matches() {
        let a = Matrix::from_fn(17, 9, |i, j| (i * 9 + j) as f64 * 0.1).unwrap();
        let b = Matrix::from_fn(9, 13, |i, j| (i as f64 - j as f64) / 3.0).unwrap();

        assert_eq!(a.par_matmul(&b).unwrap(), a.matmul(&b).unwrap());
        assert!(a.par_matmul(&a).is_err());
    }
}
