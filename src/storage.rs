use crate::{errors::MatrixError, shape::Shape};

/// Flat offset of `(row, col)` in a row-major buffer of the given shape.
pub(crate) fn storage_idx(row: usize, col: usize, shape: Shape) -> Result<usize, MatrixError> {
    if !shape.contains(row, col) {
        return Err(MatrixError::IndexOutOfRange {
            index: (row, col),
            shape,
        });
    }

    Ok(calc_storage_idx(row, col, shape))
}

#[inline]
pub(crate) fn calc_storage_idx(row: usize, col: usize, shape: Shape) -> usize {
    let [row_stride, col_stride] = shape.stride();
    row * row_stride + col * col_stride
}

/// Inverse of [`calc_storage_idx`].
#[inline]
pub(crate) fn nth_idx(n: usize, shape: Shape) -> (usize, usize) {
    (n / shape.cols, n % shape.cols)
}
