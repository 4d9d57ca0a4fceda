use crate::shape::Shape;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A requested dimension was zero.
    InvalidShape { rows: usize, cols: usize },
    /// `rows * cols` does not fit in `usize`.
    TooLarge { rows: usize, cols: usize },
    /// An access index fell outside the matrix.
    IndexOutOfRange { index: (usize, usize), shape: Shape },
    /// Element-wise operands had different shapes.
    ShapeMismatch { lhs: Shape, rhs: Shape },
    /// The inner dimensions of a product disagreed.
    DimensionIncompatible { lhs: Shape, rhs: Shape },
    /// A buffer's length did not match the declared shape.
    LengthMismatch { shape: Shape, len: usize },
    /// A value could not be converted into the element type.
    Unrepresentable,
}

impl Display for MatrixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::InvalidShape { rows, cols } => {
                write!(
                    f,
                    "invalid shape ({}, {}): both dimensions must be positive",
                    rows, cols
                )
            }
            Self::TooLarge { rows, cols } => {
                write!(
                    f,
                    "shape ({}, {}) has more elements than fit in usize",
                    rows, cols
                )
            }
            Self::IndexOutOfRange { index, shape } => {
                write!(
                    f,
                    "index ({}, {}) out of range for matrix of shape {}",
                    index.0, index.1, shape
                )
            }
            Self::ShapeMismatch { lhs, rhs } => {
                write!(f, "shape mismatch: {} vs {}", lhs, rhs)
            }
            Self::DimensionIncompatible { lhs, rhs } => {
                write!(
                    f,
                    "cannot multiply {} by {}: inner dimensions {} and {} differ",
                    lhs, rhs, lhs.cols, rhs.rows
                )
            }
            Self::LengthMismatch { shape, len } => {
                write!(f, "buffer of length {} does not fit shape {}", len, shape)
            }
            Self::Unrepresentable => {
                write!(f, "value is not representable in the element type")
            }
        }
    }
}

impl std::error::Error for MatrixError {}
