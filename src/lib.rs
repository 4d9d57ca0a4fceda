//! Dense, row-major numeric matrices.
//!
//! ```
//! use densor::Matrix;
//!
//! let mut a: Matrix<i32> = Matrix::new(1, 2)?;
//! a.fill(5);
//! let a = a * 3;
//!
//! let mut b: Matrix<i32> = Matrix::new(2, 1)?;
//! b.fill(3);
//! let b = 10 * b;
//!
//! let c = (&a * &b)?;
//! assert_eq!(c.get(0, 0)?, 900);
//! # Ok::<(), densor::MatrixError>(())
//! ```

pub mod errors;
pub mod iterator;
pub mod matrix;
pub mod numeric;
mod ops;
mod render;
pub mod shape;
mod storage;

pub use errors::MatrixError;
pub use matrix::Matrix;
pub use numeric::Numeric;
pub use shape::Shape;
