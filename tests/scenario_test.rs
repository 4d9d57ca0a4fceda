use densor::{Matrix, MatrixError, Shape};

#[test]
fn test_fill_then_scale_right() {
    let mut m: Matrix<i32> = Matrix::new(1, 2).unwrap();
    m.fill(5);
    assert_eq!(m.as_slice(), &[5, 5]);

    let m = m * 3;
    assert_eq!(m.as_slice(), &[15, 15]);
}

#[test]
fn test_fill_scale_left_transpose() {
    let mut m: Matrix<i32> = Matrix::new(2, 1).unwrap();
    m.fill(3);
    assert_eq!(m, Matrix::try_from([[3], [3]]).unwrap());

    let m = 10 * m;
    assert_eq!(m, Matrix::try_from([[30], [30]]).unwrap());

    let t = m.transpose();
    assert_eq!(t.shape(), Shape::new(1, 2));
    assert_eq!(t.as_slice(), &[30, 30]);
}

#[test]
fn test_row_times_transposed_column() {
    let a = Matrix::try_from([[15, 15]]).unwrap();
    let b = Matrix::try_from([[30, 30]]).unwrap().transpose();
    assert_eq!(b.shape(), Shape::new(2, 1));

    let c = (&a * &b).unwrap();
    assert_eq!(c.shape(), Shape::new(1, 1));
    assert_eq!(c.get(0, 0), Ok(900));
}

#[test]
fn test_inner_dimensions_disagree() {
    let a: Matrix<f64> = Matrix::new(2, 3).unwrap();
    let b: Matrix<f64> = Matrix::new(2, 2).unwrap();

    let err = (&a * &b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionIncompatible {
            lhs: Shape::new(2, 3),
            rhs: Shape::new(2, 2)
        }
    );
    assert!(err.to_string().contains("3 and 2"));
}

#[test]
fn test_add_shape_mismatch() {
    let a: Matrix<f64> = Matrix::new(2, 2).unwrap();
    let b: Matrix<f64> = Matrix::new(3, 2).unwrap();

    assert_eq!(
        &a + &b,
        Err(MatrixError::ShapeMismatch {
            lhs: Shape::new(2, 2),
            rhs: Shape::new(3, 2)
        })
    );
}

#[test]
fn test_float_and_int_walkthrough() {
    let mut a: Matrix<f32> = Matrix::new(3, 3).unwrap();
    a.fill_cast(5.0).unwrap();
    let a = a * 3.0;
    assert_eq!(a.to_string(), "15 15 15\n15 15 15\n15 15 15\n");

    let mut b: Matrix<i32> = Matrix::new(3, 3).unwrap();
    b.fill(3);
    let b = 10 * b;
    assert_eq!(b.to_string(), "30 30 30\n30 30 30\n30 30 30\n");
}

#[test]
fn test_errors_are_std_errors() {
    fn build() -> Result<Matrix<u8>, Box<dyn std::error::Error>> {
        Ok(Matrix::new(0, 1)?)
    }

    let err = build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid shape (0, 1): both dimensions must be positive"
    );
}
