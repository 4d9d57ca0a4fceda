use crate::{matrix::Matrix, numeric::Numeric};
use std::fmt::{Display, Formatter};
use std::io::Write;

/// One line per row, elements separated by a single space.
impl<T: Numeric> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        for row in self.row_iter() {
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", val)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl<T: Numeric> Matrix<T> {
    pub fn render_to<W: Write>(&self, output: &mut W) -> std::io::Result<()> {
        write!(output, "{}", self)
    }
}
