use crate::{matrix::Matrix, numeric::Numeric, storage::nth_idx};
use std::iter::Map;

/// Row-major iterator over `((row, col), &value)`.
pub struct Iter<'a, T: Numeric> {
    m: &'a Matrix<T>,
    cur: usize,
}

impl<'a, T: Numeric> Iter<'a, T> {
    pub fn new(m: &'a Matrix<T>) -> Self {
        Self { m, cur: 0 }
    }

    pub fn values(self) -> Map<Iter<'a, T>, impl FnMut(((usize, usize), &'a T)) -> &'a T> {
        self.map(|(_, v)| v)
    }
}

impl<'a, T: Numeric> Iterator for Iter<'a, T> {
    type Item = ((usize, usize), &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.m.data.get(self.cur)?;
        let idx = nth_idx(self.cur, self.m.shape());
        self.cur += 1;

        Some((idx, val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.m.data.len() - self.cur;
        (left, Some(left))
    }
}

impl<T: Numeric> ExactSizeIterator for Iter<'_, T> {}

/// Owning row-major iterator over `((row, col), value)`.
pub struct IntoIter<T: Numeric> {
    cur: usize,
    cols: usize,
    iter: std::vec::IntoIter<T>,
}

impl<T: Numeric> IntoIter<T> {
    pub fn new(m: Matrix<T>) -> Self {
        Self {
            cur: 0,
            cols: m.cols,
            iter: m.data.into_iter(),
        }
    }
}

impl<T: Numeric> Iterator for IntoIter<T> {
    type Item = ((usize, usize), T);

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.iter.next()?;
        let idx = (self.cur / self.cols, self.cur % self.cols);
        self.cur += 1;

        Some((idx, val))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T: Numeric> ExactSizeIterator for IntoIter<T> {}

impl<T: Numeric> IntoIterator for Matrix<T> {
    type Item = ((usize, usize), T);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T: Numeric> IntoIterator for &'a Matrix<T> {
    type Item = ((usize, usize), &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
