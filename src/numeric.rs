/// Element types a [`Matrix`](crate::matrix::Matrix) can hold: the built-in
/// integer and floating point primitives.
///
/// `num::Num` brings `+`, `-`, `*`, zero, one and equality; `num::NumCast` is
/// what lets [`fill_cast`](crate::matrix::Matrix::fill_cast) convert foreign
/// values explicitly.
pub trait Numeric:
    num::Num
    + num::NumCast
    + Copy
    + std::fmt::Display
    + std::fmt::Debug
    + std::ops::MulAssign
    + Send
    + Sync
    + 'static
{
}

macro_rules! numeric_impls {
    ( $( $t:ty ),* ) => {
        $( impl Numeric for $t {} )*
    };
}

numeric_impls!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
