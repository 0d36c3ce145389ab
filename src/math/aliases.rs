//! Shorthand names for common dimensions and element types.

use super::vector::Vector;

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;

pub type VectorC<const S: usize> = Vector<i8, S>;
pub type VectorS<const S: usize> = Vector<i16, S>;
pub type VectorI<const S: usize> = Vector<i32, S>;
pub type VectorL<const S: usize> = Vector<i64, S>;
pub type VectorF<const S: usize> = Vector<f32, S>;
pub type VectorD<const S: usize> = Vector<f64, S>;
/// Widest float available on stable Rust.
pub type VectorR<const S: usize> = Vector<f64, S>;

pub type VectorC2 = VectorC<2>;
pub type VectorS2 = VectorS<2>;
pub type VectorI2 = VectorI<2>;
pub type VectorL2 = VectorL<2>;
pub type VectorF2 = VectorF<2>;
pub type VectorD2 = VectorD<2>;
pub type VectorR2 = VectorR<2>;

pub type VectorC3 = VectorC<3>;
pub type VectorS3 = VectorS<3>;
pub type VectorI3 = VectorI<3>;
pub type VectorL3 = VectorL<3>;
pub type VectorF3 = VectorF<3>;
pub type VectorD3 = VectorD<3>;
pub type VectorR3 = VectorR<3>;
