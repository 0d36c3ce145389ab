use std::array;
use std::fmt::{self, Display, Formatter, Write};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::slice;

use log::trace;

use super::number::{Number, Real, Zero};

/// Fixed-size vector of `S` elements of type `T`, stored inline.
///
/// Laid out exactly like `[T; S]`, so it can sit inside vertex and buffer structs.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector<T, const S: usize> {
    data: [T; S],
}

/// Builds a [`Vector`] from exactly as many scalars as its dimension.
///
/// ```
/// use fixvec::{vector, VectorF3};
///
/// let v: VectorF3 = vector![1.0, 2.0, 3.0];
/// assert_eq!(v[2], 3.0);
/// ```
#[macro_export]
macro_rules! vector {
    ($($e:expr),* $(,)?) => {
        $crate::math::vector::Vector::from_array([$($e),*])
    };
}

/// 2D vector from its two components.
pub const fn vec2<T>(x: T, y: T) -> Vector<T, 2> {
    Vector::from_array([x, y])
}

/// 3D vector from its three components.
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> {
    Vector::from_array([x, y, z])
}

impl<T, const S: usize> Vector<T, S> {
    /// Wraps `data` as-is; usable in `const` items.
    pub const fn from_array(data: [T; S]) -> Self {
        Self { data }
    }

    pub const fn len(&self) -> usize {
        S
    }

    pub const fn is_empty(&self) -> bool {
        S == 0
    }

    pub fn elements(&self) -> &[T; S] {
        &self.data
    }

    pub fn elements_mut(&mut self) -> &mut [T; S] {
        &mut self.data
    }

    pub fn into_array(self) -> [T; S] {
        self.data
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T, const S: usize> Vector<T, S>
where
    T: Zero + Copy,
{
    /// All-zero vector.
    pub fn new() -> Self {
        Self {
            data: [T::zero(); S],
        }
    }
}

impl<T, const S: usize> Default for Vector<T, S>
where
    T: Zero + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

// Element-wise engine. Every arithmetic operator below goes through one of
// these; all of them visit indices 0..S in ascending order.
impl<T: Copy, const S: usize> Vector<T, S> {
    #[inline(always)]
    fn zip_with(lhs: &[T; S], rhs: &[T; S], op: impl Fn(T, T) -> T) -> [T; S] {
        array::from_fn(|i| op(lhs[i], rhs[i]))
    }

    #[inline(always)]
    fn zip_with_mut(lhs: &mut [T; S], rhs: &[T; S], op: impl Fn(&mut T, T)) {
        for (l, &r) in lhs.iter_mut().zip(rhs) {
            op(l, r);
        }
    }

    #[inline(always)]
    fn scalar_with(lhs: &[T; S], s: T, op: impl Fn(T, T) -> T) -> [T; S] {
        array::from_fn(|i| op(lhs[i], s))
    }

    #[inline(always)]
    fn scalar_with_mut(lhs: &mut [T; S], s: T, op: impl Fn(&mut T, T)) {
        for l in lhs.iter_mut() {
            op(l, s);
        }
    }

    #[inline(always)]
    fn map(lhs: &[T; S], op: impl Fn(T) -> T) -> [T; S] {
        array::from_fn(|i| op(lhs[i]))
    }

    #[inline(always)]
    fn map_mut(lhs: &mut [T; S], op: impl Fn(&mut T)) {
        lhs.iter_mut().for_each(op);
    }
}

impl<T: Number, const S: usize> Vector<T, S> {
    pub fn add_vector(&mut self, rhs: Self) -> &mut Self {
        Self::zip_with_mut(&mut self.data, &rhs.data, |l, r| *l += r);
        self
    }

    pub fn sub_vector(&mut self, rhs: Self) -> &mut Self {
        Self::zip_with_mut(&mut self.data, &rhs.data, |l, r| *l -= r);
        self
    }

    pub fn add_scalar(&mut self, s: T) -> &mut Self {
        Self::scalar_with_mut(&mut self.data, s, |l, r| *l += r);
        self
    }

    pub fn sub_scalar(&mut self, s: T) -> &mut Self {
        Self::scalar_with_mut(&mut self.data, s, |l, r| *l -= r);
        self
    }

    pub fn mul_scalar(&mut self, s: T) -> &mut Self {
        Self::scalar_with_mut(&mut self.data, s, |l, r| *l *= r);
        self
    }

    /// Divides every element by `s`. A zero `s` behaves as `T`'s own division does.
    pub fn div_scalar(&mut self, s: T) -> &mut Self {
        Self::scalar_with_mut(&mut self.data, s, |l, r| *l /= r);
        self
    }

    /// Sum of the element-wise products, accumulated from index 0 upwards.
    ///
    /// Also usable in the static form `Vector::dot(&a, &b)`.
    pub fn dot(&self, other: &Self) -> T {
        Self::zip_with(&self.data, &other.data, |a, b| a * b)
            .into_iter()
            .fold(T::zero(), |acc, p| acc + p)
    }

    pub fn length_sqr(&self) -> T {
        self.dot(self)
    }
}

impl<T: Real, const S: usize> Vector<T, S> {
    pub fn length(&self) -> T {
        self.length_sqr().sqrt()
    }

    /// Scales `self` to unit length in place.
    ///
    /// A vector whose squared length is exactly zero is left untouched. That
    /// includes nonzero vectors so small their squared length underflows to zero.
    /// Finite vectors whose squared length overflows are rescaled by their
    /// largest component first.
    pub fn normalize(&mut self) -> &mut Self {
        let mut len_sqr = self.length_sqr();
        if len_sqr == T::zero() {
            trace!("normalize on zero-length vector (skipped)");
            return self;
        }
        if len_sqr.is_infinite() && self.iter().all(|&e| e.is_finite()) {
            let largest = self.iter().fold(T::zero(), |m, &e| m.max(e.abs()));
            self.div_scalar(largest);
            len_sqr = self.length_sqr();
        }
        self.mul_scalar(T::one() / len_sqr.sqrt())
    }

    /// Unit-length copy of `self`, same zero-length rule as [`Vector::normalize`].
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Euclidean distance, also usable as `Vector::dist(&a, &b)`.
    pub fn dist(&self, other: &Self) -> T {
        (*self - *other).length()
    }
}

impl<T, const S: usize> Vector<T, S>
where
    T: Number + Neg<Output = T>,
{
    pub fn negate(&mut self) -> &mut Self {
        Self::map_mut(&mut self.data, |e| *e = -*e);
        self
    }
}

macro_rules! impl_vector_ops {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident, $chain:ident, $op:tt;)*) => {
        $(
            impl<T: Number, const S: usize> $trait for Vector<T, S> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Self::from_array(Self::zip_with(&self.data, &rhs.data, |a, b| a $op b))
                }
            }

            impl<T: Number, const S: usize> $assign for Vector<T, S> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    self.$chain(rhs);
                }
            }
        )*
    };
}

macro_rules! impl_scalar_ops {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident, $chain:ident, $op:tt;)*) => {
        $(
            impl<T: Number, const S: usize> $trait<T> for Vector<T, S> {
                type Output = Self;

                #[inline]
                fn $method(self, s: T) -> Self {
                    Self::from_array(Self::scalar_with(&self.data, s, |a, b| a $op b))
                }
            }

            impl<T: Number, const S: usize> $assign<T> for Vector<T, S> {
                #[inline]
                fn $assign_method(&mut self, s: T) {
                    self.$chain(s);
                }
            }
        )*
    };
}

impl_vector_ops! {
    Add::add, AddAssign::add_assign, add_vector, +;
    Sub::sub, SubAssign::sub_assign, sub_vector, -;
}

impl_scalar_ops! {
    Add::add, AddAssign::add_assign, add_scalar, +;
    Sub::sub, SubAssign::sub_assign, sub_scalar, -;
    Mul::mul, MulAssign::mul_assign, mul_scalar, *;
    Div::div, DivAssign::div_assign, div_scalar, /;
}

impl<T, const S: usize> Neg for Vector<T, S>
where
    T: Number + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_array(Self::map(&self.data, |e| -e))
    }
}

impl<T, const S: usize> Index<usize> for Vector<T, S> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const S: usize> IndexMut<usize> for Vector<T, S> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

/// Each element followed by a single space, e.g. `1 2 3 `.
///
/// Width and precision flags apply to every element.
impl<T: Display, const S: usize> Display for Vector<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for element in &self.data {
            Display::fmt(element, f)?;
            f.write_char(' ')?;
        }
        Ok(())
    }
}

impl<T, const S: usize> From<[T; S]> for Vector<T, S> {
    fn from(data: [T; S]) -> Self {
        Self::from_array(data)
    }
}

impl<T, const S: usize> From<Vector<T, S>> for [T; S] {
    fn from(v: Vector<T, S>) -> Self {
        v.data
    }
}

macro_rules! impl_from_tuple {
    (@elem $e:ident) => { T };
    ($($s:literal => ($($e:ident),+);)*) => {
        $(
            impl<T> From<($(impl_from_tuple!(@elem $e),)+)> for Vector<T, $s> {
                fn from(($($e,)+): ($(impl_from_tuple!(@elem $e),)+)) -> Self {
                    Self::from_array([$($e),+])
                }
            }
        )*
    };
}

impl_from_tuple! {
    1 => (x);
    2 => (x, y);
    3 => (x, y, z);
    4 => (x, y, z, w);
}

impl<T, const S: usize> IntoIterator for Vector<T, S> {
    type Item = T;
    type IntoIter = array::IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const S: usize> IntoIterator for &'a Vector<T, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn engine_visits_indices_in_ascending_order() {
        let seen = RefCell::new(Vec::new());
        let mut data = [10, 20, 30, 40];

        Vector::<i32, 4>::scalar_with_mut(&mut data, 1, |e, s| {
            seen.borrow_mut().push(*e);
            *e += s;
        });
        assert_eq!(*seen.borrow(), vec![10, 20, 30, 40]);
        assert_eq!(data, [11, 21, 31, 41]);

        seen.borrow_mut().clear();
        let out = Vector::<i32, 4>::zip_with(&data, &[1, 2, 3, 4], |a, b| {
            seen.borrow_mut().push(a);
            a * b
        });
        assert_eq!(*seen.borrow(), vec![11, 21, 31, 41]);
        assert_eq!(out, [11, 42, 93, 164]);
    }

    #[test]
    fn unary_forms() {
        let data = [1.5f32, -2.0, 0.0];
        assert_eq!(Vector::<f32, 3>::map(&data, |e| e * 2.0), [3.0, -4.0, 0.0]);

        let mut v = Vector::from_array(data);
        v.negate();
        assert_eq!(v.into_array(), [-1.5, 2.0, -0.0]);
    }
}
