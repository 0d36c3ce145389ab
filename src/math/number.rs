use std::fmt::{Debug, Display};

use num_traits::{Float, NumAssign};

pub use num_traits::{One, Zero};

/// Arithmetic element type a [`Vector`](super::vector::Vector) can hold.
///
/// Only implemented for the primitive integer and floating point types.
pub trait Number: Copy + NumAssign + Debug + Display + Send + Sync + 'static {}

/// Floating point element types, needed wherever a square root is taken.
pub trait Real: Number + Float {}

macro_rules! impl_number {
    ($($t:ty),*) => {
        $(impl Number for $t {})*
    };
}

impl_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Real for f32 {}
impl Real for f64 {}
