//! Fixed-dimension numeric vectors stored inline, with component-wise and
//! scalar arithmetic plus the usual geometric queries.
//!
//! ```
//! use fixvec::VectorF2;
//!
//! let mut v = VectorF2::from([9.0, 15.0]) - VectorF2::from([3.0, 5.0]);
//! v.sub_scalar(1.0).div_scalar(5.0);
//! assert_eq!(v, VectorF2::from([1.0, 1.8]));
//! ```

pub mod math;

pub use math::aliases::*;
pub use math::number::{Number, Real};
pub use math::vector::{vec2, vec3, Vector};
