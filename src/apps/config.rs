use fixvec::{Vector, VectorF2, VectorF3};

pub const PLANE_ORIGIN: VectorF2 = Vector::from_array([9.0, 15.0]);
pub const PLANE_TARGET: VectorF2 = Vector::from_array([3.0, 5.0]);
pub const PLANE_SHIFT: f32 = 10.0;
pub const PLANE_SCALE: f32 = 5.0;

pub const SPACE_POINT: (f32, f32, f32) = (1.0, 2.0, 3.0);

pub const RELAY_REFERENCE: VectorF3 = Vector::from_array([1.0, 1.0, 1.0]);
pub const RELAY_POINTS: [VectorF3; 4] = [
    Vector::from_array([1.0, 1.0, 1.0]),
    Vector::from_array([4.0, 5.0, 1.0]),
    Vector::from_array([-2.0, 1.0, 5.0]),
    Vector::from_array([0.0, 0.0, 0.0]),
];
