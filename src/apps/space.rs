use fixvec::{Vector, VectorF3};
use log::{debug, info};

pub fn space_walk(point: (f32, f32, f32)) -> VectorF3 {
    let v4 = VectorF3::from(point);
    info!("v4: {}", v4);
    info!("-v4: {}", -v4);

    let unit = Vector::normalized(&v4);
    info!("unit: {:.4} (length {})", unit, unit.length());

    let mut flipped = v4;
    flipped.negate().normalize();
    info!("flipped unit: {:.4}", flipped);

    let mut zero = VectorF3::new();
    zero.normalize();
    debug!("zero after normalize: {}", zero);
    unit
}
