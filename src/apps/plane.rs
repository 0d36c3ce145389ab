use fixvec::{Vector, VectorF2};
use log::{debug, info};

use crate::apps::config::{PLANE_SCALE, PLANE_SHIFT};

pub fn plane_walk(v0: VectorF2, v1: VectorF2) -> VectorF2 {
    let mut v2 = v0 - v1;
    info!("v0: {}", v0);
    info!("v1: {}", v1);
    info!("v2: {}", v2);

    v2 += v0;
    debug!("v2 += v0: {}", v2);

    v2 -= v2;
    debug!("v2 -= v2: {}", v2);

    let mut v3 = v2 + PLANE_SHIFT;
    debug!("v3: {}", v3);

    v3.sub_scalar(PLANE_SCALE).div_scalar(PLANE_SCALE);
    info!("v3: {}", v3);

    info!("v3.length_sqr(): {}", v3.length_sqr());
    info!("v3.dot(v1): {}", v3.dot(&v1));
    info!("v3.dist(v1): {}", Vector::dist(&v3, &v1));
    v3
}
