use std::io;

use apps::config::{PLANE_ORIGIN, PLANE_TARGET, RELAY_POINTS, RELAY_REFERENCE, SPACE_POINT};
use apps::{plane::plane_walk, relay::relay_compute, space::space_walk};
use env_logger::Env;

mod apps;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("failed to read from stdin");

    let input = input.trim();
    match input.parse::<u32>() {
        Ok(0) => {
            plane_walk(PLANE_ORIGIN, PLANE_TARGET);
        }
        Ok(1) => {
            space_walk(SPACE_POINT);
        }
        Ok(2) => {
            relay_compute(RELAY_REFERENCE, &RELAY_POINTS);
        }
        Ok(i) => println!("program idx not found: {i}"),
        Err(..) => println!("failed to parse: {}", input),
    };
}
