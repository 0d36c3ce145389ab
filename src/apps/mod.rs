pub mod config;
pub mod plane;
pub mod relay;
pub mod space;
