pub mod aliases;
pub mod number;
pub mod vector;
