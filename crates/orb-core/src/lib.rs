pub mod config;
pub mod field;
pub mod lifecycle;
pub mod math;
pub mod palette;
pub mod random;
pub mod scene;
