mod component;
pub mod geometry;

pub use component::*;
