pub mod components;
pub mod theme;

pub use components::*;
