//! # Rendering Module
//!
//! Text rendering of the concealed map and console output management.

pub mod display;
pub mod map;

pub use display::*;
pub use map::*;
