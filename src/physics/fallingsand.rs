//! Falling sand physics engine.
//! A fixed size grid of colored grains, painted with a brush
//! and pulled down one cell per generation.

pub mod brush;
pub mod data;
pub mod elements;
pub mod simulation;
pub mod util;
