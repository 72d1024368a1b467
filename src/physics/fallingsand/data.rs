//! The data module contains the data structures for the falling sand physics engine.
//! This is where the actual grid of grains is stored.

pub mod sand_grid;
