//! This module contains everything a cell of the sand grid can hold.
//! There is only one material, a grain, whose hue is its whole identity.

pub mod cell;
pub mod hue;
pub mod movement;
