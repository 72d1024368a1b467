//! This module contains all the top level state the game holds.

pub mod sandbox;
