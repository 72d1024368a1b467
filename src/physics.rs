//! This module contains all the physics related code.
//!
//! When contributing to this module, please keep the following things in mind:
//! * I try to maintain this module as "game engine agnostic" as possible.
//!   Bevy only shows up here for colors, images and logging.
//!   Please use internal types as much as possible.
//! * Physics should be highly unit tested.

pub mod fallingsand;
