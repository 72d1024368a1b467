//! This module contains all the GUI related code.
//! Things that are drawn to via screen coordinates rather than world coordinates,
//! and the systems turning pointer input into brush strokes.

use bevy::app::{PluginGroup, PluginGroupBuilder};

pub mod brush;
pub mod canvas;
pub mod controls;
pub mod paint_mode;

pub struct GuiPluginGroup;

impl PluginGroup for GuiPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(canvas::CanvasPlugin)
            .add(brush::BrushPlugin)
            .add(controls::ControlsPlugin)
    }
}
