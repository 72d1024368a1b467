use bevy::app::{App, Plugin, Update};
use bevy::ecs::system::ResMut;
use bevy_egui::{egui, EguiContexts};
use strum::IntoEnumIterator;

use crate::entities::sandbox::SandboxData;
use crate::gui::paint_mode::PaintMode;

/// The buttons for picking a paint mode and clearing the canvas
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, controls_window_system);
    }
}

pub fn controls_window_system(mut contexts: EguiContexts, mut sandbox: ResMut<SandboxData>) {
    let accent = sandbox.get_paint_mode().accent_hue().map(|hue| {
        let [r, g, b, _] = hue.color().as_rgba_u8();
        egui::Color32::from_rgb(r, g, b)
    });
    egui::Window::new("Controls").show(contexts.ctx_mut(), |ui| {
        let mut title = egui::RichText::new("Hue Sand").heading();
        if let Some(accent) = accent {
            title = title.color(accent);
        }
        ui.label(title);
        ui.separator();
        ui.horizontal(|ui| {
            for mode in PaintMode::iter().filter(|mode| *mode != PaintMode::Normal) {
                if ui
                    .selectable_label(sandbox.get_mode() == mode, mode.to_string())
                    .clicked()
                {
                    sandbox.toggle_mode(mode);
                }
            }
            if ui.button("Clear Canvas").clicked() {
                sandbox.clear();
            }
        });
        ui.separator();
        ui.label(format!("Grains: {}", sandbox.get_grid().count_grains()));
        ui.label(format!("Generation: {}", sandbox.get_generation()));
    });
}
