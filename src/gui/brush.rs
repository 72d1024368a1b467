use bevy::app::{App, Plugin, Update};
use bevy::ecs::event::EventReader;
use bevy::ecs::query::With;
use bevy::ecs::system::{Query, Res, ResMut};
use bevy::input::mouse::MouseButton;
use bevy::input::Input;
use bevy::math::Vec2;
use bevy::window::{CursorMoved, PrimaryWindow, Window};
use bevy_egui::EguiContexts;

use crate::entities::sandbox::SandboxData;

/// Dragging with the left mouse button paints on the canvas
pub struct BrushPlugin;

impl Plugin for BrushPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_brush_system);
    }
}

/// Every cursor movement while the left button is held is one brush stroke
pub fn apply_brush_system(
    mouse: Res<Input<MouseButton>>,
    mut cursor_moved_events: EventReader<CursorMoved>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
    mut sandbox: ResMut<SandboxData>,
) {
    // Drags that belong to the controls window don't paint
    if !mouse.pressed(MouseButton::Left) || contexts.ctx_mut().is_pointer_over_area() {
        cursor_moved_events.clear();
        return;
    }
    let Ok(window) = windows.get_single() else {
        cursor_moved_events.clear();
        return;
    };
    let origin = sandbox.canvas_origin(Vec2::new(window.width(), window.height()));
    for event in cursor_moved_events.read() {
        let cell = sandbox.pixel_to_cell(event.position - origin);
        sandbox.brush_paint_at(cell);
    }
}
