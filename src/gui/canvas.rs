use bevy::app::{App, FixedUpdate, Plugin, Startup, Update};
use bevy::asset::{Assets, Handle};
use bevy::core_pipeline::core_2d::Camera2dBundle;
use bevy::ecs::component::Component;
use bevy::ecs::event::EventReader;
use bevy::ecs::query::With;
use bevy::ecs::schedule::IntoSystemConfigs;
use bevy::ecs::system::{Commands, Query, Res, ResMut};
use bevy::log::debug;
use bevy::render::texture::Image;
use bevy::sprite::{Sprite, SpriteBundle};
use bevy::window::{PrimaryWindow, Window, WindowResized};

use crate::entities::sandbox::SandboxData;
use crate::physics::fallingsand::util::color::canvas_background;

/// Draws the sand grid as a single centered sprite, one texel per cell
pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, SandCanvas::setup_system);
        app.add_systems(FixedUpdate, SandCanvas::step_system);
        app.add_systems(
            Update,
            (SandCanvas::resize_system, SandCanvas::draw_system).chain(),
        );
    }
}

/// Put this alongside the sprite that shows the sand grid
#[derive(Component, Debug, Clone, Copy)]
pub struct SandCanvas;

/// Bevy Systems
impl SandCanvas {
    /// Sizes the grid to the window and spawns the camera and canvas sprite
    pub fn setup_system(
        mut commands: Commands,
        mut images: ResMut<Assets<Image>>,
        mut sandbox: ResMut<SandboxData>,
        windows: Query<&Window, With<PrimaryWindow>>,
    ) {
        commands.spawn(Camera2dBundle::default());

        if let Ok(window) = windows.get_single() {
            let (num_cols, num_rows) = sandbox.canvas_cells(window.width(), window.height());
            sandbox.resize(num_cols, num_rows);
        }

        let texture = sandbox
            .get_grid()
            .get_texture(canvas_background())
            .to_bevy_image();
        commands.spawn((
            SpriteBundle {
                texture: images.add(texture),
                sprite: Sprite {
                    custom_size: Some(sandbox.canvas_pixel_size()),
                    ..Default::default()
                },
                ..Default::default()
            },
            SandCanvas,
        ));
    }

    /// One generation per fixed tick
    pub fn step_system(mut sandbox: ResMut<SandboxData>) {
        sandbox.step();
    }

    /// A new window size means a new, empty grid
    pub fn resize_system(
        mut resize_events: EventReader<WindowResized>,
        mut sandbox: ResMut<SandboxData>,
    ) {
        if let Some(event) = resize_events.read().last() {
            let dims = sandbox.canvas_cells(event.width, event.height);
            let grid = sandbox.get_grid();
            if dims != (grid.get_num_cols(), grid.get_num_rows()) {
                sandbox.resize(dims.0, dims.1);
            } else {
                debug!("Window resized without changing the canvas grid");
            }
        }
    }

    /// Uploads the current grid as the canvas texture
    pub fn draw_system(
        sandbox: Res<SandboxData>,
        mut images: ResMut<Assets<Image>>,
        mut canvas: Query<(&Handle<Image>, &mut Sprite), With<SandCanvas>>,
    ) {
        for (handle, mut sprite) in canvas.iter_mut() {
            if let Some(image) = images.get_mut(handle) {
                *image = sandbox
                    .get_grid()
                    .get_texture(canvas_background())
                    .to_bevy_image();
            }
            sprite.custom_size = Some(sandbox.canvas_pixel_size());
        }
    }
}
