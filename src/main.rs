use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::time::Fixed;
use bevy_egui::EguiPlugin;
use hue_sand::entities::sandbox::SandboxBuilder;
use hue_sand::gui::GuiPluginGroup;

fn main() {
    let sandbox = SandboxBuilder::new().build();
    let steps_per_second = sandbox.get_steps_per_second();
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    level: Level::INFO,
                    ..Default::default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Hue Sand".to_string(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(EguiPlugin)
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(steps_per_second))
        .insert_resource(sandbox)
        .add_plugins(GuiPluginGroup)
        .run();
}
