use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod snowfall_panel;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_plugins(snowfall_panel::SnowfallPanelPlugin);
    }
}
