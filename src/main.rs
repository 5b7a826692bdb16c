// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::WinitSettings,
};
use bevy_egui::EguiPlugin;

mod form_actions;
mod ui;
mod window_icon;

use form_actions::FormActionsPlugin;
use ui::FormUiPlugin;

fn main() {
    App::new()
        // Nothing animates, so only redraw on input.
        .insert_resource(WinitSettings::desktop_app())
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "My Application".into(),
                        resolution: (560.0, 420.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(FormActionsPlugin)
        .add_plugins(FormUiPlugin)
        .add_systems(Startup, window_icon::set_window_icon)
        .run();
}
