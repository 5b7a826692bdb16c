// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod form;
pub mod systems;

use form::main_form_ui;
use systems::handle_ui_feedback;

/// Text of the shared result label.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin drawing the form and routing action feedback into it.
pub struct FormUiPlugin;

impl Plugin for FormUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            // After every handler of the frame, so the label updates in the same frame
            .add_systems(PostUpdate, handle_ui_feedback)
            .add_systems(EguiContextPass, main_form_ui);

        info!("FormUiPlugin initialized.");
    }
}
