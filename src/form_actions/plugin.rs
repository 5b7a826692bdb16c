// src/form_actions/plugin.rs

use bevy::prelude::*;

use super::events::*;
use super::handler::{
    apply_picked_path_system,
    handle_calculate_average_request_system,
    handle_calculate_request_system,
    handle_generate_files_request_system,
    handle_greet_request_system,
    handle_pick_path_request_system,
};
use super::resources::{FormState, NumberFileSettings};

/// Registers the form's state, its request events and the systems answering them.
pub struct FormActionsPlugin;

impl Plugin for FormActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FormState>()
            .init_resource::<NumberFileSettings>();

        app.add_event::<GreetRequest>()
            .add_event::<CalculateRequest>()
            .add_event::<GenerateFilesRequest>()
            .add_event::<CalculateAverageRequest>()
            .add_event::<PickPathRequest>()
            .add_event::<PathPickedEvent>()
            .add_event::<ActionFeedback>();

        app.add_systems(
            Update,
            (
                // Dialogs first so a picked path is in place before any action reads it
                handle_pick_path_request_system,
                apply_picked_path_system,
                handle_greet_request_system,
                handle_calculate_request_system,
                handle_generate_files_request_system,
                handle_calculate_average_request_system,
            )
                .chain(),
        );

        info!("FormActionsPlugin initialized.");
    }
}
