// src/form_actions/handler.rs

use bevy::prelude::*;
use rfd::FileDialog;

use super::events::*;
use super::executers::{average_of_file, calculate, generate_number_files, greeting_for, parse_number};
use super::resources::{ActionError, FormState, NumberFileSettings, PathTarget};

fn report_error(feedback_writer: &mut EventWriter<ActionFeedback>, err: ActionError) {
    match &err {
        ActionError::InvalidNumber { field, input } => {
            warn!("FormActions: {} number field holds '{}', not a number.", field, input)
        }
        ActionError::FileGeneration(detail) => {
            error!("FormActions: File generation failed: {}", detail)
        }
        other => warn!("FormActions: {:?}", other),
    }
    feedback_writer.write(ActionFeedback::error(err.to_string()));
}

/// Handles `GreetRequest` by replacing the greeting label.
/// An empty name leaves the label as it was.
pub(crate) fn handle_greet_request_system(
    mut events: EventReader<GreetRequest>,
    mut state: ResMut<FormState>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    match greeting_for(&state.name_input) {
        Some(greeting) => {
            info!("FormActions: Greeting '{}'", state.name_input);
            state.greeting = greeting;
        }
        None => debug!("FormActions: Greet requested with an empty name, ignoring."),
    }
}

pub(crate) fn handle_calculate_request_system(
    mut events: EventReader<CalculateRequest>,
    state: Res<FormState>,
    mut feedback_writer: EventWriter<ActionFeedback>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let operands = parse_number("first", &state.first_number_input)
        .and_then(|first| Ok((first, parse_number("second", &state.second_number_input)?)));

    match operands {
        Ok((first, second)) => {
            let report = calculate(first, second);
            info!("FormActions: Calculated {:?} for {} and {}", report, first, second);
            feedback_writer.write(ActionFeedback::success(report.render()));
        }
        Err(e) => report_error(&mut feedback_writer, e),
    }
}

/// Handles the `PickPathRequest` event to show a native dialog.
/// Sends a `PathPickedEvent` with the result.
pub(crate) fn handle_pick_path_request_system(
    mut events: EventReader<PickPathRequest>,
    mut path_picked_writer: EventWriter<PathPickedEvent>,
) {
    let Some(request) = events.read().last().cloned() else {
        return;
    };
    info!("FormActions: Received PickPathRequest: {:?}", request);

    let picked = match request.target {
        PathTarget::Directory => FileDialog::new().pick_folder(),
        PathTarget::File => FileDialog::new()
            .add_filter("Text files", &["txt"])
            .add_filter("All files", &["*"])
            .pick_file(),
    };
    path_picked_writer.write(PathPickedEvent {
        target: request.target,
        path: picked,
    });
}

/// Applies `PathPickedEvent` to the matching entry field. Cancelled dialogs change nothing.
pub(crate) fn apply_picked_path_system(
    mut events: EventReader<PathPickedEvent>,
    mut state: ResMut<FormState>,
) {
    for event in events.read() {
        match &event.path {
            Some(path) => {
                *state.field_for(event.target) = path.display().to_string();
                info!("FormActions: {:?} field set to {:?}", event.target, path);
            }
            None => info!("FormActions: {:?} selection cancelled.", event.target),
        }
    }
}

pub(crate) fn handle_generate_files_request_system(
    mut events: EventReader<GenerateFilesRequest>,
    state: Res<FormState>,
    settings: Res<NumberFileSettings>,
    mut feedback_writer: EventWriter<ActionFeedback>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    match generate_number_files(&state.directory_input, &settings, &mut rand::rng()) {
        Ok(_) => {
            feedback_writer.write(ActionFeedback::success("Files created successfully!"));
        }
        Err(e) => report_error(&mut feedback_writer, e),
    }
}

pub(crate) fn handle_calculate_average_request_system(
    mut events: EventReader<CalculateAverageRequest>,
    state: Res<FormState>,
    mut feedback_writer: EventWriter<ActionFeedback>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    match average_of_file(&state.file_input) {
        Ok(mean) => {
            info!("FormActions: Average of {:?} is {}", state.file_input, mean);
            feedback_writer.write(ActionFeedback::success(format!("Average: {}", mean)));
        }
        Err(e) => report_error(&mut feedback_writer, e),
    }
}
