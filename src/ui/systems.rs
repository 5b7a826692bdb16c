// src/ui/systems.rs
use bevy::prelude::*;

use crate::form_actions::events::ActionFeedback;
use crate::ui::UiFeedbackState;

/// Copies the latest `ActionFeedback` of the frame into the result label.
pub fn handle_ui_feedback(
    mut feedback_events: EventReader<ActionFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let Some(event) = feedback_events.read().last() else {
        return;
    };
    ui_feedback_state.last_message = event.message.clone();
    ui_feedback_state.is_error = event.is_error;
    if event.is_error {
        warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
    } else {
        info!("UI Feedback: {}", ui_feedback_state.last_message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_feedback_of_the_frame_wins() {
        let mut app = App::new();
        app.add_event::<ActionFeedback>()
            .init_resource::<UiFeedbackState>()
            .add_systems(PostUpdate, handle_ui_feedback);

        app.world_mut().send_event(ActionFeedback::error("Error: Enter numbers!"));
        app.world_mut().send_event(ActionFeedback::success("Files created successfully!"));
        app.update();

        let state = app.world().resource::<UiFeedbackState>();
        assert_eq!(state.last_message, "Files created successfully!");
        assert!(!state.is_error);
    }

    #[test]
    fn no_feedback_keeps_previous_message() {
        let mut app = App::new();
        app.add_event::<ActionFeedback>()
            .insert_resource(UiFeedbackState {
                last_message: "Average: 2".to_string(),
                is_error: false,
            })
            .add_systems(PostUpdate, handle_ui_feedback);

        app.update();

        assert_eq!(app.world().resource::<UiFeedbackState>().last_message, "Average: 2");
    }
}
