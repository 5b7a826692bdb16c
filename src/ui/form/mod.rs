// src/ui/form/mod.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

mod rows;

use crate::form_actions::{
    events::{
        CalculateAverageRequest, CalculateRequest, GenerateFilesRequest, GreetRequest,
        PickPathRequest,
    },
    resources::FormState,
};
use crate::ui::UiFeedbackState;
use rows::{
    show_directory_rows, show_file_rows, show_greeting_row, show_number_rows, FormEventWriters,
};

/// Blocks of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormSection {
    Greeting,
    Numbers,
    Directory,
    File,
    /// The shared result label, below every button that writes to it.
    Result,
}

const FORM_LAYOUT: [FormSection; 5] = [
    FormSection::Greeting,
    FormSection::Numbers,
    FormSection::Directory,
    FormSection::File,
    FormSection::Result,
];

fn show_result_label(ui: &mut egui::Ui, ui_feedback: &UiFeedbackState) {
    if ui_feedback.last_message.is_empty() {
        return;
    }
    let text_color = if ui_feedback.is_error {
        egui::Color32::RED
    } else {
        ui.style().visuals.text_color()
    };
    ui.colored_label(text_color, &ui_feedback.last_message);
}

#[allow(clippy::too_many_arguments)]
pub fn main_form_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<FormState>,
    ui_feedback: Res<UiFeedbackState>,
    mut greet_writer: EventWriter<GreetRequest>,
    mut calculate_writer: EventWriter<CalculateRequest>,
    mut generate_writer: EventWriter<GenerateFilesRequest>,
    mut average_writer: EventWriter<CalculateAverageRequest>,
    mut pick_path_writer: EventWriter<PickPathRequest>,
) {
    let ctx = contexts.ctx_mut();
    let mut writers = FormEventWriters {
        greet_writer: &mut greet_writer,
        calculate_writer: &mut calculate_writer,
        generate_writer: &mut generate_writer,
        average_writer: &mut average_writer,
        pick_path_writer: &mut pick_path_writer,
    };

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::Grid::new("form_grid")
            .num_columns(3)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                for section in FORM_LAYOUT {
                    match section {
                        FormSection::Greeting => show_greeting_row(ui, &mut state, &mut writers),
                        FormSection::Numbers => show_number_rows(ui, &mut state, &mut writers),
                        FormSection::Directory => {
                            show_directory_rows(ui, &mut state, &mut writers)
                        }
                        FormSection::File => show_file_rows(ui, &mut state, &mut writers),
                        FormSection::Result => {
                            ui.label("");
                            show_result_label(ui, &ui_feedback);
                            ui.end_row();
                        }
                    }
                }
            });
    });
}
