// src/ui/form/rows.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::form_actions::{
    events::{
        CalculateAverageRequest, CalculateRequest, GenerateFilesRequest, GreetRequest,
        PickPathRequest,
    },
    resources::{FormState, PathTarget},
};

const ENTRY_WIDTH: f32 = 180.0;
const PATH_ENTRY_WIDTH: f32 = 300.0;

pub(super) struct FormEventWriters<'a, 'w> {
    pub greet_writer: &'a mut EventWriter<'w, GreetRequest>,
    pub calculate_writer: &'a mut EventWriter<'w, CalculateRequest>,
    pub generate_writer: &'a mut EventWriter<'w, GenerateFilesRequest>,
    pub average_writer: &'a mut EventWriter<'w, CalculateAverageRequest>,
    pub pick_path_writer: &'a mut EventWriter<'w, PickPathRequest>,
}

fn entry(ui: &mut egui::Ui, text: &mut String, width: f32) -> egui::Response {
    ui.add(egui::TextEdit::singleline(text).desired_width(width))
}

fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

/// Name entry. The leading label turns into the greeting.
pub(super) fn show_greeting_row(
    ui: &mut egui::Ui,
    state: &mut FormState,
    writers: &mut FormEventWriters,
) {
    ui.label(state.greeting.as_str());
    let response = entry(ui, &mut state.name_input, ENTRY_WIDTH);
    let enter = submitted(ui, &response);
    if ui.button("Hello!").clicked() || enter {
        writers.greet_writer.write(GreetRequest);
    }
    ui.end_row();
}

pub(super) fn show_number_rows(
    ui: &mut egui::Ui,
    state: &mut FormState,
    writers: &mut FormEventWriters,
) {
    ui.label("Number 1:");
    entry(ui, &mut state.first_number_input, ENTRY_WIDTH);
    ui.label("");
    ui.end_row();

    ui.label("Number 2:");
    let response = entry(ui, &mut state.second_number_input, ENTRY_WIDTH);
    let enter = submitted(ui, &response);
    if ui.button("Calculate").clicked() || enter {
        writers.calculate_writer.write(CalculateRequest);
    }
    ui.end_row();
}

/// Output directory with its picker and "Create files".
pub(super) fn show_directory_rows(
    ui: &mut egui::Ui,
    state: &mut FormState,
    writers: &mut FormEventWriters,
) {
    ui.label("Select a directory:");
    entry(ui, &mut state.directory_input, PATH_ENTRY_WIDTH)
        .on_hover_text(&state.directory_input);
    if ui.button("Select").on_hover_text("Pick the output directory").clicked() {
        writers.pick_path_writer.write(PickPathRequest { target: PathTarget::Directory });
    }
    ui.end_row();

    ui.label("");
    if ui.button("Create files").clicked() {
        writers.generate_writer.write(GenerateFilesRequest);
    }
    ui.label("");
    ui.end_row();
}

/// Input file with its picker and "Calculate average".
pub(super) fn show_file_rows(
    ui: &mut egui::Ui,
    state: &mut FormState,
    writers: &mut FormEventWriters,
) {
    ui.label("Select a file:");
    entry(ui, &mut state.file_input, PATH_ENTRY_WIDTH).on_hover_text(&state.file_input);
    if ui.button("Browse...").on_hover_text("Pick a text file").clicked() {
        writers.pick_path_writer.write(PickPathRequest { target: PathTarget::File });
    }
    ui.end_row();

    ui.label("");
    if ui.button("Calculate average").clicked() {
        writers.average_writer.write(CalculateAverageRequest);
    }
    ui.label("");
    ui.end_row();
}
