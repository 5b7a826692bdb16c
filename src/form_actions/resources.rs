// src/form_actions/resources.rs

use bevy::prelude::*;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use thiserror::Error;

/// Text held by the form's entry fields, plus the greeting label.
#[derive(Resource, Debug, Clone)]
pub struct FormState {
    pub name_input: String,
    pub first_number_input: String,
    pub second_number_input: String,
    pub directory_input: String,
    pub file_input: String,
    /// Shown next to the name field. Replaced by the greeting once the user greets.
    pub greeting: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name_input: String::new(),
            first_number_input: String::new(),
            second_number_input: String::new(),
            directory_input: String::new(),
            file_input: String::new(),
            greeting: "Name:".to_string(),
        }
    }
}

impl FormState {
    pub fn field_for(&mut self, target: PathTarget) -> &mut String {
        match target {
            PathTarget::Directory => &mut self.directory_input,
            PathTarget::File => &mut self.file_input,
        }
    }
}

/// Which entry field a picked path is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathTarget {
    Directory,
    File,
}

/// Shape of the files written by "Create files".
#[derive(Resource, Debug, Clone)]
pub struct NumberFileSettings {
    pub file_count: usize,
    pub numbers_per_file: usize,
    pub value_range: RangeInclusive<i64>,
    pub file_prefix: String,
    pub file_extension: String,
}

impl Default for NumberFileSettings {
    fn default() -> Self {
        Self {
            file_count: 3,
            numbers_per_file: 10,
            value_range: 1..=100,
            file_prefix: "numbers_".to_string(),
            file_extension: "txt".to_string(),
        }
    }
}

impl NumberFileSettings {
    /// File name for the 1-based `index`.
    pub fn file_name(&self, index: usize) -> String {
        format!("{}{}.{}", self.file_prefix, index, self.file_extension)
    }
}

/// Failures of the form actions. The `Display` text is what the result label shows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("Error: Enter numbers!")]
    InvalidNumber { field: &'static str, input: String },
    #[error("Error: Select a directory!")]
    DirectoryNotSelected,
    #[error("Error: failed to create files!")]
    FileGeneration(String),
    #[error("Error: Select a file!")]
    FileNotSelected,
    #[error("Error: File {} not found.", .0.display())]
    FileNotFound(PathBuf),
    #[error("Error: could not process the data in file {}.", .0.display())]
    DataProcessing(PathBuf),
    #[error("Error: The file is empty or contains invalid data.")]
    NoNumbers,
    #[error("Error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ActionError {
    fn from(err: std::io::Error) -> Self {
        ActionError::Io(err.to_string())
    }
}
