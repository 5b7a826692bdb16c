// src/form_actions/events.rs

use bevy::prelude::*;
use std::path::PathBuf;

use super::resources::PathTarget;

/// "Hello!" was clicked.
#[derive(Event, Debug, Clone)]
pub struct GreetRequest;

/// "Calculate" was clicked.
#[derive(Event, Debug, Clone)]
pub struct CalculateRequest;

/// "Create files" was clicked.
#[derive(Event, Debug, Clone)]
pub struct GenerateFilesRequest;

/// "Calculate average" was clicked.
#[derive(Event, Debug, Clone)]
pub struct CalculateAverageRequest;

/// Event to request a native dialog for the directory or the file field.
#[derive(Event, Debug, Clone)]
pub struct PickPathRequest {
    pub target: PathTarget,
}

/// Event sent after a dialog closed.
#[derive(Event, Debug, Clone)]
pub struct PathPickedEvent {
    pub target: PathTarget,
    pub path: Option<PathBuf>, // None if the dialog was cancelled
}

/// Outcome of an action, rendered in the shared result label.
#[derive(Event, Debug, Clone)]
pub struct ActionFeedback {
    pub message: String,
    pub is_error: bool,
}

impl ActionFeedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: false }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), is_error: true }
    }
}
