// src/form_actions/mod.rs

pub mod plugin;
pub mod resources;
pub mod events;

pub mod handler;
pub mod executers;
mod executers_tests;

pub use plugin::FormActionsPlugin;
