// src/window_icon.rs

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use image::ImageFormat as CrateImageFormat;
use std::path::Path;
use thiserror::Error;
use winit::window::Icon as WinitIcon;

pub const ICON_PATH: &str = "assets/icon.png";

#[derive(Error, Debug)]
pub enum IconError {
    #[error("failed to read icon file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to decode icon image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to build window icon: {0}")]
    Build(#[from] winit::window::BadIcon),
}

/// Decodes a PNG from disk into a winit icon.
pub fn load_window_icon(path: &Path) -> Result<WinitIcon, IconError> {
    let icon_bytes = std::fs::read(path)?;
    let image_buffer =
        image::load_from_memory_with_format(&icon_bytes, CrateImageFormat::Png)?.into_rgba8();
    let (width, height) = image_buffer.dimensions();
    Ok(WinitIcon::from_rgba(image_buffer.into_raw(), width, height)?)
}

/// Startup system. A missing or broken icon only logs a warning.
pub fn set_window_icon(
    primary_window_query: Query<Entity, With<PrimaryWindow>>,
    windows: NonSend<bevy::winit::WinitWindows>,
) {
    let Ok(primary_entity) = primary_window_query.single() else {
        warn!("Could not find single primary window to set icon.");
        return;
    };
    let Some(primary_winit_window) = windows.get_window(primary_entity) else {
        warn!("Could not get winit window for primary window entity.");
        return;
    };

    match load_window_icon(Path::new(ICON_PATH)) {
        Ok(icon) => {
            primary_winit_window.set_window_icon(Some(icon));
            info!("Window icon set from {}", ICON_PATH);
        }
        Err(e) => warn!("Window icon not set ({}): {}", ICON_PATH, e),
    }
}
