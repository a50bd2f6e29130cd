//! Soundswitch Desktop Application
//!
//! A Tauri-based desktop application for inspecting and switching the
//! system's default audio output device.
//!
//! The registry facade itself is stateless: every command is a single
//! synchronous query or mutation against OS audio state, so the app
//! manages no state of its own.
//!
//! # Platform Support
//!
//! - **macOS**: full support via CoreAudio
//! - **Windows**: coming soon
//! - **Linux**: coming soon

mod commands;

use commands::{
    get_current_audio_device, list_audio_devices, set_default_audio_device,
    set_default_audio_device_by_name,
};

/// Application entry point
///
/// Initializes logging via `tracing_subscriber` and registers the device
/// registry command handlers.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    #[cfg(debug_assertions)]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_file(true)
            .with_line_number(true)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .compact()
            .init();
    }

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            list_audio_devices,
            get_current_audio_device,
            set_default_audio_device,
            set_default_audio_device_by_name,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
