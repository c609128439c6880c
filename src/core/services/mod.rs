pub mod tauri_commands;

pub use tauri_commands::*;
