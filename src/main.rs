mod agent;
mod config;
mod constants;
mod editor;
mod input;
mod map;
mod notifications;
mod paths;
pub mod theme;
mod ui;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

/// Per-frame ordering: raw input becomes commands, commands edit the draft and
/// annotation list, then the agent resolves against the updated fences.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppSet {
    Input,
    Capture,
    ApplyEdits,
    Navigate,
    Physics,
}

/// Set up file logging for debug builds
#[cfg(debug_assertions)]
fn setup_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use tracing_subscriber::prelude::*;

    let logs_dir = paths::logs_dir();
    if std::fs::create_dir_all(&logs_dir).is_err() {
        eprintln!("Failed to create logs directory {:?}", logs_dir);
        return None;
    }

    let log_file_path = logs_dir.join("fenceline.log");

    // Append session separator to existing log file
    if let Ok(mut file) = OpenOptions::new().append(true).open(&log_file_path) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let separator = "=".repeat(80);
        let _ = writeln!(
            file,
            "\n\n{}\n=== New Session Started at {} ===\n{}\n",
            separator, timestamp, separator
        );
    }

    let file_appender = tracing_appender::rolling::never(&logs_dir, "fenceline.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // No ANSI colors in the file
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_level(true);

    // Default to info for bevy, debug for our own modules
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,fenceline=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Some(guard)
}

#[cfg(not(debug_assertions))]
fn setup_logging() -> Option<()> {
    None
}

fn main() {
    // Keep the guard alive for the duration of the program
    let _log_guard = setup_logging();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Fenceline 3D Map Editor".into(),
                resolution: (DEFAULT_WINDOW_WIDTH as u32, DEFAULT_WINDOW_HEIGHT as u32).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(theme::BACKGROUND_COLOR))
        .configure_sets(
            Update,
            (
                AppSet::Input,
                AppSet::Capture,
                AppSet::ApplyEdits,
                AppSet::Navigate,
                AppSet::Physics,
            )
                .chain(),
        )
        .init_resource::<notifications::Notifications>()
        .add_systems(Update, notifications::expire_notifications)
        .add_plugins(EguiPlugin::default())
        .add_plugins(config::ConfigPlugin)
        .add_plugins(map::MapPlugin)
        .add_plugins(editor::EditorPlugin)
        .add_plugins(agent::AgentPlugin)
        .add_plugins(input::InputPlugin)
        .add_plugins(ui::UiPlugin)
        .run();
}
