use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::agent::NavigationParams;
use crate::constants::{
    DEFAULT_AGENT_SPEED, DEFAULT_ARRIVAL_EPSILON, DEFAULT_CLEARANCE_RADIUS, DEFAULT_SPAWN_POSITION,
};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Agent tuning stored under the `navigation` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Units per second for each held direction and for seeking
    pub speed: f32,
    /// Minimum horizontal distance the agent keeps from fences
    pub clearance_radius: f32,
    /// Smallest distance at which a seek target counts as reached
    pub arrival_epsilon: f32,
    /// Where new and reset agents appear
    pub spawn_position: [f32; 3],
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_AGENT_SPEED,
            clearance_radius: DEFAULT_CLEARANCE_RADIUS,
            arrival_epsilon: DEFAULT_ARRIVAL_EPSILON,
            spawn_position: DEFAULT_SPAWN_POSITION,
        }
    }
}

impl NavigationSettings {
    /// Resolver parameters, with nonsensical values replaced by defaults
    pub fn params(&self) -> NavigationParams {
        let defaults = NavigationParams::default();
        NavigationParams {
            speed: sanitize(self.speed, defaults.speed),
            clearance_radius: sanitize(self.clearance_radius, defaults.clearance_radius),
            arrival_epsilon: sanitize(self.arrival_epsilon, defaults.arrival_epsilon),
        }
    }

    pub fn spawn_position(&self) -> Vec3 {
        let position = Vec3::from_array(self.spawn_position);
        if position.is_finite() {
            position
        } else {
            Vec3::from_array(DEFAULT_SPAWN_POSITION)
        }
    }
}

fn sanitize(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfigData {
    #[serde(default)]
    pub navigation: NavigationSettings,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: get_config_path(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Get the path to the config file (platform-appropriate location)
fn get_config_path() -> PathBuf {
    crate::paths::config_file()
}

/// Parse config JSON; missing fields fall back to their defaults
fn parse_config(json: &str) -> Result<AppConfigData, serde_json::Error> {
    serde_json::from_str(json)
}

/// Result of loading config from disk
struct LoadConfigResult {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from disk
fn load_config(config_path: &std::path::Path) -> LoadConfigResult {
    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(config_path) {
            Ok(json) => match parse_config(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult { data, reset_reason }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    if let Err(e) = crate::paths::ensure_config_dir() {
        error!("Failed to create config directory: {}", e);
        return;
    }

    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let config_path = get_config_path();
    let result = load_config(&config_path);
    config.data = result.data;
    config.config_path = config_path;
    config.dirty = false;

    debug!("Navigation settings: {:?}", config.data.navigation);

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                save_config_system.run_if(on_message::<SaveConfigRequest>),
            );
    }
}
