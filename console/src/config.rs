use serde::{Deserialize, Serialize};
use tictactoe_engine::ConfigError;
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::tictactoe::GameSettings;

const CONFIG_FILE_NAME: &str = "tictactoe_console.yaml";

pub const DEFAULT_THINKING_DELAY_MS: u64 = 400;
pub const MAX_THINKING_DELAY_MS: u64 = 10_000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

fn default_thinking_delay_ms() -> u64 {
    DEFAULT_THINKING_DELAY_MS
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub game: GameSettings,
    /// Pause before the engine's move is shown.
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "thinking_delay_ms must not exceed {}",
                MAX_THINKING_DELAY_MS
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
            log_prefix: None,
        }
    }
}
