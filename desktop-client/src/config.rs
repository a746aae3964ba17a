use std::time::Duration;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use crate::tictactoe::EndSequenceDelays;

pub const CONFIG_FILE: &str = "desk_apps_config.yaml";

const MIN_WINDOW_SIDE: u32 = 200;
const MAX_WINDOW_SIDE: u32 = 4000;
const MAX_DELAY_MS: u32 = 10_000;

pub fn get_config_manager(path: &std::path::Path) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub tictactoe: TicTacToeConfig,
    pub editor: EditorConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.editor.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub end_line_delay_ms: u32,
    pub end_screen_delay_ms: u32,
}

impl TicTacToeConfig {
    pub fn end_sequence_delays(&self) -> EndSequenceDelays {
        EndSequenceDelays {
            end_line: Duration::from_millis(self.end_line_delay_ms as u64),
            end_screen: Duration::from_millis(self.end_screen_delay_ms as u64),
        }
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        validate_window("tictactoe", self.window_width, self.window_height)?;
        if self.end_line_delay_ms > MAX_DELAY_MS {
            return Err(format!("end_line_delay_ms must not exceed {}", MAX_DELAY_MS));
        }
        if self.end_screen_delay_ms > MAX_DELAY_MS {
            return Err(format!("end_screen_delay_ms must not exceed {}", MAX_DELAY_MS));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            window_width: 450,
            window_height: 550,
            end_line_delay_ms: 1000,
            end_screen_delay_ms: 1000,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct EditorConfig {
    pub window_width: u32,
    pub window_height: u32,
}

impl Validate for EditorConfig {
    fn validate(&self) -> Result<(), String> {
        validate_window("editor", self.window_width, self.window_height)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 450,
        }
    }
}

fn validate_window(section: &str, width: u32, height: u32) -> Result<(), String> {
    let range = MIN_WINDOW_SIDE..=MAX_WINDOW_SIDE;
    if !range.contains(&width) || !range.contains(&height) {
        return Err(format!(
            "{} window size must be between {} and {} on each side",
            section, MIN_WINDOW_SIDE, MAX_WINDOW_SIDE
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_desk_apps_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            tictactoe: TicTacToeConfig { end_line_delay_ms: 250, ..TicTacToeConfig::default() },
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(&file_path);
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        std::fs::remove_file(&file_path).unwrap();
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(std::path::Path::new("this_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            tictactoe:
              window_width: 450
              window_height: 550
              end_line_delay_ms: 60000
              end_screen_delay_ms: 1000
            editor:
              window_width: 800
              window_height: 450
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider.set_config_content(invalid_config_content).unwrap();

        let manager: ConfigManager<_, Config, _> = ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        std::fs::remove_file(&file_path).unwrap();
    }

    #[test]
    fn test_missing_section_cant_be_read() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Config, _> = serializer.deserialize("tictactoe:\n  window_width: 450\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_delays_convert_to_durations() {
        let delays = TicTacToeConfig::default().end_sequence_delays();
        assert_eq!(delays.end_line, Duration::from_millis(1000));
        assert_eq!(delays.end_screen, Duration::from_millis(1000));
    }
}
