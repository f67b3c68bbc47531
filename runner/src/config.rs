use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snake_common::SnakeSettings;
use snake_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

const CONFIG_FILE_NAME: &str = "snake_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, RunnerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    pub snake: SnakeSettings,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_runner_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = RunnerConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: RunnerConfig = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = RunnerConfig::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized_string = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized_string).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: RunnerConfig = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_manager_round_trip_with_seed() {
        let config = RunnerConfig {
            seed: Some(1234),
            ..RunnerConfig::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh = get_config_manager(Some(file_path.clone()));
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_seed_is_optional_in_file() {
        let serializer = YamlConfigSerializer::new();
        let content = "snake:\n  field_width: 20\n  field_height: 20\n  tick_interval_ms: 150\n  \
                       score_per_food: 10\n  start_x: 10\n  start_y: 10\n  \
                       start_direction: Right\n";
        let config: RunnerConfig = serializer.deserialize(content).unwrap();
        assert_eq!(config, RunnerConfig::default());
    }
}
