use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    /// Loads and validates once, then serves the cached value. Missing content yields defaults.
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config_data_result = self.config_content_provider.get_config_content()?;
        if let Some(config_data) = config_data_result {
            let config = self.config_serializer.deserialize(&config_data)?;

            config.validate().map_err(ConfigError::Validation)?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;
    use crate::games::snake::{Direction, SnakeSettings};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_settings_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let manager: ConfigManager<_, SnakeSettings> =
            ConfigManager::from_yaml_file(get_temp_file_path());
        let config = manager.get_config().unwrap();
        assert_eq!(config, SnakeSettings::default());
    }

    #[test]
    fn test_set_then_get_through_file() {
        let file_path = get_temp_file_path();
        let settings = SnakeSettings {
            field_width: 30,
            tick_interval_ms: 100,
            start_direction: Direction::Up,
            ..SnakeSettings::default()
        };

        let manager = ConfigManager::from_yaml_file(file_path.clone());
        manager.set_config(&settings).unwrap();

        let fresh: ConfigManager<_, SnakeSettings> =
            ConfigManager::from_yaml_file(file_path.clone());
        assert_eq!(fresh.get_config().unwrap(), settings);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let provider = InMemoryConfigProvider::with_content(
            "field_width: 2\nfield_height: 20\ntick_interval_ms: 150\nscore_per_food: 10\n\
             start_x: 1\nstart_y: 1\nstart_direction: Right\n",
        );
        let manager: ConfigManager<_, SnakeSettings> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let provider = InMemoryConfigProvider::with_content("field_width: [not a number");
        let manager: ConfigManager<_, SnakeSettings> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_missing_optional_field_uses_default() {
        let provider = InMemoryConfigProvider::with_content(
            "field_width: 20\nfield_height: 20\ntick_interval_ms: 150\nscore_per_food: 10\n\
             start_x: 10\nstart_y: 10\nstart_direction: Right\n",
        );
        let manager: ConfigManager<_, SnakeSettings> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), SnakeSettings::default());
    }

    #[test]
    fn test_set_config_refuses_invalid() {
        let manager: ConfigManager<_, SnakeSettings> =
            ConfigManager::new(InMemoryConfigProvider::default(), YamlConfigSerializer::new());
        let invalid = SnakeSettings {
            score_per_food: 0,
            ..SnakeSettings::default()
        };
        assert!(manager.set_config(&invalid).is_err());
        assert_eq!(manager.get_config().unwrap(), SnakeSettings::default());
    }
}
