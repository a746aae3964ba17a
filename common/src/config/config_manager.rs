use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config of type `TConfig`.
///
/// A missing file yields `TConfig::default()`; it is not written back until
/// [`ConfigManager::set_config`] is called.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer::new())
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(config_content_provider: TConfigContentProvider, config_serializer: TConfigSerializer) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(ConfigError::Invalid)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
        reads: RefCell<usize>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            *self.reads.borrow_mut() += 1;
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Limits {
        max: u32,
    }

    impl Validate for Limits {
        fn validate(&self) -> Result<(), String> {
            if self.max > 10 {
                return Err("max must not exceed 10".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager: ConfigManager<_, Limits> = ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), Limits::default());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let provider = MemoryProvider::default();
        *provider.content.borrow_mut() = Some("max: 3\n".to_string());
        let manager: ConfigManager<_, Limits> = ConfigManager::new(provider, YamlConfigSerializer::new());

        assert_eq!(manager.get_config().unwrap(), Limits { max: 3 });
        assert_eq!(manager.get_config().unwrap(), Limits { max: 3 });
        assert_eq!(*manager.config_content_provider.reads.borrow(), 1);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let provider = MemoryProvider::default();
        *provider.content.borrow_mut() = Some("max: 30\n".to_string());
        let manager: ConfigManager<_, Limits> = ConfigManager::new(provider, YamlConfigSerializer::new());

        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_set_config_refuses_invalid_values() {
        let manager: ConfigManager<_, Limits> = ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer::new());
        assert!(manager.set_config(&Limits { max: 11 }).is_err());
        assert!(manager.config_content_provider.content.borrow().is_none());

        manager.set_config(&Limits { max: 5 }).unwrap();
        assert_eq!(manager.get_config().unwrap(), Limits { max: 5 });
    }

    #[test]
    fn test_unparsable_content_is_a_parse_error() {
        let provider = MemoryProvider::default();
        *provider.content.borrow_mut() = Some("max: [not a number".to_string());
        let manager: ConfigManager<_, Limits> = ConfigManager::new(provider, YamlConfigSerializer::new());

        assert!(matches!(manager.get_config(), Err(ConfigError::Parse(_))));
    }
}
