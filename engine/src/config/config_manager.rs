use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};
use crate::error::ConfigError;

/// Anything the manager can store: a validated, serializable value with a
/// fallback default.
pub trait StoredConfig: Clone + DeserializeOwned + Serialize + Validate + Default {}

impl<T> StoredConfig for T where T: Clone + DeserializeOwned + Serialize + Validate + Default {}

/// Loads a config once, validates it and caches it. With no stored content
/// the default config is returned and nothing is cached.
pub struct ConfigManager<P, C, S = YamlConfigSerializer>
where
    P: ConfigContentProvider,
    C: StoredConfig,
    S: ConfigSerializer<C>,
{
    provider: P,
    serializer: S,
    cached: Mutex<Option<C>>,
}

impl<C: StoredConfig> ConfigManager<FileContentConfigProvider, C, YamlConfigSerializer> {
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<P, C, S> ConfigManager<P, C, S>
where
    P: ConfigContentProvider,
    C: StoredConfig,
    S: ConfigSerializer<C>,
{
    pub fn new(provider: P, serializer: S) -> Self {
        Self {
            provider,
            serializer,
            cached: Mutex::new(None),
        }
    }

    fn cache(&self) -> MutexGuard<'_, Option<C>> {
        self.cached.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get_config(&self) -> Result<C, ConfigError> {
        let mut cache = self.cache();
        if let Some(config) = cache.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.provider.get_config_content()? else {
            return Ok(C::default());
        };
        let config = self.serializer.deserialize(&content)?;
        config.validate()?;
        *cache = Some(config.clone());
        Ok(config)
    }

    /// Validates, writes through the provider, then replaces the cache.
    pub fn set_config(&self, config: &C) -> Result<(), ConfigError> {
        config.validate()?;
        let content = self.serializer.serialize(config)?;
        self.provider.set_config_content(&content)?;
        *self.cache() = Some(config.clone());
        Ok(())
    }
}
