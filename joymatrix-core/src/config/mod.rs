//! Configuration
//!
//! Board wiring and tuning parameters. Tuning is stored as postcard
//! binary data; the wiring is fixed at build time.

pub mod pins;
pub mod types;

pub use pins::*;
pub use types::*;

use crate::traits::{KeyValueStore, StorageError, StorageKey};

/// Maximum serialized config size
pub const MAX_CONFIG_SIZE: usize = 64;

/// Load and validate the stored configuration
pub fn load<S: KeyValueStore>(store: &mut S) -> Result<DeviceConfig, ConfigError> {
    let mut buffer = [0u8; MAX_CONFIG_SIZE];
    let len = store.load(StorageKey::DeviceConfig, &mut buffer)?;
    debug!("Read {} bytes of config", len);

    let config: DeviceConfig =
        postcard::from_bytes(&buffer[..len]).map_err(|_| ConfigError::Decode)?;
    config.validate()?;
    Ok(config)
}

/// Validate and store a configuration
pub fn store<S: KeyValueStore>(store: &mut S, config: &DeviceConfig) -> Result<(), ConfigError> {
    config.validate()?;
    let mut buffer = [0u8; MAX_CONFIG_SIZE];
    let bytes = postcard::to_slice(config, &mut buffer).map_err(|_| ConfigError::Encode)?;
    store.save(StorageKey::DeviceConfig, bytes)?;
    Ok(())
}

/// Load the stored configuration, falling back to defaults
pub fn load_or_default<S: KeyValueStore>(store: &mut S) -> DeviceConfig {
    match load(store) {
        Ok(config) => {
            info!("Loaded stored configuration");
            config
        }
        Err(ConfigError::Storage(StorageError::NotFound)) => {
            debug!("No stored configuration, using defaults");
            DeviceConfig::default()
        }
        Err(e) => {
            warn!("Stored configuration rejected: {:?}, using defaults", e);
            DeviceConfig::default()
        }
    }
}
