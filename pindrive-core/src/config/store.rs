//! Configuration persistence
//!
//! Encodes configuration as compact postcard binary for flash or EEPROM
//! storage. Decoded configuration is validated before it is handed back,
//! so a corrupted or hand-edited blob never reaches a driver.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{ConfigError, Validate};

/// Serialize a configuration into `buf`
///
/// Returns the used prefix of `buf`.
pub fn encode<'a, T: Serialize>(config: &T, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(config, buf).map_err(|_| ConfigError::Serialize)
}

/// Deserialize and validate a configuration
pub fn decode<T: DeserializeOwned + Validate>(bytes: &[u8]) -> Result<T, ConfigError> {
    let config: T = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
    config.validate()?;
    Ok(config)
}
