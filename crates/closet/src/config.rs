//! Admission configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config schema version this crate reads and writes.
pub const CLOSET_CONFIG_VERSION: u32 = 1;

/// Controls how raw records are sanitized and which ones are rejected
/// during admission.
///
/// # Examples
///
/// ```
/// use closet::ClosetConfig;
///
/// let cfg = ClosetConfig::default();
/// assert_eq!(cfg.version, 1);
/// assert!(cfg.trim_names);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosetConfig {
    /// Config schema version; must currently be [`CLOSET_CONFIG_VERSION`].
    pub version: u32,
    /// Trim surrounding whitespace from item names. Names are matched
    /// literally downstream, so stray padding would otherwise become part
    /// of the match key.
    pub trim_names: bool,
    /// Drop Unicode control characters from ids and names.
    pub strip_control_chars: bool,
    /// Upper bound on the serialized byte size of a record's attribute
    /// blob. `None` disables the check.
    pub max_attribute_bytes: Option<usize>,
}

impl Default for ClosetConfig {
    fn default() -> Self {
        Self {
            version: CLOSET_CONFIG_VERSION,
            trim_names: true,
            strip_control_chars: true,
            max_attribute_bytes: None,
        }
    }
}

/// Rejections produced by [`ClosetConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClosetConfigError {
    /// The config schema version is not one this crate understands.
    #[error("unsupported closet config version: {version}")]
    UnsupportedVersion {
        /// The version the config carried.
        version: u32,
    },
}

impl ClosetConfig {
    /// Check internal consistency of this configuration.
    ///
    /// Cheap, in-memory only. [`Closet::from_records`](crate::Closet::from_records)
    /// runs it on every call, but callers that load config from files should
    /// also run it once at start-up so misconfigurations surface early.
    pub fn validate(&self) -> Result<(), ClosetConfigError> {
        if self.version != CLOSET_CONFIG_VERSION {
            return Err(ClosetConfigError::UnsupportedVersion {
                version: self.version,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClosetConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg: ClosetConfig = serde_json::from_str(r#"{"trim_names": false}"#)
            .expect("partial config should deserialize");
        assert_eq!(cfg.version, CLOSET_CONFIG_VERSION);
        assert!(!cfg.trim_names);
        assert!(cfg.strip_control_chars);
        assert_eq!(cfg.max_attribute_bytes, None);
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let cfg = ClosetConfig {
            version: 0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ClosetConfigError::UnsupportedVersion { version: 0 })
        );

        let cfg = ClosetConfig {
            version: 2,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
