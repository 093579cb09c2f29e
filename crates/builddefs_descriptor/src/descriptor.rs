//! The immutable build-configuration record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{DescriptorError, Result};
use crate::format;
use crate::key::ConfigKey;

/// One build's configuration snapshot.
///
/// Holds exactly the keys of the closed schema, each exactly once. Empty
/// string is a meaningful value (feature disabled, path not applicable) and
/// is distinct from an absent key, which cannot occur in a constructed
/// descriptor.
///
/// There is no mutation API: a new configuration run produces a new
/// descriptor, never an in-place edit. The struct owns plain `String`s and
/// has no interior mutability, so shared references may be read from any
/// number of threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<ConfigKey, String>")]
#[serde(into = "BTreeMap<ConfigKey, String>")]
pub struct ConfigDescriptor {
    values: BTreeMap<ConfigKey, String>,
}

impl ConfigDescriptor {
    /// Parse the flat `name = "value"` format.
    ///
    /// All-or-nothing: any missing key, duplicate, unknown name, or
    /// malformed line fails the whole load.
    pub fn load(text: &str) -> Result<Self> {
        let entries = format::parse_flat(text)?;
        let descriptor = Self::assemble(entries)?;
        debug!(keys = ConfigKey::ALL.len(), "loaded descriptor");
        Ok(descriptor)
    }

    /// Parse the generated-header form (`#define MACRO "value"` lines).
    pub fn load_header(text: &str) -> Result<Self> {
        let entries = format::parse_header(text)?;
        let descriptor = Self::assemble(entries)?;
        debug!(keys = ConfigKey::ALL.len(), "loaded descriptor from header");
        Ok(descriptor)
    }

    /// Read and parse a flat-format descriptor file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::load(&text)
    }

    /// Build a descriptor from `(key, value)` pairs.
    ///
    /// This is the seam the external configuration process uses; the same
    /// exactly-once validation applies. Duplicate reports use the 1-based
    /// position of the offending entry.
    pub fn from_entries(entries: impl IntoIterator<Item = (ConfigKey, String)>) -> Result<Self> {
        Self::assemble(
            entries
                .into_iter()
                .enumerate()
                .map(|(idx, (key, value))| (key, value, idx + 1)),
        )
    }

    fn assemble(entries: impl IntoIterator<Item = (ConfigKey, String, usize)>) -> Result<Self> {
        let mut values = BTreeMap::new();
        for (key, value, line) in entries {
            check_value(key, &value)?;
            if values.insert(key, value).is_some() {
                return Err(DescriptorError::DuplicateKey { key, line });
            }
        }
        for key in ConfigKey::ALL {
            if !values.contains_key(key) {
                return Err(DescriptorError::MissingKey { key: *key });
            }
        }
        Ok(Self { values })
    }

    /// Value for a schema key. Infallible: every constructed descriptor
    /// holds every schema key.
    pub fn get(&self, key: ConfigKey) -> &str {
        self.values
            .get(&key)
            .map(String::as_str)
            .expect("descriptor invariant: every schema key is present")
    }

    /// Value for a key given by its text-format name.
    ///
    /// Names outside the closed schema fail with
    /// [`DescriptorError::UnknownKey`] - no silent default.
    pub fn get_named(&self, name: &str) -> Result<&str> {
        let key: ConfigKey = name.parse()?;
        Ok(self.get(key))
    }

    /// Schema-ordered read-only view of all entries.
    pub fn entries(&self) -> impl Iterator<Item = (ConfigKey, &str)> + '_ {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Emit the flat format: schema-ordered, byte-deterministic, lossless.
    ///
    /// `load(serialize(d)) == d` for every descriptor.
    pub fn serialize(&self) -> String {
        format::emit_flat(self.entries())
    }

    /// Emit the generated-header form for compile-time consumers.
    ///
    /// `load_header(render_header(d)) == d` for every descriptor.
    pub fn render_header(&self) -> String {
        format::emit_header(self.entries())
    }
}

fn check_value(key: ConfigKey, value: &str) -> Result<()> {
    if key.is_path() && value.contains('\0') {
        return Err(DescriptorError::InvalidValue {
            key,
            reason: "embedded NUL byte in path".to_string(),
        });
    }
    Ok(())
}

impl TryFrom<BTreeMap<ConfigKey, String>> for ConfigDescriptor {
    type Error = DescriptorError;

    fn try_from(values: BTreeMap<ConfigKey, String>) -> Result<Self> {
        for (key, value) in &values {
            check_value(*key, value)?;
        }
        for key in ConfigKey::ALL {
            if !values.contains_key(key) {
                return Err(DescriptorError::MissingKey { key: *key });
            }
        }
        Ok(Self { values })
    }
}

impl From<ConfigDescriptor> for BTreeMap<ConfigKey, String> {
    fn from(descriptor: ConfigDescriptor) -> Self {
        descriptor.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_entries() -> Vec<(ConfigKey, String)> {
        ConfigKey::ALL
            .iter()
            .map(|key| {
                let value = match key {
                    ConfigKey::ConfigureCommand => {
                        " './configure' '--prefix=/opt/app' '--enable-mail'".to_string()
                    }
                    ConfigKey::SendmailPath => "/usr/sbin/sendmail".to_string(),
                    ConfigKey::IncludePath => ".:".to_string(),
                    ConfigKey::ShlibSuffix => "so".to_string(),
                    ConfigKey::InstallPrefix => "/opt/app".to_string(),
                    ConfigKey::BinDir => "/opt/app/bin".to_string(),
                    key if key.is_placeholder() => String::new(),
                    key if key.is_path() => format!("/opt/app/{}", key.name()),
                    _ => String::new(),
                };
                (*key, value)
            })
            .collect()
    }

    #[test]
    fn test_from_entries_builds_complete_descriptor() {
        let descriptor = ConfigDescriptor::from_entries(full_entries()).unwrap();
        assert_eq!(descriptor.get(ConfigKey::InstallPrefix), "/opt/app");
        assert_eq!(descriptor.get(ConfigKey::OdbcCflags), "");
        assert_eq!(descriptor.entries().count(), ConfigKey::ALL.len());
    }

    #[test]
    fn test_from_entries_rejects_missing_key() {
        let mut entries = full_entries();
        entries.retain(|(key, _)| *key != ConfigKey::ExtensionDir);
        let err = ConfigDescriptor::from_entries(entries).unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::MissingKey {
                key: ConfigKey::ExtensionDir
            }
        ));
    }

    #[test]
    fn test_from_entries_rejects_duplicate_key() {
        let mut entries = full_entries();
        entries.push((ConfigKey::BinDir, "/elsewhere/bin".to_string()));
        let err = ConfigDescriptor::from_entries(entries).unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::DuplicateKey {
                key: ConfigKey::BinDir,
                ..
            }
        ));
    }

    #[test]
    fn test_nul_byte_in_path_is_rejected() {
        let mut entries = full_entries();
        for entry in &mut entries {
            if entry.0 == ConfigKey::LibDir {
                entry.1 = "/opt/app/\0lib".to_string();
            }
        }
        let err = ConfigDescriptor::from_entries(entries).unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::InvalidValue {
                key: ConfigKey::LibDir,
                ..
            }
        ));
    }

    #[test]
    fn test_get_named_rejects_out_of_schema_names() {
        let descriptor = ConfigDescriptor::from_entries(full_entries()).unwrap();
        assert_eq!(descriptor.get_named("bin_dir").unwrap(), "/opt/app/bin");
        let err = descriptor.get_named("prefix").unwrap_err();
        assert!(matches!(err, DescriptorError::UnknownKey { name } if name == "prefix"));
    }

    #[test]
    fn test_json_round_trip_preserves_every_field() {
        let descriptor = ConfigDescriptor::from_entries(full_entries()).unwrap();
        let json = serde_json::to_string(&descriptor).unwrap();
        let back: ConfigDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, descriptor);
    }

    #[test]
    fn test_json_missing_key_is_rejected() {
        let descriptor = ConfigDescriptor::from_entries(full_entries()).unwrap();
        let mut map: BTreeMap<ConfigKey, String> = descriptor.into();
        map.remove(&ConfigKey::ShlibSuffix);
        let json = serde_json::to_string(&map).unwrap();
        let err = serde_json::from_str::<ConfigDescriptor>(&json).unwrap_err();
        assert!(err.to_string().contains("shlib_suffix"));
    }
}
