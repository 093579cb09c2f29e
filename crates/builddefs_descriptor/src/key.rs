//! The closed key schema for build-configuration descriptors.
//!
//! Every descriptor carries exactly these keys - no more, no fewer. Lookups
//! and sources naming anything outside this set are failures, not fallbacks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DescriptorError;

/// A key in the build-configuration schema.
///
/// Variant order is the canonical serialization order: provenance first,
/// then the optional-driver placeholder block, then programs, then the
/// installation layout. `Ord` follows declaration order, so ordered maps
/// keyed by `ConfigKey` iterate in schema order for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKey {
    /// The literal configure invocation that produced this descriptor
    ConfigureCommand,

    /// ODBC driver compile flags (empty when the driver is not compiled in)
    OdbcCflags,
    /// ODBC driver link flags
    OdbcLflags,
    /// ODBC driver libraries
    OdbcLibs,
    /// ODBC driver flavor name
    OdbcType,
    /// Oracle driver installation directory
    Oci8Dir,
    /// Oracle client version the driver was built against
    Oci8OracleVersion,

    /// Outbound-mail program path
    SendmailPath,
    /// Bundled package-installer directory
    PackageInstallDir,
    /// Runtime include search path
    IncludePath,
    /// Loadable-extension directory
    ExtensionDir,

    /// Installation prefix
    InstallPrefix,
    /// Binary directory
    BinDir,
    /// Admin-binary directory
    SbinDir,
    /// Manual-page directory
    ManDir,
    /// Shared-library directory
    LibDir,
    /// Shared-data directory
    DataDir,
    /// System-config directory
    SysconfDir,
    /// Variable-state directory
    LocalstateDir,
    /// Runtime config-file path
    ConfigFilePath,
    /// Config-file scan directory
    ConfigFileScanDir,
    /// Shared-library filename suffix (e.g. "so")
    ShlibSuffix,
    /// Shared-library filename prefix (often empty)
    ShlibExtPrefix,
}

impl ConfigKey {
    /// All schema keys, in canonical serialization order.
    pub const ALL: &'static [ConfigKey] = &[
        ConfigKey::ConfigureCommand,
        ConfigKey::OdbcCflags,
        ConfigKey::OdbcLflags,
        ConfigKey::OdbcLibs,
        ConfigKey::OdbcType,
        ConfigKey::Oci8Dir,
        ConfigKey::Oci8OracleVersion,
        ConfigKey::SendmailPath,
        ConfigKey::PackageInstallDir,
        ConfigKey::IncludePath,
        ConfigKey::ExtensionDir,
        ConfigKey::InstallPrefix,
        ConfigKey::BinDir,
        ConfigKey::SbinDir,
        ConfigKey::ManDir,
        ConfigKey::LibDir,
        ConfigKey::DataDir,
        ConfigKey::SysconfDir,
        ConfigKey::LocalstateDir,
        ConfigKey::ConfigFilePath,
        ConfigKey::ConfigFileScanDir,
        ConfigKey::ShlibSuffix,
        ConfigKey::ShlibExtPrefix,
    ];

    /// Canonical text-format name (lower snake case).
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::ConfigureCommand => "configure_command",
            ConfigKey::OdbcCflags => "odbc_cflags",
            ConfigKey::OdbcLflags => "odbc_lflags",
            ConfigKey::OdbcLibs => "odbc_libs",
            ConfigKey::OdbcType => "odbc_type",
            ConfigKey::Oci8Dir => "oci8_dir",
            ConfigKey::Oci8OracleVersion => "oci8_oracle_version",
            ConfigKey::SendmailPath => "sendmail_path",
            ConfigKey::PackageInstallDir => "package_install_dir",
            ConfigKey::IncludePath => "include_path",
            ConfigKey::ExtensionDir => "extension_dir",
            ConfigKey::InstallPrefix => "install_prefix",
            ConfigKey::BinDir => "bin_dir",
            ConfigKey::SbinDir => "sbin_dir",
            ConfigKey::ManDir => "man_dir",
            ConfigKey::LibDir => "lib_dir",
            ConfigKey::DataDir => "data_dir",
            ConfigKey::SysconfDir => "sysconf_dir",
            ConfigKey::LocalstateDir => "localstate_dir",
            ConfigKey::ConfigFilePath => "config_file_path",
            ConfigKey::ConfigFileScanDir => "config_file_scan_dir",
            ConfigKey::ShlibSuffix => "shlib_suffix",
            ConfigKey::ShlibExtPrefix => "shlib_ext_prefix",
        }
    }

    /// Macro name used by the generated-header rendering (upper snake case).
    pub fn macro_name(&self) -> String {
        self.name().to_ascii_uppercase()
    }

    /// Resolve a header macro name back to its schema key.
    pub fn from_macro(name: &str) -> Result<ConfigKey, DescriptorError> {
        name.to_ascii_lowercase()
            .parse()
            .map_err(|_| DescriptorError::UnknownKey {
                name: name.to_string(),
            })
    }

    /// Whether this key holds a filesystem path and gets the embedded-NUL
    /// syntactic check at load time.
    pub fn is_path(&self) -> bool {
        matches!(
            self,
            ConfigKey::SendmailPath
                | ConfigKey::PackageInstallDir
                | ConfigKey::ExtensionDir
                | ConfigKey::Oci8Dir
                | ConfigKey::InstallPrefix
                | ConfigKey::BinDir
                | ConfigKey::SbinDir
                | ConfigKey::ManDir
                | ConfigKey::LibDir
                | ConfigKey::DataDir
                | ConfigKey::SysconfDir
                | ConfigKey::LocalstateDir
                | ConfigKey::ConfigFilePath
                | ConfigKey::ConfigFileScanDir
        )
    }

    /// Whether this key belongs to the optional-driver placeholder block
    /// (always present, empty string when the feature is disabled).
    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            ConfigKey::OdbcCflags
                | ConfigKey::OdbcLflags
                | ConfigKey::OdbcLibs
                | ConfigKey::OdbcType
                | ConfigKey::Oci8Dir
                | ConfigKey::Oci8OracleVersion
        )
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or_else(|| DescriptorError::UnknownKey {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_name_exactly_once() {
        let mut seen = std::collections::HashSet::new();
        for key in ConfigKey::ALL {
            assert!(seen.insert(key.name()), "duplicate name: {}", key.name());
        }
        assert_eq!(seen.len(), 23);
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for key in ConfigKey::ALL {
            let parsed: ConfigKey = key.name().parse().unwrap();
            assert_eq!(parsed, *key);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "no_such_key".parse::<ConfigKey>().unwrap_err();
        assert!(matches!(err, DescriptorError::UnknownKey { name } if name == "no_such_key"));
    }

    #[test]
    fn test_macro_name_round_trips() {
        for key in ConfigKey::ALL {
            assert_eq!(ConfigKey::from_macro(&key.macro_name()).unwrap(), *key);
        }
    }

    #[test]
    fn test_schema_order_matches_ord() {
        let mut sorted = ConfigKey::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted.as_slice(), ConfigKey::ALL);
    }

    #[test]
    fn test_placeholder_block_is_the_driver_fields() {
        let placeholders: Vec<_> = ConfigKey::ALL
            .iter()
            .filter(|k| k.is_placeholder())
            .collect();
        assert_eq!(placeholders.len(), 6);
        assert!(placeholders.contains(&&ConfigKey::OdbcCflags));
        assert!(placeholders.contains(&&ConfigKey::Oci8OracleVersion));
        assert!(!ConfigKey::ConfigureCommand.is_placeholder());
    }
}
