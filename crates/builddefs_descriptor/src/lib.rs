//! Build-Configuration Descriptors
//!
//! # Philosophy: the snapshot is a contract
//!
//! When a language runtime is compiled from source, the configure step
//! decides a filesystem layout and a set of optional features. This crate
//! models that decision record as a **descriptor**: a closed, immutable
//! snapshot produced once and read everywhere.
//!
//! The schema is closed. A descriptor carries exactly the declared keys.
//! No ad hoc extras. No silent defaults:
//!
//! - A source missing a required key FAILS to load. Nothing is substituted.
//! - A lookup outside the schema FAILS. This is not an open map.
//! - An empty value is meaningful: it says "this optional feature was not
//!   compiled in", and it is distinct from the key being absent.
//!
//! Re-running configuration produces a new descriptor; nothing is ever
//! mutated or merged in place.
//!
//! # Modules
//!
//! - [`key`]: the closed key schema ([`ConfigKey`])
//! - [`descriptor`]: the immutable record ([`ConfigDescriptor`]), with
//!   parsers and emitters for the flat text format and the generated-header
//!   form
//! - [`error`]: load/lookup failures ([`DescriptorError`])
//!
//! # Example
//!
//! ```
//! use builddefs_descriptor::{ConfigDescriptor, ConfigKey};
//!
//! let text = ConfigKey::ALL
//!     .iter()
//!     .map(|key| match key {
//!         ConfigKey::InstallPrefix => "install_prefix = \"/opt/app\"\n".to_string(),
//!         key => format!("{} = \"\"\n", key.name()),
//!     })
//!     .collect::<String>();
//!
//! let descriptor = ConfigDescriptor::load(&text).unwrap();
//! assert_eq!(descriptor.get(ConfigKey::InstallPrefix), "/opt/app");
//! // Present but empty: the driver block placeholder loads as "".
//! assert_eq!(descriptor.get(ConfigKey::OdbcCflags), "");
//! ```

pub mod descriptor;
pub mod error;
mod format;
pub mod key;

pub use descriptor::ConfigDescriptor;
pub use error::{DescriptorError, Result};
pub use key::ConfigKey;
