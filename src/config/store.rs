//! `[store]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[store]` section in docmacro.toml - where documents come from.
///
/// # Example
/// ```toml
/// [store]
/// fixture = "fixtures/documents.json"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// JSON document fixture, relative to the config file.
    #[serde(default = "defaults::store::fixture")]
    #[educe(Default = defaults::store::fixture())]
    pub fixture: PathBuf,
}
