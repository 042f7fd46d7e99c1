//! `[lint]` section configuration.

use super::defaults;
use crate::lint::{LintRule, Validator};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[lint]` section in docmacro.toml - what happens to rendered output.
///
/// # Example
/// ```toml
/// [lint]
/// strict = false                  # log issues but keep going
/// disabled = ["inline-style"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Treat any lint issue as a failure.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub strict: bool,

    /// Rules to skip.
    #[serde(default)]
    pub disabled: Vec<LintRule>,
}

impl LintConfig {
    pub fn validator(&self) -> Validator {
        Validator::with_disabled(self.disabled.iter().copied())
    }
}
