//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [store] Section Defaults
// ============================================================================

pub mod store {
    use std::path::PathBuf;

    pub fn fixture() -> PathBuf {
        "fixtures/documents.json".into()
    }
}

// ============================================================================
// [locale] Section Defaults
// ============================================================================

pub mod locale {
    use std::path::PathBuf;

    pub fn default() -> String {
        "en-US".into()
    }

    pub fn dir() -> PathBuf {
        "locales".into()
    }
}
