//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        "dist/".into()
    }

    pub fn extension() -> String {
        "txt".into()
    }
}

// ============================================================================
// [page] Section Defaults
// ============================================================================

pub mod page {
    pub fn stylesheet() -> String {
        "https://cdn.simplecss.org/simple.min.css".into()
    }
}
