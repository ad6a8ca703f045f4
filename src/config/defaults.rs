//! Default values for configuration fields.
//!
//! Used by `resolve` for absent fields and by `educe` for `Default` impls,
//! so both paths agree on the same values.

// ============================================================================
// Site Defaults
// ============================================================================

pub mod site {
    pub fn base_path() -> String {
        "/".into()
    }

    pub fn description() -> String {
        String::new()
    }

    pub fn lang() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [markdown] Section Defaults
// ============================================================================

pub mod markdown {
    pub fn toc_levels() -> Vec<u8> {
        vec![2, 3, 4, 5, 6]
    }
}

// ============================================================================
// [theme] Section Defaults
// ============================================================================

pub mod theme {
    pub fn docs_dir() -> String {
        String::new()
    }

    pub fn docs_branch() -> String {
        "master".into()
    }

    pub fn sidebar_depth() -> u32 {
        1
    }
}
