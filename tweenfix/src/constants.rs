//! Constants and lazily compiled patterns used across tweenfix.

use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Name of the standalone configuration file.
pub const CONFIG_FILENAME: &str = ".tweenfix.toml";

/// Name of the npm manifest that may carry a `"tweenfix"` section.
pub const PACKAGE_JSON_FILENAME: &str = "package.json";

/// The directive inserted into an untyped transition declaration.
pub const TWEEN_DIRECTIVE: &str = "type: \"tween\"";

/// Attribute that opens a transition declaration.
pub const TRANSITION_ATTR: &str = "transition=";

/// Source file extensions scanned when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Set of folders to exclude by default.
pub fn get_default_exclude_folders() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert("node_modules");
        s.insert(".next");
        s
    })
}

/// Regex for an `animate={{ ... }}` declaration. Group 1 is the body.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_animate_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"animate=\{\{\s*([^}]+)\s*\}\}").expect("Invalid animate block regex pattern")
    })
}

/// Regex for a tracked property holding a keyframe array of three or more entries.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_keyframe_array_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"\b(?:x|y|scale|rotate|opacity)\s*:\s*\[[^\]]*,[^\]]*,[^\]]*\]")
            .expect("Invalid keyframe array regex pattern")
    })
}

/// Regex for a `<motion.*>` component block: open/close pair or self-closing tag.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_motion_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(
            r"(?s)<motion\.[^>]*>.*?</motion\.[^>]*>|<motion\.[^>]*/>|<motion\.div[^>]*(?:>[\s\S]*?</motion\.div>|\s*/>)",
        )
        .expect("Invalid motion block regex pattern")
    })
}

/// Regex for a `transition={{ ... }}` declaration. Group 1 is the body.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_transition_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"transition=\{\{\s*([^}]+)\s*\}\}").expect("Invalid transition regex pattern")
    })
}

/// Regex for an explicit interpolation mode field.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_type_field_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"\btype\s*:").expect("Invalid type field regex pattern"))
}

pub use get_animate_block_re as ANIMATE_BLOCK_RE;
pub use get_default_exclude_folders as DEFAULT_EXCLUDE_FOLDERS;
pub use get_keyframe_array_re as KEYFRAME_ARRAY_RE;
pub use get_motion_block_re as MOTION_BLOCK_RE;
pub use get_transition_re as TRANSITION_RE;
pub use get_type_field_re as TYPE_FIELD_RE;
