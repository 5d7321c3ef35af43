//! Extraction constants.
//!
//! Defaults and fixed vocabularies shared by the tag interpreters and the record.

/// Favicon path assumed until a `<link rel="icon">` is found.
///
/// Browsers request `/favicon.ico` from the site root when a page declares no
/// icon, so the record starts from the same assumption.
pub const DEFAULT_FAVICON: &str = "/favicon.ico";

/// Prefix shared by every Open Graph property key.
pub const OG_NAMESPACE: &str = "og:";

/// `rel` values that mark a `<link>` as the page icon (compared case-insensitively).
pub const ICON_RELS: &[&str] = &["icon", "shortcut icon"];

/// `rel` value of a canonical URL link.
pub const CANONICAL_REL: &str = "canonical";

/// Plain (non-OG) `<meta name>` used as a description fallback.
pub const META_DESCRIPTION_NAME: &str = "description";

/// Reads HTML from stdin when passed as the input file.
pub const STDIN_PATH: &str = "-";
