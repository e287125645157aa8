//! Dialect selection
//!
//! SCSS is a superset of the grammar Less shares with CSS, so when no
//! explicit parser is requested the raw source is sniffed for SCSS-only
//! shapes before a grammar is picked.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use strum_macros::{Display, EnumString};

/// CSS-family syntaxes sharing the generic tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Css,
    Scss,
    Less,
}

impl Dialect {
    /// Detect dialect from file path extension
    pub fn from_path(path: &str) -> Option<Dialect> {
        let ext = path.rsplit('.').next().unwrap_or("");
        match ext.to_lowercase().as_str() {
            "css" | "pcss" | "postcss" => Some(Dialect::Css),
            "scss" => Some(Dialect::Scss),
            "less" => Some(Dialect::Less),
            _ => None,
        }
    }
}

/// Property assignment or `#` directly before a block, or a
/// multi-target / `url()` import
static POSSIBLY_SCSS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z0-9_]\s*: [^}:]+|#)\{|@import[^\n]+(url|,)").unwrap()
});

/// Decide whether source should be parsed with the SCSS grammar
///
/// An explicit `Scss` or `Less` hint wins; otherwise the raw text decides.
pub fn is_scss(hint: Option<Dialect>, text: &str) -> bool {
    match hint {
        Some(Dialect::Scss) => true,
        Some(Dialect::Less) => false,
        _ => POSSIBLY_SCSS.is_match(text),
    }
}

/// Pick the grammar to parse `text` with
pub fn resolve_dialect(hint: Option<Dialect>, text: &str) -> Dialect {
    let dialect = match hint {
        Some(explicit @ (Dialect::Scss | Dialect::Less)) => explicit,
        _ if is_scss(hint, text) => Dialect::Scss,
        _ => hint.unwrap_or(Dialect::Css),
    };
    tracing::debug!(?hint, %dialect, "resolved dialect");
    dialect
}
