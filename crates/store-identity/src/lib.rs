//! Store display name and initials normalization.
//!
//! Every function here is total: blank or missing names fall back to the
//! brand defaults, so callers never have to render an empty label.

use serde::{Deserialize, Serialize};

/// Name shown when a store has no usable display name.
pub const DEFAULT_STORE_NAME: &str = "Parada do Lanche";

/// Initials shown when no word survives normalization.
pub const DEFAULT_STORE_INITIALS: &str = "PL";

/// Display name plus its two-letter abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreIdentity {
    pub name: String,
    pub initials: String,
}

impl StoreIdentity {
    /// Build an identity from a raw (possibly blank) store name.
    pub fn from_name(value: Option<&str>) -> Self {
        Self {
            name: normalize_store_name(value),
            initials: store_initials(value),
        }
    }
}

impl Default for StoreIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_STORE_NAME.to_string(),
            initials: DEFAULT_STORE_INITIALS.to_string(),
        }
    }
}

/// Trim the name; blank input yields [`DEFAULT_STORE_NAME`].
pub fn normalize_store_name(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => DEFAULT_STORE_NAME.to_string(),
    }
}

/// Two-letter uppercase abbreviation of the normalized store name.
///
/// One word gives its first two characters, several words give the first
/// character of the first and last word.
pub fn store_initials(value: Option<&str>) -> String {
    let name = normalize_store_name(value);
    let words: Vec<&str> = name.split_whitespace().collect();

    match words.as_slice() {
        [] => DEFAULT_STORE_INITIALS.to_string(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}
