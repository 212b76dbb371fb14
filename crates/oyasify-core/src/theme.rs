//! Theme catalog.
//!
//! The UI owns theme token definitions; the domain only knows the set of
//! selectable keys and which of them is reserved for supporters.

/// Theme key every new account starts with.
pub const DEFAULT_THEME: &str = "sintonia";

/// Theme key reserved for supporter accounts.
pub const SUPPORTER_THEME: &str = "apoiador";

/// All selectable theme keys.
pub const THEME_KEYS: &[&str] = &[
    "sintonia", "vinil", "neon", "acustico", "rosa", "oceano", "solar", "ametista", "rubi",
    "floresta", "apoiador",
];

/// True when `key` names a known theme.
pub fn is_known(key: &str) -> bool {
    THEME_KEYS.contains(&key)
}

/// True when `key` may be selected by an account with the given supporter
/// status.
pub fn is_selectable(key: &str, supporter: bool) -> bool {
    is_known(key) && (key != SUPPORTER_THEME || supporter)
}
