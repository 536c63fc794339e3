//! Light/dark theme resolution and toggle.
//!
//! Reads the stored preference from `localStorage` and falls back to the OS
//! `prefers-color-scheme` query. The chosen mode is applied as a `dark` class
//! on the `<html>` element. Toggle writes the new mode back under the
//! `theme` key.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a failed write is logged and the in-memory
//! mode still flips. The OS query is a snapshot taken once at startup; later
//! OS changes are not followed.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::storage::{BrowserStorage, PreferenceStore};

/// Storage key holding the last explicit theme choice.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>` while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Active display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored theme value that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme value: {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

/// Decide the startup theme.
///
/// A stored preference wins. With nothing stored, the OS preference decides,
/// and light is the default. `prefers_dark` is only called when nothing is
/// stored.
pub fn resolve_initial_theme(
    get_stored: impl FnOnce() -> Option<ThemeMode>,
    prefers_dark: impl FnOnce() -> bool,
) -> ThemeMode {
    match get_stored() {
        Some(mode) => mode,
        None if prefers_dark() => ThemeMode::Dark,
        None => ThemeMode::Light,
    }
}

/// Read the stored preference, treating failures and malformed values as
/// "nothing stored".
pub fn read_stored_theme<S: PreferenceStore + ?Sized>(store: &S) -> Option<ThemeMode> {
    match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => match raw.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(err) => {
                log_warn(&format!("ignoring stored theme: {err}"));
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            log_debug(&format!("theme preference not readable: {err}"));
            None
        }
    }
}

/// Flip `current` and persist the result.
///
/// A failed write is logged and otherwise ignored; the returned mode is
/// always the flipped one.
pub fn toggle<S: PreferenceStore + ?Sized>(current: ThemeMode, store: &S) -> ThemeMode {
    let next = current.toggled();
    if let Err(err) = store.set(STORAGE_KEY, next.as_str()) {
        log_warn(&format!("theme preference not saved: {err}"));
    }
    next
}

/// One-shot snapshot of the OS `prefers-color-scheme: dark` query.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Resolve the startup theme from browser storage and the OS preference.
pub fn initial_theme() -> ThemeMode {
    resolve_initial_theme(|| read_stored_theme(&BrowserStorage), system_prefers_dark)
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            let _ = if mode.is_dark() {
                class_list.add_1(DARK_CLASS)
            } else {
                class_list.remove_1(DARK_CLASS)
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

fn log_warn(message: &str) {
    #[cfg(feature = "hydrate")]
    log::warn!("{message}");
    #[cfg(not(feature = "hydrate"))]
    let _ = message;
}

fn log_debug(message: &str) {
    #[cfg(feature = "hydrate")]
    log::debug!("{message}");
    #[cfg(not(feature = "hydrate"))]
    let _ = message;
}
