//! Color scheme preference.
//!
//! Reads the preferred scheme from `localStorage`, falling back to the
//! system `prefers-color-scheme`, and mirrors it onto a `data-theme`
//! attribute on the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! The scheme is resolved once at startup because the drawing surface bakes
//! its background into the bitmap; native builds always resolve to dark.

use canvas::config::Theme;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "whiteboard_theme";

/// The attribute value / CSS modifier for `theme`.
#[must_use]
pub fn name(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    }
}

/// Parse a stored preference; unknown values are ignored.
#[must_use]
pub fn parse(value: &str) -> Option<Theme> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dark" | "true" => Some(Theme::Dark),
        "light" | "false" => Some(Theme::Light),
        _ => None,
    }
}

/// Read the scheme preference.
///
/// A stored value wins; otherwise the system preference decides, and dark is
/// the default when neither is available.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Dark;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = parse(&val) {
                    return theme;
                }
            }
        }

        match window.match_media("(prefers-color-scheme: light)") {
            Ok(Some(mq)) if mq.matches() => Theme::Light,
            _ => Theme::Dark,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Dark
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if let Err(err) = el.set_attribute("data-theme", name(theme)) {
                log::warn!("failed to set data-theme: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("theme {} not applied outside the browser", name(theme));
    }
}
