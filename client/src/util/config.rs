//! Surface configuration for the canvas host.
//!
//! The page may embed a JSON override:
//!
//! ```html
//! <script id="whiteboard-config" type="application/json">{ "eraser_width": 30 }</script>
//! ```
//!
//! Anything it leaves out keeps its default, and palette colors it does not
//! name follow the resolved color scheme.

use canvas::config::{SurfaceConfig, Theme};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element id of the optional inline JSON override.
pub const CONFIG_ELEMENT_ID: &str = "whiteboard-config";

/// Build the engine config for `theme`, applying the page override if present.
pub fn load(theme: Theme) -> SurfaceConfig {
    #[cfg(feature = "csr")]
    {
        let inline = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        resolve(theme, inline.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        resolve(theme, None)
    }
}

/// Merge an optional JSON override onto the defaults for `theme`.
///
/// Palette fields the override leaves out keep the theme's colors. An invalid
/// override is logged and ignored.
pub fn resolve(theme: Theme, json: Option<&str>) -> SurfaceConfig {
    let base = SurfaceConfig::with_theme(theme);
    let Some(json) = json.map(str::trim).filter(|s| !s.is_empty()) else {
        return base;
    };

    match base.merge_json(json) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring invalid #{CONFIG_ELEMENT_ID}: {err}");
            base
        }
    }
}
