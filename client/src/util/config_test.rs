#![allow(clippy::float_cmp)]

use canvas::config::{Color, Palette};

use super::*;

#[test]
fn no_override_uses_theme_defaults() {
    assert_eq!(resolve(Theme::Light, None), SurfaceConfig::with_theme(Theme::Light));
    assert_eq!(resolve(Theme::Dark, Some("   ")), SurfaceConfig::with_theme(Theme::Dark));
}

#[test]
fn override_without_palette_keeps_theme_palette() {
    let config = resolve(Theme::Light, Some(r#"{ "eraser_width": 30 }"#));
    assert_eq!(config.palette, Palette::light());
    assert_eq!(config.eraser_width, 30.0);
    assert_eq!(config.pencil_width, 2.0);
}

#[test]
fn partial_palette_override_keeps_theme_background() {
    let config = resolve(Theme::Light, Some(r##"{ "palette": { "foreground": "#ff0000" } }"##));
    assert_eq!(config.palette.foreground, Color::rgb(255, 0, 0));
    assert_eq!(config.palette.background, Color::WHITE);

    let config = resolve(Theme::Dark, Some(r##"{ "palette": { "background": "#112233" } }"##));
    assert_eq!(config.palette.foreground, Color::WHITE);
    assert_eq!(config.palette.background, Color::rgb(0x11, 0x22, 0x33));
}

#[test]
fn invalid_override_falls_back_to_theme() {
    assert_eq!(resolve(Theme::Light, Some("{ not json")), SurfaceConfig::with_theme(Theme::Light));
    assert_eq!(
        resolve(Theme::Dark, Some(r#"{ "pencil_width": -1 }"#)),
        SurfaceConfig::with_theme(Theme::Dark)
    );
}

#[test]
fn load_outside_browser_is_theme_default() {
    assert_eq!(load(Theme::Light), SurfaceConfig::with_theme(Theme::Light));
}
