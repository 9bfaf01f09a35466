#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_is_dark_in_native_tests() {
    assert_eq!(read_preference(), Theme::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
}

#[test]
fn names() {
    assert_eq!(name(Theme::Dark), "dark");
    assert_eq!(name(Theme::Light), "light");
}

#[test]
fn parse_accepts_names_and_dark_mode_flags() {
    assert_eq!(parse("dark"), Some(Theme::Dark));
    assert_eq!(parse(" Light "), Some(Theme::Light));
    assert_eq!(parse("true"), Some(Theme::Dark));
    assert_eq!(parse("false"), Some(Theme::Light));
}

#[test]
fn parse_rejects_unknown() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("sepia"), None);
}
