// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn parse_threshold_accepts_values_in_range() {
    assert_eq!(parse_threshold("512", 1.0, 1023.0), Some(512.0));
    assert_eq!(parse_threshold("  99 ", 1.0, 1023.0), Some(99.0));
    assert_eq!(parse_threshold("1", 1.0, 1023.0), Some(1.0));
    assert_eq!(parse_threshold("1023", 1.0, 1023.0), Some(1023.0));
    assert_eq!(parse_threshold("12.5", 1.0, 1023.0), Some(12.5));
}

#[test]
fn parse_threshold_rejects_garbage_and_out_of_range() {
    assert_eq!(parse_threshold("", 1.0, 1023.0), None);
    assert_eq!(parse_threshold("abc", 1.0, 1023.0), None);
    assert_eq!(parse_threshold("0", 1.0, 1023.0), None);
    assert_eq!(parse_threshold("1024", 1.0, 1023.0), None);
    assert_eq!(parse_threshold("NaN", 1.0, 1023.0), None);
    assert_eq!(parse_threshold("inf", 1.0, 1023.0), None);
}

#[test]
fn panel_keys_map_to_actions() {
    assert_eq!(panel_key("h"), Some(PanelKey::Toggle));
    assert_eq!(panel_key("H"), Some(PanelKey::Toggle));
    assert_eq!(panel_key("Escape"), Some(PanelKey::Close));
    assert_eq!(panel_key("x"), None);
    assert_eq!(panel_key("Enter"), None);
}
