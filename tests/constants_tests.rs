// Host-side tests for tuning constants and their relationships.
// The constants file has no imports, so it is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn heart_ranges_stay_on_screen() {
    assert_eq!(HEART_LEFT_MIN_PERCENT, 8.0);
    assert_eq!(HEART_LEFT_MIN_PERCENT + HEART_LEFT_SPAN_PERCENT, 92.0);
    assert!(LOVE_NOTE_LEFT_MIN_PERCENT < LOVE_NOTE_LEFT_MAX_PERCENT);
    assert!(LOVE_NOTE_LEFT_MIN_PERCENT >= 0.0 && LOVE_NOTE_LEFT_MAX_PERCENT <= 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hue_range_is_pink() {
    assert_eq!(HEART_HUE_MIN, 330.0);
    assert_eq!(HEART_HUE_MIN + HEART_HUE_SPAN, 355.0);
    assert!(HEART_HUE_MIN + HEART_HUE_SPAN <= 360.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bursts_start_after_every_spawn() {
    let last_mobile = (MOBILE_HEART_COUNT - 1) as f64 * MOBILE_SPAWN_INTERVAL_MS;
    let last_desktop = (DESKTOP_HEART_COUNT - 1) as f64 * DESKTOP_SPAWN_INTERVAL_MS;
    assert!(MOBILE_BURST_AT_MS > last_mobile);
    assert!(DESKTOP_BURST_AT_MS > last_desktop);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn phases_are_ordered() {
    assert!(MOBILE_FADE_AT_MS > MOBILE_BURST_AT_MS);
    assert!(DESKTOP_FADE_AT_MS > DESKTOP_BURST_AT_MS);
    assert!(CLEAR_AFTER_FADE_MS > 0.0);
    assert!(FIELD_COMMIT_DELAY_MS < ELAPSED_TICK_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mobile_is_lighter_than_desktop() {
    assert!(MOBILE_HEART_COUNT < DESKTOP_HEART_COUNT);
    assert!(MOBILE_SPAWN_INTERVAL_MS > DESKTOP_SPAWN_INTERVAL_MS);
    assert!(MOBILE_BURST_COUNT < DESKTOP_BURST_COUNT);
    assert!(MOBILE_BURST_RADIUS_PX < DESKTOP_BURST_RADIUS_PX);
    assert!(MOBILE_LOVE_NOTE_CHANCE < DESKTOP_LOVE_NOTE_CHANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn drawing_overlaps_fit_inside_steps() {
    assert!(SOLID_REVEAL_OVERLAP_SEC < OUTLINE_DRAW_SEC);
    assert!(OUTLINE_FADE_OVERLAP_SEC <= SOLID_REVEAL_SEC);
    assert!(SPIN_PEAK_SCALE > 1.0);
    assert!(SOLID_START_SCALE > 0.0 && SOLID_START_SCALE < 1.0);
}
