/// Tuning constants for the greeting page effects.
///
/// Timings are in milliseconds unless the name says otherwise. The file has
/// no imports so host tests can `include!` it directly.

// Device classification
pub const MOBILE_MAX_WIDTH_PX: f32 = 768.0; // inclusive on the mobile side

// Heart rain: counts and pacing
pub const MOBILE_HEART_COUNT: usize = 15;
pub const DESKTOP_HEART_COUNT: usize = 25;
pub const MOBILE_SPAWN_INTERVAL_MS: f64 = 150.0;
pub const DESKTOP_SPAWN_INTERVAL_MS: f64 = 120.0;

// Heart rain: phase timings relative to the trigger
pub const MOBILE_BURST_AT_MS: f64 = 2800.0;
pub const DESKTOP_BURST_AT_MS: f64 = 3200.0;
pub const MOBILE_FADE_AT_MS: f64 = 4000.0;
pub const DESKTOP_FADE_AT_MS: f64 = 4500.0;
pub const CLEAR_AFTER_FADE_MS: f64 = 1200.0;

// Falling hearts
pub const HEART_LEFT_MIN_PERCENT: f32 = 8.0;
pub const HEART_LEFT_SPAN_PERCENT: f32 = 84.0; // min + span = 92
pub const HEART_DELAY_MAX_SEC: f32 = 0.4;
pub const MOBILE_HEART_SIZE_BASE_PX: f32 = 18.0;
pub const MOBILE_HEART_SIZE_SPAN_PX: f32 = 10.0;
pub const DESKTOP_HEART_SIZE_BASE_PX: f32 = 22.0;
pub const DESKTOP_HEART_SIZE_SPAN_PX: f32 = 12.0;
pub const MOBILE_LANDING_Y_PERCENT: f32 = 80.0;
pub const DESKTOP_LANDING_Y_PERCENT: f32 = 85.0;

// Heart colors: hsl(hue, 90%, 65%)
pub const HEART_HUE_MIN: f32 = 330.0;
pub const HEART_HUE_SPAN: f32 = 25.0; // exclusive upper bound 355
pub const HEART_SATURATION: f32 = 90.0;
pub const HEART_LIGHTNESS: f32 = 65.0;

// Love notes
pub const MOBILE_LOVE_NOTE_CHANCE: f64 = 0.2;
pub const DESKTOP_LOVE_NOTE_CHANCE: f64 = 0.3;
pub const LOVE_NOTE_JITTER_PERCENT: f32 = 15.0; // full width, centered on the heart
pub const LOVE_NOTE_LEFT_MIN_PERCENT: f32 = 12.0;
pub const LOVE_NOTE_LEFT_MAX_PERCENT: f32 = 88.0;
pub const LOVE_NOTE_EXTRA_DELAY_SEC: f32 = 0.3;

// Bursts
pub const MOBILE_BURST_COUNT: usize = 4;
pub const DESKTOP_BURST_COUNT: usize = 6;
pub const MOBILE_BURST_RADIUS_PX: f32 = 40.0;
pub const DESKTOP_BURST_RADIUS_PX: f32 = 60.0;
pub const BURST_PARTICLE_LIFETIME_MS: f64 = 1800.0;

// Elapsed-time counter
pub const START_YEAR: i32 = 2024;
pub const START_MONTH: u32 = 5;
pub const START_DAY: u32 = 2;
pub const ELAPSED_TICK_MS: f64 = 1000.0;
pub const FIELD_COMMIT_DELAY_MS: f64 = 150.0;

// Heart drawing
pub const OUTLINE_DASH_LENGTH: f32 = 1000.0;
pub const OUTLINE_DRAW_SEC: f32 = 2.0;
pub const SOLID_REVEAL_SEC: f32 = 1.0;
pub const SOLID_REVEAL_OVERLAP_SEC: f32 = 0.5;
pub const SOLID_START_SCALE: f32 = 0.6;
pub const OUTLINE_FADE_SEC: f32 = 0.5;
pub const OUTLINE_FADE_OVERLAP_SEC: f32 = 0.5;
pub const SPIN_CYCLE_SEC: f32 = 5.0;
pub const SPIN_PEAK_SCALE: f32 = 1.1;
pub const ELASTIC_AMPLITUDE: f32 = 1.0;
pub const ELASTIC_PERIOD: f32 = 0.5;

// Timer decorations
pub const FLOATING_HEART_COUNT: usize = 8;
pub const FLOATING_HEART_SIZE_BASE_PX: f32 = 15.0;
pub const FLOATING_HEART_SIZE_SPAN_PX: f32 = 20.0;
pub const FLOATING_HEART_PERIOD_BASE_SEC: f32 = 5.0;
pub const FLOATING_HEART_PERIOD_SPAN_SEC: f32 = 5.0;
pub const FLOATING_HEART_OPACITY: f32 = 0.6;
