use crate::constants::*;

/// Size of the visible page area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::from_viewport_width(self.width)
    }

    /// Convert a percentage position into absolute pixels.
    #[inline]
    pub fn percent_to_px(&self, x_percent: f32, y_percent: f32) -> (f32, f32) {
        (
            x_percent / 100.0 * self.width,
            y_percent / 100.0 * self.height,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    #[inline]
    pub fn from_viewport_width(width: f32) -> Self {
        if width <= MOBILE_MAX_WIDTH_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

/// Heart-rain parameters scaled for a device class.
///
/// Mobile sessions use fewer, slower hearts and smaller bursts so the effect
/// stays readable on narrow screens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainProfile {
    pub heart_count: usize,
    pub spawn_interval_ms: f64,
    pub burst_count: usize,
    pub burst_radius_px: f32,
    pub landing_y_percent: f32,
    pub love_note_chance: f64,
    pub burst_at_ms: f64,
    pub fade_at_ms: f64,
    pub heart_size_base_px: f32,
    pub heart_size_span_px: f32,
}

impl RainProfile {
    pub const MOBILE: RainProfile = RainProfile {
        heart_count: MOBILE_HEART_COUNT,
        spawn_interval_ms: MOBILE_SPAWN_INTERVAL_MS,
        burst_count: MOBILE_BURST_COUNT,
        burst_radius_px: MOBILE_BURST_RADIUS_PX,
        landing_y_percent: MOBILE_LANDING_Y_PERCENT,
        love_note_chance: MOBILE_LOVE_NOTE_CHANCE,
        burst_at_ms: MOBILE_BURST_AT_MS,
        fade_at_ms: MOBILE_FADE_AT_MS,
        heart_size_base_px: MOBILE_HEART_SIZE_BASE_PX,
        heart_size_span_px: MOBILE_HEART_SIZE_SPAN_PX,
    };

    pub const DESKTOP: RainProfile = RainProfile {
        heart_count: DESKTOP_HEART_COUNT,
        spawn_interval_ms: DESKTOP_SPAWN_INTERVAL_MS,
        burst_count: DESKTOP_BURST_COUNT,
        burst_radius_px: DESKTOP_BURST_RADIUS_PX,
        landing_y_percent: DESKTOP_LANDING_Y_PERCENT,
        love_note_chance: DESKTOP_LOVE_NOTE_CHANCE,
        burst_at_ms: DESKTOP_BURST_AT_MS,
        fade_at_ms: DESKTOP_FADE_AT_MS,
        heart_size_base_px: DESKTOP_HEART_SIZE_BASE_PX,
        heart_size_span_px: DESKTOP_HEART_SIZE_SPAN_PX,
    };

    #[inline]
    pub fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Mobile => Self::MOBILE,
            DeviceClass::Desktop => Self::DESKTOP,
        }
    }

    /// Offset of the `index`-th spawn from the session start.
    #[inline]
    pub fn spawn_offset_ms(&self, index: usize) -> f64 {
        index as f64 * self.spawn_interval_ms
    }

    /// Offset at which the container is emptied for good.
    #[inline]
    pub fn clear_at_ms(&self) -> f64 {
        self.fade_at_ms + CLEAR_AFTER_FADE_MS
    }
}
