use super::tween::{Ease, Position, Sequence, Tween};
use crate::constants::*;

/// Every animated property of the heart at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawFrame {
    pub outline_dash_offset: f32,
    pub outline_opacity: f32,
    pub solid_opacity: f32,
    pub solid_scale: f32,
    pub solid_rotate_y_deg: f32,
}

/// Heart drawing: the outline is traced, the solid heart springs in while
/// the outline fades, then the solid heart spins forever with a slight pulse.
///
/// The setup phase runs once; the spin is a closed-form function of time, so
/// sampling at any `t` is cheap and the animation never accumulates state.
#[derive(Clone, Debug)]
pub struct HeartDraw {
    outline_dash: Tween,
    solid_opacity: Tween,
    solid_scale: Tween,
    outline_fade: Tween,
    spin_start_sec: f32,
}

impl Default for HeartDraw {
    fn default() -> Self {
        Self::new()
    }
}

impl HeartDraw {
    pub fn new() -> Self {
        let mut seq = Sequence::new();
        let outline_dash = seq.tween(
            OUTLINE_DASH_LENGTH,
            0.0,
            OUTLINE_DRAW_SEC,
            Ease::Power2InOut,
            Position::Append,
        );
        let elastic = Ease::ElasticOut {
            amplitude: ELASTIC_AMPLITUDE,
            period: ELASTIC_PERIOD,
        };
        let solid_opacity = seq.tween(
            0.0,
            1.0,
            SOLID_REVEAL_SEC,
            elastic,
            Position::Overlap(SOLID_REVEAL_OVERLAP_SEC),
        );
        let solid_scale = Tween {
            from: SOLID_START_SCALE,
            to: 1.0,
            ..solid_opacity
        };
        let outline_fade = seq.tween(
            1.0,
            0.0,
            OUTLINE_FADE_SEC,
            Ease::Power1Out,
            Position::Overlap(OUTLINE_FADE_OVERLAP_SEC),
        );
        let spin_start_sec = seq.place(SPIN_CYCLE_SEC, Position::Append);
        Self {
            outline_dash,
            solid_opacity,
            solid_scale,
            outline_fade,
            spin_start_sec,
        }
    }

    /// Time at which the setup phase ends and the endless spin begins.
    pub fn spin_start_sec(&self) -> f32 {
        self.spin_start_sec
    }

    pub fn solid_reveal_start_sec(&self) -> f32 {
        self.solid_opacity.start_sec
    }

    pub fn sample(&self, t_sec: f32) -> DrawFrame {
        let (rotate, pulse) = self.spin_at(t_sec);
        let scale = if t_sec < self.spin_start_sec {
            self.solid_scale.value_at(t_sec)
        } else {
            pulse
        };
        DrawFrame {
            outline_dash_offset: self.outline_dash.value_at(t_sec),
            outline_opacity: self.outline_fade.value_at(t_sec),
            // Elastic overshoot is fine for scale but not for opacity.
            solid_opacity: self.solid_opacity.value_at(t_sec).clamp(0.0, 1.0),
            solid_scale: scale,
            solid_rotate_y_deg: rotate,
        }
    }

    /// Rotation and scale of the spin phase: two half-turn legs per cycle,
    /// the scale peaking at the half-turn.
    fn spin_at(&self, t_sec: f32) -> (f32, f32) {
        if t_sec < self.spin_start_sec {
            return (0.0, 1.0);
        }
        let leg = SPIN_CYCLE_SEC / 2.0;
        let local = (t_sec - self.spin_start_sec).rem_euclid(SPIN_CYCLE_SEC);
        if local < leg {
            let e = Ease::SineInOut.apply(local / leg);
            (180.0 * e, 1.0 + (SPIN_PEAK_SCALE - 1.0) * e)
        } else {
            let e = Ease::SineInOut.apply((local - leg) / leg);
            (180.0 + 180.0 * e, SPIN_PEAK_SCALE - (SPIN_PEAK_SCALE - 1.0) * e)
        }
    }
}
