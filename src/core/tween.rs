//! Easing curves and tweens for the heart drawing.
//!
//! Curves follow the GSAP definitions the stylesheet was tuned against
//! (`power1` is quadratic, `power2` is cubic, `elastic.out(a, p)` overshoots and settles).

use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2In,
    Power2Out,
    Power2InOut,
    SineInOut,
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    /// Map linear progress `t` (clamped to 0..=1) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::ElasticOut { amplitude, period } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let a = amplitude.max(1.0);
                let shift = period / TAU * (1.0 / a).asin();
                a * 2f32.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
            }
        }
    }
}

/// A single property animation from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_sec: f32,
    pub duration_sec: f32,
    pub ease: Ease,
}

impl Tween {
    #[inline]
    pub fn end_sec(&self) -> f32 {
        self.start_sec + self.duration_sec
    }

    /// Value at absolute time `t_sec`; holds `from` before the start and
    /// lands exactly on `to` at the end.
    pub fn value_at(&self, t_sec: f32) -> f32 {
        if t_sec <= self.start_sec {
            return self.from;
        }
        if t_sec >= self.end_sec() || self.duration_sec <= 0.0 {
            return self.to;
        }
        let p = (t_sec - self.start_sec) / self.duration_sec;
        self.from + (self.to - self.from) * self.ease.apply(p)
    }
}

/// Where a step is placed relative to what is already in the sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Right after the current end of the sequence.
    Append,
    /// This many seconds before the current end (GSAP `"-=x"`).
    Overlap(f32),
    /// Absolute start time.
    At(f32),
}

/// Places steps on a time axis the way a GSAP timeline does.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequence {
    end_sec: f32,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `duration_sec` at `position` and return the start time.
    pub fn place(&mut self, duration_sec: f32, position: Position) -> f32 {
        let start = match position {
            Position::Append => self.end_sec,
            Position::Overlap(sec) => (self.end_sec - sec).max(0.0),
            Position::At(sec) => sec.max(0.0),
        };
        self.end_sec = self.end_sec.max(start + duration_sec);
        start
    }

    pub fn tween(
        &mut self,
        from: f32,
        to: f32,
        duration_sec: f32,
        ease: Ease,
        position: Position,
    ) -> Tween {
        let start_sec = self.place(duration_sec, position);
        Tween {
            from,
            to,
            start_sec,
            duration_sec,
            ease,
        }
    }

    pub fn end_sec(&self) -> f32 {
        self.end_sec
    }
}
