//! Heart rain: the click-triggered falling-hearts session.
//!
//! A session is a fixed plan laid out on the shared [`Timeline`] when the
//! user clicks: one spawn step per heart, a burst step once every heart has
//! started falling, then a fade and a final clear. Steps carry the
//! generation of the session that scheduled them; a newer click bumps the
//! generation, which turns every leftover step of the old session into a
//! no-op (only particle expiry still runs, and it tolerates missing nodes).

use super::device::{DeviceClass, RainProfile, Viewport};
use super::surface::{Layer, NodeId, NodeSpec, Surface};
use super::timeline::Timeline;
use crate::constants::*;
use glam::DVec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f64::consts::TAU;
use std::fmt;

pub const HEART_GLYPHS: [&str; 4] = ["❤️", "💖", "💗", "💓"];
pub const LOVE_MESSAGES: [&str; 5] = ["Forever", "Always", "Yours", "Love", "Adore"];
pub const MINI_HEART_GLYPH: &str = "❤️";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub fn roll_heart<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hue: rng.gen_range(HEART_HUE_MIN..HEART_HUE_MIN + HEART_HUE_SPAN),
            saturation: HEART_SATURATION,
            lightness: HEART_LIGHTNESS,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.2}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// One falling heart and its randomized look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnEvent {
    pub index: usize,
    pub horizontal_percent: f32,
    pub size_px: f32,
    pub delay_sec: f32,
    pub color: Hsl,
}

impl SpawnEvent {
    pub fn roll<R: Rng + ?Sized>(index: usize, profile: &RainProfile, rng: &mut R) -> Self {
        let size_px = profile.heart_size_base_px + rng.gen::<f32>() * profile.heart_size_span_px;
        let horizontal_percent =
            rng.gen_range(HEART_LEFT_MIN_PERCENT..HEART_LEFT_MIN_PERCENT + HEART_LEFT_SPAN_PERCENT);
        let delay_sec = rng.gen_range(0.0..HEART_DELAY_MAX_SEC);
        Self {
            index,
            horizontal_percent,
            size_px,
            delay_sec,
            color: Hsl::roll_heart(rng),
        }
    }

    pub fn glyph(&self) -> &'static str {
        HEART_GLYPHS[self.index % HEART_GLYPHS.len()]
    }

    /// Where the heart's burst will be drawn. Recorded at spawn time, so the
    /// burst height is the programmed landing line, not the animated one.
    pub fn landing(&self, profile: &RainProfile) -> RecordedPosition {
        RecordedPosition {
            x_percent: self.horizontal_percent,
            y_percent: profile.landing_y_percent,
            color: self.color,
        }
    }

    pub fn node_spec(&self) -> NodeSpec {
        NodeSpec::new("falling-heart", self.glyph())
            .style("left", format!("{}%", self.horizontal_percent))
            .style("font-size", format!("{}px", self.size_px))
            .style("animation-delay", format!("{}s", self.delay_sec))
            .style("color", self.color.to_string())
    }
}

/// Short floating word shown next to some hearts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoveNote {
    pub text: &'static str,
    pub left_percent: f32,
    pub delay_sec: f32,
}

impl LoveNote {
    pub fn roll<R: Rng + ?Sized>(heart: &SpawnEvent, rng: &mut R) -> Self {
        let text = LOVE_MESSAGES[rng.gen_range(0..LOVE_MESSAGES.len())];
        let jitter = (rng.gen::<f32>() - 0.5) * LOVE_NOTE_JITTER_PERCENT;
        Self {
            text,
            left_percent: (heart.horizontal_percent + jitter)
                .clamp(LOVE_NOTE_LEFT_MIN_PERCENT, LOVE_NOTE_LEFT_MAX_PERCENT),
            delay_sec: heart.delay_sec + LOVE_NOTE_EXTRA_DELAY_SEC,
        }
    }

    pub fn node_spec(&self) -> NodeSpec {
        NodeSpec::new("love-note", self.text)
            .style("left", format!("{}%", self.left_percent))
            .style("animation-delay", format!("{}s", self.delay_sec))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordedPosition {
    pub x_percent: f32,
    pub y_percent: f32,
    pub color: Hsl,
}

/// One mini heart flying out of a burst. The surface animates it from the
/// origin towards `origin + offset` (CSS `--end-x`/`--end-y`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstParticle {
    pub origin_x_px: f32,
    pub origin_y_px: f32,
    pub angle_index: usize,
    pub angle: f64,
    pub offset: DVec2,
    pub color: Hsl,
}

impl BurstParticle {
    pub fn node_spec(&self) -> NodeSpec {
        NodeSpec::new("mini-heart", MINI_HEART_GLYPH)
            .style("left", format!("{}px", self.origin_x_px))
            .style("top", format!("{}px", self.origin_y_px))
            .style("color", self.color.to_string())
            .style("--end-x", format!("{}px", self.offset.x))
            .style("--end-y", format!("{}px", self.offset.y))
    }
}

/// Evenly spaced ring of particles around a recorded position.
pub fn burst(
    pos: &RecordedPosition,
    viewport: Viewport,
    profile: &RainProfile,
) -> SmallVec<[BurstParticle; 6]> {
    let (origin_x_px, origin_y_px) = viewport.percent_to_px(pos.x_percent, pos.y_percent);
    let count = profile.burst_count;
    (0..count)
        .map(|k| {
            let angle = k as f64 / count as f64 * TAU;
            BurstParticle {
                origin_x_px,
                origin_y_px,
                angle_index: k,
                angle,
                offset: DVec2::from_angle(angle) * profile.burst_radius_px as f64,
                color: pos.color,
            }
        })
        .collect()
}

/// Deferred steps of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RainStep {
    Spawn { generation: u64, index: usize },
    Burst { generation: u64 },
    Fade { generation: u64 },
    Clear { generation: u64 },
    Expire { node: NodeId },
}

/// State of the current heart-rain session.
#[derive(Clone, Debug)]
pub struct Session {
    pub generation: u64,
    pub class: DeviceClass,
    pub profile: RainProfile,
    pub started_at_ms: f64,
    pub spawns: Vec<SpawnEvent>,
    pub positions: Vec<RecordedPosition>,
    pub love_notes: Vec<LoveNote>,
    /// Set once the fade step ran; the container is no longer `active`.
    pub fading: bool,
}

#[derive(Debug, Default)]
pub struct HeartRain {
    generation: u64,
    session: Option<Session>,
}

impl HeartRain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// A session is running and its container has not started fading.
    pub fn is_raining(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.fading)
    }

    /// Start a new session at `now_ms`, discarding whatever is on screen.
    /// Returns the new generation.
    pub fn trigger<S, A>(
        &mut self,
        now_ms: f64,
        surface: &mut S,
        timeline: &mut Timeline<A>,
    ) -> u64
    where
        S: Surface + ?Sized,
        A: From<RainStep>,
    {
        surface.clear_rain();
        surface.set_rain_active(true);

        self.generation += 1;
        let generation = self.generation;
        let class = surface.viewport().device_class();
        let profile = RainProfile::for_class(class);

        for index in 0..profile.heart_count {
            timeline.schedule(
                now_ms + profile.spawn_offset_ms(index),
                RainStep::Spawn { generation, index },
            );
        }
        timeline.schedule(now_ms + profile.burst_at_ms, RainStep::Burst { generation });
        timeline.schedule(now_ms + profile.fade_at_ms, RainStep::Fade { generation });
        timeline.schedule(now_ms + profile.clear_at_ms(), RainStep::Clear { generation });

        log::debug!(
            "[rain] session {} started: {:?}, {} hearts",
            generation,
            class,
            profile.heart_count
        );
        self.session = Some(Session {
            generation,
            class,
            profile,
            started_at_ms: now_ms,
            spawns: Vec::with_capacity(profile.heart_count),
            positions: Vec::with_capacity(profile.heart_count),
            love_notes: Vec::new(),
            fading: false,
        });
        generation
    }

    /// Run one step that came due at `now_ms`.
    pub fn handle<S, A, R>(
        &mut self,
        step: RainStep,
        now_ms: f64,
        surface: &mut S,
        timeline: &mut Timeline<A>,
        rng: &mut R,
    ) where
        S: Surface + ?Sized,
        A: From<RainStep>,
        R: Rng + ?Sized,
    {
        match step {
            RainStep::Expire { node } => {
                surface.remove_node(node);
            }
            RainStep::Spawn { generation, index } => {
                if let Some(session) = self.current_mut(generation) {
                    session.spawn(index, surface, rng);
                }
            }
            RainStep::Burst { generation } => {
                if let Some(session) = self.current_mut(generation) {
                    session.burst(now_ms, surface, timeline);
                }
            }
            RainStep::Fade { generation } => {
                if let Some(session) = self.current_mut(generation) {
                    session.fading = true;
                    surface.set_rain_active(false);
                }
            }
            RainStep::Clear { generation } => {
                if self.current_mut(generation).is_some() {
                    surface.clear_rain();
                    self.session = None;
                    log::debug!("[rain] session {} finished", generation);
                }
            }
        }
    }

    /// Orientation/size change: drop what is on screen while the rain is
    /// active. Hearts already fading out are left to finish.
    pub fn on_resize<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.is_raining() {
            surface.clear_rain();
        }
    }

    fn current_mut(&mut self, generation: u64) -> Option<&mut Session> {
        self.session
            .as_mut()
            .filter(|s| s.generation == generation)
    }
}

impl Session {
    fn spawn<S, R>(&mut self, index: usize, surface: &mut S, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let event = SpawnEvent::roll(index, &self.profile, rng);
        self.positions.push(event.landing(&self.profile));
        self.spawns.push(event);

        if rng.gen_bool(self.profile.love_note_chance) {
            let note = LoveNote::roll(&event, rng);
            surface.create_node(Layer::Rain, note.node_spec());
            self.love_notes.push(note);
        }
        surface.create_node(Layer::Rain, event.node_spec());
    }

    fn burst<S, A>(&self, now_ms: f64, surface: &mut S, timeline: &mut Timeline<A>)
    where
        S: Surface + ?Sized,
        A: From<RainStep>,
    {
        let viewport = surface.viewport();
        for pos in &self.positions {
            for particle in burst(pos, viewport, &self.profile) {
                if let Some(node) = surface.create_node(Layer::Rain, particle.node_spec()) {
                    timeline.schedule(
                        now_ms + BURST_PARTICLE_LIFETIME_MS,
                        RainStep::Expire { node },
                    );
                }
            }
        }
    }
}
