//! The page as a whole: one timeline, three effects, one surface.

use super::decor::FloatingHeart;
use super::draw::HeartDraw;
use super::elapsed::{Clock, ElapsedFormatter, TimeField};
use super::rain::{HeartRain, RainStep};
use super::surface::{Layer, Surface};
use super::timeline::Timeline;
use crate::constants::*;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Everything the page defers onto the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Rain(RainStep),
    ElapsedTick,
    Commit { field: TimeField, value: u32 },
}

impl From<RainStep> for Action {
    fn from(step: RainStep) -> Self {
        Action::Rain(step)
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Day the counter starts from (local midnight).
    pub start_date: NaiveDate,
    /// Fixed rng seed; `None` seeds from the platform's entropy source.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(START_YEAR, START_MONTH, START_DAY)
                .unwrap_or_default(),
            seed: None,
        }
    }
}

/// Owns all page state. The host calls [`App::start`] once, [`App::tick`]
/// every animation frame and forwards clicks and resizes; all times are
/// monotonic milliseconds.
pub struct App<S: Surface, C: Clock> {
    surface: S,
    clock: C,
    timeline: Timeline<Action>,
    rain: HeartRain,
    elapsed: ElapsedFormatter,
    draw: HeartDraw,
    rng: StdRng,
    started_at_ms: Option<f64>,
    draw_enabled: bool,
}

impl<S: Surface, C: Clock> App<S, C> {
    pub fn new(config: AppConfig, surface: S, clock: C) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            surface,
            clock,
            timeline: Timeline::new(),
            rain: HeartRain::new(),
            elapsed: ElapsedFormatter::new(config.start_date),
            draw: HeartDraw::new(),
            rng,
            started_at_ms: None,
            draw_enabled: false,
        }
    }

    /// Mount the static pieces and schedule the first counter update.
    pub fn start(&mut self, now_ms: f64) {
        if self.started_at_ms.is_some() {
            return;
        }
        self.started_at_ms = Some(now_ms);

        self.draw_enabled = self.surface.mount_heart();
        if !self.draw_enabled {
            log::warn!("heart drawing nodes missing; drawing disabled");
        }

        if self.surface.mount_timer() {
            for _ in 0..FLOATING_HEART_COUNT {
                let heart = FloatingHeart::roll(&mut self.rng);
                self.surface.create_node(Layer::Decor, heart.node_spec());
            }
        } else {
            log::warn!("timer display missing; counter updates are no-ops");
        }

        self.timeline.schedule(now_ms, Action::ElapsedTick);
        self.tick(now_ms);
    }

    /// Run everything due at `now_ms` and sample the heart drawing.
    pub fn tick(&mut self, now_ms: f64) {
        while let Some((at_ms, action)) = self.timeline.pop_due(now_ms) {
            self.dispatch(at_ms, now_ms, action);
        }

        if !self.draw_enabled {
            return;
        }
        if let Some(t0) = self.started_at_ms {
            let frame = self.draw.sample(((now_ms - t0) / 1000.0) as f32);
            if !self.surface.apply_draw(&frame) {
                log::debug!("heart drawing nodes gone; drawing stopped");
                self.draw_enabled = false;
            }
        }
    }

    pub fn trigger_rain(&mut self, now_ms: f64) {
        let generation = self
            .rain
            .trigger(now_ms, &mut self.surface, &mut self.timeline);
        log::info!("heart rain #{generation}");
    }

    pub fn on_resize(&mut self) {
        self.rain.on_resize(&mut self.surface);
    }

    fn dispatch(&mut self, at_ms: f64, now_ms: f64, action: Action) {
        match action {
            Action::Rain(step) => self.rain.handle(
                step,
                at_ms,
                &mut self.surface,
                &mut self.timeline,
                &mut self.rng,
            ),
            Action::ElapsedTick => {
                for (field, value) in self.elapsed.recompute(self.clock.now()) {
                    self.surface.field_changing(field);
                    self.timeline.schedule(
                        at_ms + FIELD_COMMIT_DELAY_MS,
                        Action::Commit { field, value },
                    );
                }
                // Skip ticks missed while the page was throttled.
                let mut next = at_ms + ELAPSED_TICK_MS;
                if next <= now_ms {
                    next = now_ms + ELAPSED_TICK_MS;
                }
                self.timeline.schedule(next, Action::ElapsedTick);
            }
            Action::Commit { field, value } => {
                self.surface.field_committed(field, value);
            }
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn rain(&self) -> &HeartRain {
        &self.rain
    }

    pub fn elapsed(&self) -> &ElapsedFormatter {
        &self.elapsed
    }

    pub fn draw(&self) -> &HeartDraw {
        &self.draw
    }

    pub fn pending(&self) -> usize {
        self.timeline.len()
    }

    pub fn draw_enabled(&self) -> bool {
        self.draw_enabled
    }
}
