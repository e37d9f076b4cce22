//! Lifecycle of a running particle field: start, resize, stop and ticks.
//!
//! The host owns the scheduling (an animation-frame callback, a timer, a
//! plain `for` loop) and calls [`FrameLoop::tick`] once per frame. The loop
//! checks its own state before doing any work, so a tick scheduled before
//! [`FrameLoop::stop`] and delivered after it is a no-op.

use ambient_core::{Surface, Xorshift64};

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::input::{FrameInput, InputSample, ScrollTracker};

/// Where a [`FrameLoop`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, never started.
    Idle,
    Running,
    /// Stopped by the host; ticks are ignored until the next `start`.
    Stopped,
}

/// Result of one call to [`FrameLoop::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The loop has not been started; nothing was drawn.
    Idle,
    /// The loop was stopped; nothing was drawn.
    Stopped,
    /// The surface was cleared and redrawn.
    Drawn { particles: usize },
}

/// A particle field plus its input sample, driven one tick at a time.
#[derive(Debug)]
pub struct FrameLoop {
    config: FieldConfig,
    rng: Xorshift64,
    input: InputSample,
    scroll: ScrollTracker,
    field: Option<ParticleField>,
    state: LoopState,
    generation: u64,
    ticks: u64,
}

impl FrameLoop {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Xorshift64::new(seed),
            input: InputSample::default(),
            scroll: ScrollTracker::default(),
            field: None,
            state: LoopState::Idle,
            generation: 0,
            ticks: 0,
        }
    }

    /// Seeds a field for a `width` × `height` surface and starts ticking.
    ///
    /// Calling `start` on a running loop reseeds it.
    pub fn start(&mut self, width: f64, height: f64) {
        self.scroll.reset();
        self.reseed(width, height);
        self.state = LoopState::Running;
        log::debug!(
            "particle loop started: {width}x{height}, {} particles",
            self.particle_count()
        );
    }

    /// Replaces the population for a new surface size.
    ///
    /// Stop, discard, reseed and resume happen inside this one call, so no
    /// tick can observe a half-resized field. Ignored unless running.
    /// Returns whether a reseed took place.
    pub fn on_resize(&mut self, width: f64, height: f64) -> bool {
        if self.state != LoopState::Running {
            log::debug!("resize to {width}x{height} ignored: loop is {:?}", self.state);
            return false;
        }
        self.state = LoopState::Stopped;
        self.field = None;
        self.reseed(width, height);
        self.state = LoopState::Running;
        log::debug!(
            "particle loop resized: {width}x{height}, {} particles",
            self.particle_count()
        );
        true
    }

    /// Stops the loop and releases the population. Idempotent.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::debug!("particle loop stopped after {} ticks", self.ticks);
        }
        self.state = LoopState::Stopped;
        self.field = None;
    }

    /// Records a pointer-move sample.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.input.set_pointer(x, y);
    }

    /// Records that the pointer left; repulsion stops until it returns.
    pub fn on_pointer_leave(&mut self) {
        self.input.clear_pointer();
    }

    /// Records the host document's current vertical scroll offset.
    pub fn on_scroll(&mut self, offset: f64) {
        self.input.set_scroll_offset(offset);
    }

    /// Runs one frame: sample input, clear, update and draw every particle.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> TickOutcome {
        match self.state {
            LoopState::Idle => return TickOutcome::Idle,
            LoopState::Stopped => return TickOutcome::Stopped,
            LoopState::Running => {}
        }
        let Some(field) = self.field.as_mut() else {
            return TickOutcome::Stopped;
        };
        let frame = FrameInput {
            pointer: self.input.pointer(),
            scroll_velocity: self.scroll.sample(self.input.scroll_offset()),
        };
        field.tick(surface, &frame, &self.config);
        self.ticks += 1;
        TickOutcome::Drawn {
            particles: field.len(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn input(&self) -> &InputSample {
        &self.input
    }

    /// The live population, if running.
    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn particle_count(&self) -> usize {
        self.field.as_ref().map_or(0, ParticleField::len)
    }

    /// Number of reseeds so far (start and resize both count).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ticks that actually drew, across all generations.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn reseed(&mut self, width: f64, height: f64) {
        self.generation += 1;
        let mut rng = self.rng.fork();
        self.field = Some(
            ParticleField::initialize(width, height, &self.config, &mut rng)
                .with_generation(self.generation),
        );
    }
}
