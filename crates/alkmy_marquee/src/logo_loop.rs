//! The logo loop animator
//!
//! Ties measurement, copy calculation and velocity integration together
//! behind the host contract:
//!
//! 1. `mount()` once the track exists,
//! 2. forward resize / image events through [`Observer`] and
//!    [`LogoLoop::image_settled`],
//! 3. call `tick(dt)` (or `tick_at(timestamp)`) once per display refresh,
//! 4. `stop()` on teardown.
//!
//! # Example
//!
//! ```rust
//! use alkmy_core::Size;
//! use alkmy_marquee::{LogoLoop, LogoLoopConfig, LoopItem, Measurement};
//!
//! let config = LogoLoopConfig::new(vec![LoopItem::node("acme"), LoopItem::node("globex")]);
//! let measurement = Measurement::new(Size::new(1200.0, 40.0), Size::new(400.0, 28.0));
//!
//! let mut logos = LogoLoop::new(config, measurement);
//! logos.mount();
//! for _ in 0..120 {
//!     logos.tick(1.0 / 60.0);
//! }
//!
//! assert_eq!(logos.copy_count(), 5);
//! assert!(logos.offset() > 0.0);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use alkmy_animation::{FrameClock, FrameLoop, TickCallbackId};
use alkmy_core::{Affine2D, Axis};
use smallvec::SmallVec;

use crate::config::LogoLoopConfig;
use crate::copies::{render_copies, LoopCopy};
use crate::integrator::{LoopState, MotionState, VelocityIntegrator};
use crate::measure::{ImageLoadTracker, MeasureOutcome, MeasureSource, SequenceMeasurer};
use crate::observer::{ObserveMode, Observer};

/// A seamless, continuously scrolling loop of items
pub struct LogoLoop<S: MeasureSource> {
    config: LogoLoopConfig,
    source: S,
    mode: ObserveMode,
    measurer: SequenceMeasurer,
    integrator: VelocityIntegrator,
    images: ImageLoadTracker,
    clock: FrameClock,
    hovered: bool,
    active: bool,
}

impl<S: MeasureSource> LogoLoop<S> {
    pub fn new(config: LogoLoopConfig, source: S) -> Self {
        let axis = config.axis();
        let images = ImageLoadTracker::new(config.image_count());
        Self {
            config,
            source,
            mode: ObserveMode::default(),
            measurer: SequenceMeasurer::new(axis),
            integrator: VelocityIntegrator::new(),
            images,
            clock: FrameClock::new(),
            hovered: false,
            active: false,
        }
    }

    /// Choose how the host observes size changes
    pub fn with_mode(mut self, mode: ObserveMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(&self) -> &LogoLoopConfig {
        &self.config
    }

    pub fn mode(&self) -> ObserveMode {
        self.mode
    }

    pub fn axis(&self) -> Axis {
        self.config.axis()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start accepting frames and schedule the first measurement
    ///
    /// Without element resize observation the first measurement happens
    /// synchronously here instead of on the next frame.
    pub fn mount(&mut self) {
        self.active = true;
        self.clock.reset();
        self.images = ImageLoadTracker::new(self.config.image_count());

        if self.mode.measures_at_mount() {
            self.measure_now();
        } else {
            self.measurer.request();
        }
        if self.images.is_settled() {
            self.on_content_settled();
        }
        tracing::debug!(
            mode = ?self.mode,
            items = self.config.items.len(),
            images = self.images.remaining(),
            "LogoLoop: mounted"
        );
    }

    /// Stop accepting frames and forget the last frame timestamp
    pub fn stop(&mut self) {
        if self.active {
            tracing::debug!(offset = self.integrator.offset(), "LogoLoop: stopped");
        }
        self.active = false;
        self.clock.reset();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Replace the configuration, re-measuring if the layout changed
    pub fn set_config(&mut self, config: LogoLoopConfig) {
        let relayout = config.layout_differs(&self.config);
        self.config = config;

        if self.config.effective_hover_speed().is_none() {
            self.hovered = false;
        }
        if relayout {
            self.measurer.set_axis(self.config.axis());
            self.images = ImageLoadTracker::new(self.config.image_count());
            self.measurer.request();
            if self.images.is_settled() {
                self.on_content_settled();
            }
            tracing::debug!("LogoLoop: layout changed, re-measuring");
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Pointer entered the track; ignored when hovering has no effect
    pub fn pointer_enter(&mut self) {
        if self.config.effective_hover_speed().is_some() {
            self.hovered = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.config.effective_hover_speed().is_some() {
            self.hovered = false;
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// An image in the measured copy finished loading or failed
    pub fn image_settled(&mut self) {
        if self.images.settle_one() {
            self.on_content_settled();
        }
    }

    pub fn pending_images(&self) -> usize {
        self.images.remaining()
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Velocity the loop is currently easing toward
    pub fn target_velocity(&self) -> f32 {
        match (self.hovered, self.config.effective_hover_speed()) {
            (true, Some(hover)) => hover,
            _ => self.config.target_velocity(),
        }
    }

    /// Advance one frame of `dt` seconds
    ///
    /// Returns false (and does nothing) when not mounted.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        if self.measurer.take_pending() {
            self.measure_now();
        }
        let target = self.target_velocity();
        let extent = self.measurer.sequence_extent();
        let motion = self.integrator.step(dt, target, extent);
        tracing::trace!(dt, offset = motion.offset, velocity = motion.velocity, "LogoLoop: tick");
        true
    }

    /// Advance using a host frame timestamp in milliseconds
    pub fn tick_at(&mut self, timestamp_ms: f64) -> bool {
        if !self.active {
            return false;
        }
        let dt = self.clock.delta(timestamp_ms);
        self.tick(dt)
    }

    fn measure_now(&mut self) -> MeasureOutcome {
        let previous_copies = self.measurer.copy_count();
        let outcome = self.measurer.apply(self.source.measure());

        if outcome.sequence_changed {
            self.integrator
                .observe_extent(self.measurer.sequence_extent());
        }
        if outcome.copies_changed {
            tracing::debug!(
                from = previous_copies,
                to = self.measurer.copy_count(),
                extent = self.measurer.sequence_extent(),
                "LogoLoop: copy count changed"
            );
        }
        outcome
    }

    // =========================================================================
    // Output
    // =========================================================================

    pub fn state(&self) -> LoopState {
        self.integrator.state()
    }

    pub fn motion(&self) -> MotionState {
        self.integrator.motion()
    }

    pub fn offset(&self) -> f32 {
        self.integrator.offset()
    }

    pub fn velocity(&self) -> f32 {
        self.integrator.velocity()
    }

    pub fn sequence_extent(&self) -> f32 {
        self.measurer.sequence_extent()
    }

    pub fn copy_count(&self) -> usize {
        self.measurer.copy_count()
    }

    /// Height assigned to a vertical loop's container, if any
    pub fn container_height(&self) -> Option<f32> {
        self.measurer.container_height()
    }

    /// Translation to apply to the track this frame
    pub fn transform(&self) -> Affine2D {
        self.integrator.transform(self.axis())
    }

    /// Copies to render, first one measured and the rest aria-hidden
    pub fn copies(&self) -> SmallVec<[LoopCopy<'_>; 4]> {
        render_copies(&self.config.items, self.copy_count())
    }
}

impl<S: MeasureSource + 'static> LogoLoop<S> {
    /// Register a shared loop with a frame loop
    ///
    /// The callback holds a weak reference; dropping the loop turns the
    /// callback into a no-op.
    pub fn attach(this: &Rc<RefCell<Self>>, frames: &mut FrameLoop) -> TickCallbackId {
        let weak = Rc::downgrade(this);
        frames.register(move |dt| {
            if let Some(logos) = weak.upgrade() {
                logos.borrow_mut().tick(dt);
            }
        })
    }

    /// Release the frame loop registration and stop the loop
    pub fn detach(this: &Rc<RefCell<Self>>, frames: &mut FrameLoop, id: TickCallbackId) {
        frames.remove(id);
        this.borrow_mut().stop();
    }
}

impl<S: MeasureSource> Observer for LogoLoop<S> {
    fn on_resize(&mut self) {
        self.measurer.request();
    }

    fn on_content_settled(&mut self) {
        self.measurer.request();
    }
}

impl<S: MeasureSource> std::fmt::Debug for LogoLoop<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoLoop")
            .field("direction", &self.config.direction)
            .field("items", &self.config.items.len())
            .field("mode", &self.mode)
            .field("state", &self.integrator.state())
            .field("motion", &self.integrator.motion())
            .field("sequence_extent", &self.measurer.sequence_extent())
            .field("copy_count", &self.measurer.copy_count())
            .field("hovered", &self.hovered)
            .field("active", &self.active)
            .finish()
    }
}
