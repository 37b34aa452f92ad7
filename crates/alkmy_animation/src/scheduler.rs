//! Cooperative frame loop
//!
//! The host owns the real refresh primitive and calls [`FrameLoop::tick`]
//! (or [`FrameLoop::tick_at`] with a raw timestamp) once per display
//! refresh. Every registered callback receives the elapsed seconds. After
//! [`FrameLoop::stop`] ticks are ignored until [`FrameLoop::start`].
//!
//! Everything runs on the host's single UI thread; callbacks are plain
//! `FnMut` closures and nothing here is `Send`.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use alkmy_animation::FrameLoop;
//!
//! let elapsed = Rc::new(Cell::new(0.0f32));
//! let mut frames = FrameLoop::new();
//!
//! let sink = Rc::clone(&elapsed);
//! frames.register(move |dt| sink.set(sink.get() + dt));
//!
//! frames.tick_at(0.0);
//! frames.tick_at(500.0);
//! assert!((elapsed.get() - 0.5).abs() < 1e-6);
//! ```

use slotmap::{new_key_type, SlotMap};

use crate::clock::FrameClock;

new_key_type! {
    /// Handle to a registered tick callback
    pub struct TickCallbackId;
}

/// Callback invoked once per frame with the elapsed seconds
pub type TickCallback = Box<dyn FnMut(f32)>;

/// Host-driven frame loop holding per-frame callbacks
pub struct FrameLoop {
    callbacks: SlotMap<TickCallbackId, TickCallback>,
    clock: FrameClock,
    running: bool,
    frame_count: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            callbacks: SlotMap::with_key(),
            clock: FrameClock::new(),
            running: true,
            frame_count: 0,
        }
    }

    /// Register a callback to run every frame
    pub fn register<F>(&mut self, callback: F) -> TickCallbackId
    where
        F: FnMut(f32) + 'static,
    {
        let id = self.callbacks.insert(Box::new(callback));
        tracing::trace!(?id, "FrameLoop: registered tick callback");
        id
    }

    /// Release a callback; returns false if it was already gone
    pub fn remove(&mut self, id: TickCallbackId) -> bool {
        self.callbacks.remove(id).is_some()
    }

    pub fn contains(&self, id: TickCallbackId) -> bool {
        self.callbacks.contains_key(id)
    }

    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resume ticking after a [`stop`](Self::stop)
    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!("FrameLoop: started");
        }
        self.running = true;
    }

    /// Stop ticking and forget the last frame timestamp
    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(frames = self.frame_count, "FrameLoop: stopped");
        }
        self.running = false;
        self.clock.reset();
    }

    /// Run every callback with `dt` seconds
    ///
    /// Returns true if the loop wants another frame (running with at least
    /// one callback registered).
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.frame_count += 1;
        for (_, callback) in self.callbacks.iter_mut() {
            callback(dt);
        }
        !self.callbacks.is_empty()
    }

    /// Run every callback using a host timestamp in milliseconds
    pub fn tick_at(&mut self, timestamp_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        let dt = self.clock.delta(timestamp_ms);
        self.tick(dt)
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameLoop")
            .field("callbacks", &self.callbacks.len())
            .field("clock", &self.clock)
            .field("running", &self.running)
            .field("frame_count", &self.frame_count)
            .finish()
    }
}
