//! Sequence measurement
//!
//! Turns raw host measurements into the two numbers the rest of the loop
//! cares about: the sequence extent along the loop axis and the number of
//! copies to render. Measurements are requested by observer callbacks and
//! applied one frame later; applying the same measurement twice reports no
//! change.

use alkmy_core::{Axis, Size};

use crate::copies::{copy_count, MIN_COPIES};

/// Raw sizes reported by the host
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurement {
    /// Client size of the loop container
    pub container: Size,
    /// Bounding size of the first copy
    pub sequence: Size,
    /// Client size of the container's parent, when it has one
    pub parent: Option<Size>,
}

impl Measurement {
    pub fn new(container: Size, sequence: Size) -> Self {
        Self {
            container,
            sequence,
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: Size) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Supplies measurements on demand
pub trait MeasureSource {
    fn measure(&self) -> Measurement;
}

impl MeasureSource for Measurement {
    fn measure(&self) -> Measurement {
        *self
    }
}

impl<F> MeasureSource for F
where
    F: Fn() -> Measurement,
{
    fn measure(&self) -> Measurement {
        self()
    }
}

/// What a measurement changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeasureOutcome {
    pub sequence_changed: bool,
    pub copies_changed: bool,
    /// Vertical loops only: the container was sized to its parent
    pub container_resized: bool,
}

impl MeasureOutcome {
    pub fn is_unchanged(&self) -> bool {
        !(self.sequence_changed || self.copies_changed || self.container_resized)
    }
}

/// Holds the last known sequence size and copy count
#[derive(Clone, Debug)]
pub struct SequenceMeasurer {
    axis: Axis,
    sequence_width: f32,
    sequence_height: f32,
    copy_count: usize,
    container_height: Option<f32>,
    pending: bool,
}

impl SequenceMeasurer {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            sequence_width: 0.0,
            sequence_height: 0.0,
            copy_count: MIN_COPIES,
            container_height: None,
            pending: false,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    /// Measured extent along the loop axis (0.0 until measured)
    pub fn sequence_extent(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.sequence_width,
            Axis::Vertical => self.sequence_height,
        }
    }

    pub fn copy_count(&self) -> usize {
        self.copy_count
    }

    /// Height assigned to a vertical loop's container, if any
    pub fn container_height(&self) -> Option<f32> {
        self.container_height
    }

    /// Schedule a measurement for the next frame
    pub fn request(&mut self) {
        self.pending = true;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Clear and return the pending flag
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    /// Apply a measurement, updating only what actually changed
    pub fn apply(&mut self, measurement: Measurement) -> MeasureOutcome {
        match self.axis {
            Axis::Horizontal => self.apply_horizontal(measurement),
            Axis::Vertical => self.apply_vertical(measurement),
        }
    }

    fn apply_horizontal(&mut self, m: Measurement) -> MeasureOutcome {
        let mut outcome = MeasureOutcome::default();
        let sequence = m.sequence.width;
        if !(sequence.is_finite() && sequence > 0.0) {
            return outcome;
        }

        let width = sequence.ceil();
        if width != self.sequence_width {
            self.sequence_width = width;
            outcome.sequence_changed = true;
        }

        outcome.copies_changed = self.set_copy_count(copy_count(m.container.width, sequence));
        outcome
    }

    fn apply_vertical(&mut self, m: Measurement) -> MeasureOutcome {
        let mut outcome = MeasureOutcome::default();

        let parent_height = m.parent.map(|p| p.height).unwrap_or(0.0);
        if parent_height.is_finite() && parent_height > 0.0 {
            let target = parent_height.ceil();
            if self.container_height != Some(target) {
                self.container_height = Some(target);
                outcome.container_resized = true;
            }
        }

        let sequence = m.sequence.height;
        if !(sequence.is_finite() && sequence > 0.0) {
            return outcome;
        }

        let height = sequence.ceil();
        if height != self.sequence_height {
            self.sequence_height = height;
            outcome.sequence_changed = true;
        }

        // An unsized container contributes its own (possibly zero) height
        let viewport = self.container_height.unwrap_or(m.container.height);
        outcome.copies_changed = self.set_copy_count(copy_count(viewport, sequence));
        outcome
    }

    fn set_copy_count(&mut self, count: usize) -> bool {
        if count == self.copy_count {
            return false;
        }
        self.copy_count = count;
        true
    }
}

/// Counts down outstanding images in the measured copy
///
/// A failed load counts the same as a successful one so layout never waits
/// on a broken image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageLoadTracker {
    remaining: usize,
}

impl ImageLoadTracker {
    pub fn new(total: usize) -> Self {
        Self { remaining: total }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_settled(&self) -> bool {
        self.remaining == 0
    }

    /// Record one load or error; returns true on the call that settles
    pub fn settle_one(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }
}
