//! Host observation hooks
//!
//! The animator never touches a real display surface. The host wires its
//! platform events (element resize, image load/error, window resize) to an
//! [`Observer`] and supplies numeric measurements through a
//! [`MeasureSource`](crate::measure::MeasureSource).

/// Receives layout notifications from the host
pub trait Observer {
    /// The container or the measured copy changed size
    fn on_resize(&mut self);

    /// Everything inside the measured copy finished loading (or failed to)
    fn on_content_settled(&mut self);
}

/// How the host is able to observe size changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ObserveMode {
    /// Per-element resize observation is available
    #[default]
    ElementResize,
    /// Only global viewport resize events are available
    WindowResize,
}

impl ObserveMode {
    /// Whether mounting measures synchronously instead of deferring
    pub fn measures_at_mount(&self) -> bool {
        matches!(self, ObserveMode::WindowResize)
    }
}
