//! Two-pulse magnet debouncer
//!
//! Each floor boundary is marked by a magnet wide enough that the proximity
//! sensor sees two rising edges while the cabin passes it. The first edge
//! arms the debouncer, the second one is the confirmed crossing.
//!
//! Every detected edge opens a guard window. Samples inside the window are
//! ignored entirely, including level changes, so contact bounce right after
//! an edge can neither produce an edge nor clear the remembered level.
//!
//! ```text
//! raw     ___|‾‾‾|___|‾‾‾‾‾‾|______
//! edges      ^1      ^2
//! output     None    Crossed
//! ```

/// Result of observing one sensor sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Crossing {
    /// Nothing to count this cycle
    None,
    /// A floor boundary was crossed
    Crossed,
}

/// Rising-edge pair detector with a time-based guard
#[derive(Debug, Clone)]
pub struct PositionDebouncer {
    /// Guard window after each accepted edge (ms)
    guard_ms: u32,
    /// Sensor level at the last sample outside the guard window
    ///
    /// Starts active, so a cabin parked on a magnet at power-on does not
    /// see an edge when it first moves off.
    last_active: bool,
    /// First edge of a pair seen, waiting for the second
    armed: bool,
    /// Timestamp of the last accepted edge
    last_edge_ms: Option<u64>,
}

impl PositionDebouncer {
    /// Create a debouncer with the given guard window
    pub const fn new(guard_ms: u32) -> Self {
        Self {
            guard_ms,
            last_active: true,
            armed: false,
            last_edge_ms: None,
        }
    }

    /// Feed one raw sample taken at `now_ms` (monotonic)
    pub fn observe(&mut self, raw_active: bool, now_ms: u64) -> Crossing {
        if self.in_guard(now_ms) {
            return Crossing::None;
        }

        let rising = raw_active && !self.last_active;
        self.last_active = raw_active;
        if !rising {
            return Crossing::None;
        }

        self.last_edge_ms = Some(now_ms);
        if self.armed {
            self.armed = false;
            Crossing::Crossed
        } else {
            self.armed = true;
            Crossing::None
        }
    }

    /// Whether `now_ms` falls inside the guard window of the last edge
    pub fn in_guard(&self, now_ms: u64) -> bool {
        match self.last_edge_ms {
            Some(edge) => now_ms.saturating_sub(edge) < u64::from(self.guard_ms),
            None => false,
        }
    }

    /// First edge of a pair has been seen
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Forget a pending first edge
    ///
    /// Called on motion start and on every stop so a stale edge from an
    /// earlier pass never counts toward a new trip.
    pub fn disarm(&mut self) {
        self.armed = false;
    }
}
