/// Half-width of the square window searched around an unreachable target.
///
/// Tuned value carried over from the client; not derived from the scene size.
pub const APPROX_WINDOW_RADIUS: i32 = 10;

/// Substitute targets this many steps or more from the start are rejected.
///
/// Tuned value carried over from the client; not derived from the scene size.
pub const APPROX_MAX_HOPS: i32 = 100;

/// Tunables of a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// See [`APPROX_WINDOW_RADIUS`]. A negative radius disables the fallback.
    pub approx_radius: i32,
    /// See [`APPROX_MAX_HOPS`].
    pub approx_max_hops: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            approx_radius: APPROX_WINDOW_RADIUS,
            approx_max_hops: APPROX_MAX_HOPS,
        }
    }
}

impl SearchConfig {
    /// Set the fallback window radius (builder).
    pub const fn with_approx_radius(mut self, radius: i32) -> Self {
        self.approx_radius = radius;
        self
    }

    /// Set the fallback hop cap (builder).
    pub const fn with_approx_max_hops(mut self, hops: i32) -> Self {
        self.approx_max_hops = hops;
        self
    }

    /// Exact targets only: unreachable targets yield an empty path.
    pub const fn exact() -> Self {
        Self {
            approx_radius: -1,
            approx_max_hops: APPROX_MAX_HOPS,
        }
    }
}
