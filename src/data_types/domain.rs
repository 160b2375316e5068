use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::key::ScaleKey;

/// Requested visible range along the key axis, in coerced key-space.
///
/// `start <= end` is assumed by downstream comparisons but not enforced by
/// construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub start: f64,
    pub end: f64,
}

impl Domain {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Builds a domain from raw keys, coercing at the boundary.
    pub fn from_keys<K: ScaleKey>(start: &K, end: &K) -> Self {
        Self {
            start: start.coerce(),
            end: end.coerce(),
        }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

impl From<(f64, f64)> for Domain {
    fn from((start, end): (f64, f64)) -> Self {
        Self { start, end }
    }
}

/// Output of the evaluator: the contiguous run of points to render and the
/// domain to bind the x-scale to.
///
/// Borrows the input slice on the common paths; owns data only when a cached
/// window from a [`FallbackHint`](super::FallbackHint) is returned.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterResult<'a, T: Clone> {
    pub plot_data: Cow<'a, [T]>,
    pub domain: Domain,
}
