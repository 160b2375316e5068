use crate::data_types::Domain;

/// Monotonic mapping from key-space to pixel-space.
///
/// The evaluator only needs the pixel range, a copy rebound to another domain,
/// and forward evaluation; scale construction and inversion stay with the
/// rendering layer.
pub trait XScale: Clone {
    /// Pixel range as (range_start, range_end).
    fn range(&self) -> (f64, f64);

    /// Copy of this scale bound to `domain`.
    fn with_domain(&self, domain: Domain) -> Self;

    /// key -> pixel.
    fn map(&self, value: f64) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain: pad_degenerate(domain),
            range,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;
        let res = d_min + (pixel - r_min) * (d_max - d_min) / (r_max - r_min);
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }
}

impl XScale for LinearScale {
    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn with_domain(&self, domain: Domain) -> Self {
        Self::new((domain.start, domain.end), self.range)
    }

    fn map(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;
        let res = r_min + (value - d_min) * (r_max - r_min) / (d_max - d_min);
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }
}

fn pad_degenerate((mut d_min, mut d_max): (f64, f64)) -> (f64, f64) {
    if (d_max - d_min).abs() < f64::EPSILON {
        d_min -= 0.5;
        d_max += 0.5;
    }
    (d_min, d_max)
}
