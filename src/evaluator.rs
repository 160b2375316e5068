//! Viewport windowing evaluator.
//!
//! Given a large ordered series, a requested visible domain, and a
//! key-to-pixel scale, decides which contiguous run of points to hand to the
//! renderer and what the effective domain should be, so the chart neither
//! draws more points than pixels can distinguish nor leaves the viewport
//! anomalously empty.

use std::borrow::Cow;

use tracing::debug;

use crate::data_types::{
    Domain, FallbackEnd, FallbackHint, FilterResult, ScaleKey, WindowingConfig,
};
use crate::lookup::closest_item_indexes;
use crate::scales::XScale;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Evaluator {
    config: WindowingConfig,
}

impl Evaluator {
    pub fn new(config: WindowingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WindowingConfig {
        &self.config
    }

    /// Computes the subset of `data` to display for `input_domain` and the
    /// domain to bind the x-scale to.
    ///
    /// `data` must be sorted ascending by accessor key and is expected to be
    /// non-empty; an empty slice degrades to an empty result with the input
    /// domain rather than panicking. Every path returns something renderable.
    /// Identical inputs (hint included) produce identical output.
    pub fn filter_data<'a, T, K, S>(
        &self,
        data: &'a [T],
        input_domain: Domain,
        x_accessor: impl Fn(&T) -> K,
        initial_scale: &S,
        hint: &FallbackHint<T>,
    ) -> FilterResult<'a, T>
    where
        T: Clone,
        K: ScaleKey,
        S: XScale,
    {
        if self.config.use_whole_data || data.is_empty() {
            return FilterResult {
                plot_data: Cow::Borrowed(data),
                domain: input_domain,
            };
        }

        let key = |item: &T| x_accessor(item).coerce();

        let sliced = slice_by_domain(data, input_domain, &key);

        // Degenerate one-point window: restart from the hint's last good start
        // and project the end outward.
        let (working_domain, sliced) = match (sliced.len(), hint.fallback_start, hint.fallback_end)
        {
            (1, Some(start), Some(end_hint)) => {
                let end = extrapolate_end(end_hint, initial_scale, start);
                let widened = Domain::new(start, end);
                (widened, slice_by_domain(data, widened, &key))
            }
            _ => (input_domain, sliced),
        };

        let head_tail = (key(&data[0]), key(&data[data.len() - 1]));
        let clamped_domain = self.config.clamp.apply(working_domain, head_tail);
        let sliced = if clamped_domain != working_domain {
            slice_by_domain(data, clamped_domain, &key)
        } else {
            sliced
        };

        let scale = initial_scale.with_domain(clamped_domain);
        let mut width =
            (scale.map(key(&sliced[sliced.len() - 1])) - scale.map(key(&sliced[0]))).floor();
        if self.config.flip_x_scale && width < 0.0 {
            width = -width;
        }

        let min_allowed = show_min_threshold(width, self.config.min_points_per_px_threshold);
        let max_allowed = show_max_threshold(width, self.config.points_per_px_threshold);

        let (range_start, range_end) = scale.range();
        let chart_width = range_end - range_start;

        debug!(
            target: "evaluator",
            "trying to show {} points in {}px, can show up to {} points in that width; \
             the entire chart is {}px at {} points per px",
            sliced.len(),
            width,
            max_allowed - 1.0,
            chart_width,
            self.config.points_per_px_threshold,
        );

        let count = sliced.len() as f64;
        if count > min_allowed && count < max_allowed {
            debug!(target: "evaluator", "window fits the pixel budget");
            return FilterResult {
                plot_data: Cow::Borrowed(sliced),
                domain: clamped_domain,
            };
        }

        if chart_width > max_allowed {
            if let Some(end_hint) = hint.fallback_end {
                // The natural data end would under-fill the available width;
                // stretch the requested end outward instead of dropping points.
                let new_end = extrapolate_end(end_hint, initial_scale, clamped_domain.start);
                let domain = Domain::new(clamped_domain.start, new_end);
                let new_scale = scale.with_domain(domain);
                let new_width = (new_scale.map(key(&sliced[sliced.len() - 1]))
                    - new_scale.map(key(&sliced[0])))
                .floor();
                debug!(
                    target: "evaluator",
                    "over budget, stretching the end to show {} points in {}px",
                    sliced.len(),
                    new_width,
                );
                return FilterResult {
                    plot_data: Cow::Borrowed(sliced),
                    domain,
                };
            }
        }

        // Last resort: the previously cached window if the hint carries one,
        // else the tail of the slice trimmed to the pixel budget. The 0.97
        // margin keeps edge rounding from pushing the count back over the
        // threshold.
        let plot_data: Cow<'a, [T]> = match &hint.current_plot_data {
            Some(cached) => Cow::Owned(cached.clone()),
            None => {
                let keep = show_max(width, self.config.points_per_px_threshold);
                let start = sliced.len().saturating_sub(keep);
                Cow::Borrowed(&sliced[start..])
            }
        };
        let domain = hint.current_domain.unwrap_or_else(|| {
            match (plot_data.first(), plot_data.last()) {
                (Some(head), Some(tail)) => Domain::new(key(head), key(tail)),
                _ => clamped_domain,
            }
        });
        debug!(
            target: "evaluator",
            "over budget, falling back to {} points",
            plot_data.len(),
        );

        FilterResult { plot_data, domain }
    }

    /// Validating variant of [`Self::filter_data`].
    ///
    /// Additive strictness layer: rejects empty data and non-finite thresholds
    /// up front, then delegates unchanged. The lenient entry point keeps its
    /// degrade-gracefully behavior.
    pub fn filter_data_strict<'a, T, K, S>(
        &self,
        data: &'a [T],
        input_domain: Domain,
        x_accessor: impl Fn(&T) -> K,
        initial_scale: &S,
        hint: &FallbackHint<T>,
    ) -> eyre::Result<FilterResult<'a, T>>
    where
        T: Clone,
        K: ScaleKey,
        S: XScale,
    {
        eyre::ensure!(!data.is_empty(), "cannot window an empty dataset");
        eyre::ensure!(
            self.config.points_per_px_threshold.is_finite(),
            "points_per_px_threshold must be finite, got {}",
            self.config.points_per_px_threshold
        );
        eyre::ensure!(
            self.config.min_points_per_px_threshold.is_finite(),
            "min_points_per_px_threshold must be finite, got {}",
            self.config.min_points_per_px_threshold
        );
        Ok(self.filter_data(data, input_domain, x_accessor, initial_scale, hint))
    }
}

/// Projects how far past `start` the visible window must extend so that, at
/// the points-per-pixel density implied by the fallback anchor, the chart
/// fills its pixel range.
///
/// The divisor subtracts the pixel-space range start from the anchor's
/// key-space x. The mixing is carried over literally from long-standing chart
/// behavior; rendered output depends on it, do not re-derive.
pub fn extrapolate_end<S: XScale>(fallback_end: FallbackEnd, initial_scale: &S, start: f64) -> f64 {
    let (range_start, range_end) = initial_scale.range();
    (range_end - range_start) / (fallback_end.last_item_x - range_start)
        * (fallback_end.last_item_key - start)
        + start
}

/// Contiguous run of `data` whose keys fall within `domain`, using closest
/// at-or-before for the left bound and closest at-or-after for the right.
fn slice_by_domain<'a, T, F>(data: &'a [T], domain: Domain, key: &F) -> &'a [T]
where
    F: Fn(&T) -> f64,
{
    if data.is_empty() {
        return data;
    }
    let left = closest_item_indexes(data, domain.start, key).before;
    let right = closest_item_indexes(data, domain.end, key).after;
    &data[left..=right]
}

fn show_min_threshold(width: f64, threshold: f64) -> f64 {
    (width * threshold).ceil().max(1.0)
}

fn show_max_threshold(width: f64, threshold: f64) -> f64 {
    (width * threshold).floor()
}

fn show_max(width: f64, threshold: f64) -> usize {
    (show_max_threshold(width, threshold) * 0.97).floor() as usize
}
