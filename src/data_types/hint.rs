use super::domain::Domain;

/// Anchor for the end-extrapolation formula: the last rendered item's
/// accessor key and the hint's last-x value, both coerced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackEnd {
    pub last_item_key: f64,
    pub last_item_x: f64,
}

/// Last good render state, consulted when the requested domain degenerates to
/// a single point or the natural slice falls outside the pixel budget.
///
/// All fields are optional; an empty hint disables every fallback branch that
/// needs it.
#[derive(Clone, Debug, PartialEq)]
pub struct FallbackHint<T> {
    pub current_plot_data: Option<Vec<T>>,
    pub current_domain: Option<Domain>,
    pub fallback_start: Option<f64>,
    pub fallback_end: Option<FallbackEnd>,
}

impl<T> Default for FallbackHint<T> {
    fn default() -> Self {
        Self {
            current_plot_data: None,
            current_domain: None,
            fallback_start: None,
            fallback_end: None,
        }
    }
}
