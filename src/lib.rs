//! chart_windowing crate: viewport data windowing for charting

pub mod data_types;
pub mod evaluator;
pub mod lookup;
pub mod scales;

pub use data_types::{
    ClampFn, ClampMode, Domain, FallbackEnd, FallbackHint, FilterResult, ScaleKey, WindowingConfig,
};
pub use evaluator::{extrapolate_end, Evaluator};
pub use scales::{LinearScale, XScale};
