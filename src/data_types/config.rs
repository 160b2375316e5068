use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::domain::Domain;

/// Custom clamp callback: receives the working domain and the full dataset's
/// (first-key, last-key) pair, returns the domain to use.
pub type ClampFn = fn(Domain, (f64, f64)) -> Domain;

/// How the working domain is bounded against the actual data extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ClampMode {
    #[default]
    None,
    Left,
    Right,
    Both,
    Custom(ClampFn),
}

impl ClampMode {
    pub fn clamps_left(&self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }

    pub fn clamps_right(&self) -> bool {
        matches!(self, Self::Right | Self::Both)
    }

    /// Applies the clamp to `domain` given the dataset extent.
    pub fn apply(&self, domain: Domain, head_tail: (f64, f64)) -> Domain {
        match self {
            Self::Custom(f) => f(domain, head_tail),
            _ => {
                let start = if self.clamps_left() {
                    domain.start.max(head_tail.0)
                } else {
                    domain.start
                };
                let end = if self.clamps_right() {
                    domain.end.min(head_tail.1)
                } else {
                    domain.end
                };
                Domain::new(start, end)
            }
        }
    }
}

// Serialized as "none" | "left" | "right" | "both" | "custom". Deserialization
// also accepts booleans (true -> Both, false -> None) to match the config
// shape charting front ends typically persist. "custom" cannot be restored
// since the callback is not representable and is rejected.
impl Serialize for ClampMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let tag = match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
            Self::Custom(_) => "custom",
        };
        serializer.serialize_str(tag)
    }
}

impl<'de> Deserialize<'de> for ClampMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ClampVisitor;

        impl<'de> Visitor<'de> for ClampVisitor {
            type Value = ClampMode;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a boolean or one of \"none\", \"left\", \"right\", \"both\"")
            }

            fn visit_bool<E>(self, v: bool) -> Result<ClampMode, E>
            where
                E: de::Error,
            {
                Ok(if v { ClampMode::Both } else { ClampMode::None })
            }

            fn visit_str<E>(self, v: &str) -> Result<ClampMode, E>
            where
                E: de::Error,
            {
                match v {
                    "none" => Ok(ClampMode::None),
                    "left" => Ok(ClampMode::Left),
                    "right" => Ok(ClampMode::Right),
                    "both" => Ok(ClampMode::Both),
                    other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(ClampVisitor)
    }
}

/// Evaluator configuration.
///
/// The thresholds are expressed in points per pixel: `points_per_px_threshold`
/// caps how dense a window may get before the evaluator falls back,
/// `min_points_per_px_threshold` how sparse.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowingConfig {
    pub use_whole_data: bool,
    pub clamp: ClampMode,
    pub points_per_px_threshold: f64,
    pub min_points_per_px_threshold: f64,
    pub flip_x_scale: bool,
}

impl Default for WindowingConfig {
    fn default() -> Self {
        Self {
            use_whole_data: false,
            clamp: ClampMode::None,
            points_per_px_threshold: 2.0,
            min_points_per_px_threshold: 1.0 / 100.0,
            flip_x_scale: false,
        }
    }
}
