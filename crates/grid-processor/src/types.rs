//! Sampling options and query types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridProcessorError, Result};

/// Interpolation order used by the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationOrder {
    /// Order 0: value of the nearest node.
    Nearest,
    /// Order 1: bilinear blend of the four surrounding nodes.
    #[default]
    Linear,
}

impl FromStr for InterpolationOrder {
    type Err = GridProcessorError;

    /// Parse from a name or spline order (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "nearest" => Ok(Self::Nearest),
            "1" | "linear" | "bilinear" => Ok(Self::Linear),
            other => Err(GridProcessorError::invalid_option(format!(
                "unsupported interpolation order '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for InterpolationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "nearest"),
            Self::Linear => write!(f, "linear"),
        }
    }
}

/// How the grid is extended beyond its edges in index space.
///
/// For an axis `a b c d`:
/// - `Constant`: `k k k k | a b c d | k k k k`, where `k` is `cval`. Any
///   query outside the node range returns `cval` without interpolating.
/// - `Nearest`: `a a a a | a b c d | d d d d`
/// - `Reflect`: `d c b a | a b c d | d c b a`
/// - `Mirror`: `d c b | a b c d | c b a`
/// - `Wrap`: `a b c d | a b c d | a b c d`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    #[default]
    Constant,
    Nearest,
    Reflect,
    Mirror,
    Wrap,
}

impl FromStr for BoundaryMode {
    type Err = GridProcessorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "constant" => Ok(Self::Constant),
            "nearest" | "edge" => Ok(Self::Nearest),
            "reflect" => Ok(Self::Reflect),
            "mirror" => Ok(Self::Mirror),
            "wrap" => Ok(Self::Wrap),
            other => Err(GridProcessorError::invalid_option(format!(
                "unsupported boundary mode '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Constant => "constant",
            Self::Nearest => "nearest",
            Self::Reflect => "reflect",
            Self::Mirror => "mirror",
            Self::Wrap => "wrap",
        };
        write!(f, "{}", name)
    }
}

/// Options forwarded unchanged to the sampler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleOptions {
    pub order: InterpolationOrder,
    pub mode: BoundaryMode,
    /// Fill value for `BoundaryMode::Constant`.
    pub cval: f64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            order: InterpolationOrder::Linear,
            mode: BoundaryMode::Constant,
            cval: 0.0,
        }
    }
}

impl SampleOptions {
    pub fn with_order(mut self, order: InterpolationOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_mode(mut self, mode: BoundaryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_cval(mut self, cval: f64) -> Self {
        self.cval = cval;
        self
    }
}

/// One query axis: a single coordinate or a sequence of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryAxis {
    Scalar(f64),
    Values(Vec<f64>),
}

impl QueryAxis {
    /// Number of coordinates.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Values(v) => v.len(),
        }
    }

    /// Whether the axis holds no coordinates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn single(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Values(v) if v.len() == 1 => Some(v[0]),
            Self::Values(_) => None,
        }
    }

    fn to_vec(&self) -> Vec<f64> {
        match self {
            Self::Scalar(v) => vec![*v],
            Self::Values(v) => v.clone(),
        }
    }
}

impl From<f64> for QueryAxis {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vec<f64>> for QueryAxis {
    fn from(v: Vec<f64>) -> Self {
        Self::Values(v)
    }
}

impl From<&[f64]> for QueryAxis {
    fn from(v: &[f64]) -> Self {
        Self::Values(v.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for QueryAxis {
    fn from(v: [f64; N]) -> Self {
        Self::Values(v.to_vec())
    }
}

/// Expand a pair of query axes to parallel coordinate sequences.
///
/// A single coordinate is repeated to the length of the other axis when that
/// axis holds more than one coordinate.
pub fn broadcast(xq: &QueryAxis, yq: &QueryAxis) -> Result<(Vec<f64>, Vec<f64>)> {
    let (nx, ny) = (xq.len(), yq.len());

    match (xq.single(), yq.single()) {
        (Some(x), _) if ny > 1 => Ok((vec![x; ny], yq.to_vec())),
        (_, Some(y)) if nx > 1 => Ok((xq.to_vec(), vec![y; nx])),
        _ if nx == ny => Ok((xq.to_vec(), yq.to_vec())),
        _ => Err(GridProcessorError::QueryLengthMismatch { x: nx, y: ny }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_str() {
        assert_eq!("bilinear".parse::<InterpolationOrder>().unwrap(), InterpolationOrder::Linear);
        assert_eq!("0".parse::<InterpolationOrder>().unwrap(), InterpolationOrder::Nearest);
        assert!("cubic".parse::<InterpolationOrder>().is_err());
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("REFLECT".parse::<BoundaryMode>().unwrap(), BoundaryMode::Reflect);
        assert_eq!("edge".parse::<BoundaryMode>().unwrap(), BoundaryMode::Nearest);
        assert!("grid-wrap".parse::<BoundaryMode>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for mode in [
            BoundaryMode::Constant,
            BoundaryMode::Nearest,
            BoundaryMode::Reflect,
            BoundaryMode::Mirror,
            BoundaryMode::Wrap,
        ] {
            assert_eq!(mode.to_string().parse::<BoundaryMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_broadcast_scalar_x() {
        let (x, y) = broadcast(&5.0.into(), &vec![1.0, 2.0, 3.0].into()).unwrap();
        assert_eq!(x, vec![5.0, 5.0, 5.0]);
        assert_eq!(y, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_broadcast_single_element_sequence() {
        let (x, y) = broadcast(&vec![1.0, 2.0].into(), &vec![7.0].into()).unwrap();
        assert_eq!(x, vec![1.0, 2.0]);
        assert_eq!(y, vec![7.0, 7.0]);
    }

    #[test]
    fn test_broadcast_two_scalars() {
        let (x, y) = broadcast(&1.0.into(), &2.0.into()).unwrap();
        assert_eq!((x, y), (vec![1.0], vec![2.0]));
    }

    #[test]
    fn test_broadcast_mismatch() {
        let err = broadcast(&vec![1.0, 2.0].into(), &vec![1.0, 2.0, 3.0].into()).unwrap_err();
        assert_eq!(err, GridProcessorError::QueryLengthMismatch { x: 2, y: 3 });
    }

    #[test]
    fn test_broadcast_empty_pair() {
        let (x, y) = broadcast(&Vec::new().into(), &Vec::new().into()).unwrap();
        assert!(x.is_empty() && y.is_empty());
    }
}
