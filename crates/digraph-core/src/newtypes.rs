/// Newtype wrappers for node identifiers and node positions.
///
/// [`NodeId`] serializes as a bare JSON integer so graph documents stay
/// compatible with the `{"Nodes": [{"id": 0}]}` layout. [`Position`] uses the
/// comma-separated `"x,y,z"` string form of the same document format and
/// re-validates on deserialization, so malformed coordinates cannot enter the
/// type system from untrusted JSON.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Weight of a directed edge.
///
/// Every edge stored in a [`crate::DiGraph`] carries a finite, non-negative
/// weight; [`crate::DiGraph::add_edge`] rejects anything else.
pub type Weight = f64;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Unique non-negative integer identifier of a graph node.
///
/// `0` is a valid id. Ordering follows the numeric value, which is what every
/// "smallest id wins" tie-break in the algorithms relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw integer id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<NodeId> for u64 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Errors produced when parsing a [`Position`] from its string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The string did not contain two or three comma-separated components.
    #[error("invalid position {got:?}: expected 2 or 3 comma-separated numbers")]
    WrongArity {
        /// The input that was rejected.
        got: String,
    },
    /// A component was not a finite number.
    #[error("invalid position component {component:?} in {got:?}")]
    InvalidComponent {
        /// The offending component, trimmed.
        component: String,
        /// The full input that was rejected.
        got: String,
    },
}

/// Optional layout coordinate attached to a node.
///
/// Algorithms never read it; it only survives load/save round trips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Depth coordinate; `0` when the source only supplied two components.
    pub z: f64,
}

impl Position {
    /// Creates a position from its three components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(PositionError::WrongArity { got: s.to_owned() });
        }

        let mut coords = [0.0_f64; 3];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            let value = part
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| PositionError::InvalidComponent {
                    component: (*part).to_owned(),
                    got: s.to_owned(),
                })?;
            *slot = value;
        }

        let [x, y, z] = coords;
        Ok(Self { x, y, z })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
