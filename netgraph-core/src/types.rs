//! Data model for the edge-list graph.
//!
//! The graph is stored purely as an ordered list of [`Edge`] records. Vertices
//! have no store of their own: a [`VertexIdentity`] is derived from the edges
//! that mention it (see [`crate::directory`]).

use serde::{Serialize, Serializer};
use std::fmt;

/// Numeric vertex identifier as it appears in the input.
pub type VertexId = i64;

/// Integer edge weight. May be negative.
pub type Weight = i64;

/// Accumulator for sums of many weights.
///
/// Wide enough that adding up to 2^64 weights of any value cannot overflow.
pub type WeightSum = i128;

/// A raw input record: `(source id, source name, destination id, destination name, weight)`.
///
/// Field order follows the textual edge-list format.
pub type RawEdge = (VertexId, String, VertexId, String, Weight);

/// A weighted edge between two vertices, carrying both endpoint display names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source_id: VertexId,
    pub dest_id: VertexId,
    pub weight: Weight,
    pub source_name: String,
    pub dest_name: String,
}

impl Edge {
    pub fn new(
        source_id: VertexId,
        source_name: impl Into<String>,
        dest_id: VertexId,
        dest_name: impl Into<String>,
        weight: Weight,
    ) -> Self {
        Self {
            source_id,
            dest_id,
            weight,
            source_name: source_name.into(),
            dest_name: dest_name.into(),
        }
    }

    /// Whether either endpoint is `id`.
    pub fn touches(&self, id: VertexId) -> bool {
        self.source_id == id || self.dest_id == id
    }

    /// Convert back into the raw tuple shape.
    pub fn to_raw(&self) -> RawEdge {
        (
            self.source_id,
            self.source_name.clone(),
            self.dest_id,
            self.dest_name.clone(),
            self.weight,
        )
    }
}

impl From<RawEdge> for Edge {
    fn from((source_id, source_name, dest_id, dest_name, weight): RawEdge) -> Self {
        Self {
            source_id,
            dest_id,
            weight,
            source_name,
            dest_name,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) -> {} ({}) [{}]",
            self.source_id, self.source_name, self.dest_id, self.dest_name, self.weight
        )
    }
}

/// A vertex id together with its display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VertexIdentity {
    pub id: VertexId,
    pub name: String,
}

impl VertexIdentity {
    pub fn new(id: VertexId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Path weight from a source vertex, or the unreachable sentinel.
///
/// `Finite` sorts before `Unreachable`, so every finite distance beats the
/// sentinel in comparisons. Serializes as an integer or `null`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Weight),
    Unreachable,
}

impl Distance {
    /// Narrow a wide path sum, with `None` meaning unreachable.
    ///
    /// Sums outside the `Weight` range are clamped to its nearest bound.
    pub fn from_sum(sum: Option<WeightSum>) -> Distance {
        match sum {
            Some(d) => Distance::Finite(
                Weight::try_from(d).unwrap_or(if d < 0 { Weight::MIN } else { Weight::MAX }),
            ),
            None => Distance::Unreachable,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any.
    pub fn value(&self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_i64(*d),
            Distance::Unreachable => serializer.serialize_none(),
        }
    }
}
