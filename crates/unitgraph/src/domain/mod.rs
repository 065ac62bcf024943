//! Domain types for unit dependency graphs.
//!
//! This module contains the identifiers and edge relations shared by the
//! loader, the analysis algorithms and the output layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a unit (a node of the dependency graph)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub String);

impl UnitId {
    /// Create a new unit ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw label
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UnitId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UnitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for UnitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Kind of dependency relationship carried by an edge.
///
/// The first five variants are the relation kinds recognized by the weight
/// table. Anything else a dump may contain (`Requisite`, `PartOf`, ...) is
/// kept verbatim in [`Relation::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Hard requirement
    Requires,

    /// Soft requirement
    Wants,

    /// Ordering: source starts before target
    Before,

    /// Ordering: source starts after target
    After,

    /// Source and target cannot run together
    Conflicts,

    /// Any relation kind outside the fixed set
    Other(String),
}

impl Relation {
    /// Map a `systemd-analyze dot` edge color to the relation it encodes.
    ///
    /// Returns `None` for colors the dump format does not use.
    pub fn from_dot_color(color: &str) -> Option<Self> {
        match color {
            "green" => Some(Self::After),
            "black" => Some(Self::Requires),
            "grey66" => Some(Self::Wants),
            "red" => Some(Self::Conflicts),
            "darkblue" => Some(Self::Other("Requisite".to_string())),
            _ => None,
        }
    }

    /// The canonical name of this relation kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Requires => "Requires",
            Self::Wants => "Wants",
            Self::Before => "Before",
            Self::After => "After",
            Self::Conflicts => "Conflicts",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = std::convert::Infallible;

    /// Parse a relation name. Known kinds match case-insensitively; any other
    /// name becomes [`Relation::Other`] and never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let relation = match s.to_ascii_lowercase().as_str() {
            "requires" => Self::Requires,
            "wants" => Self::Wants,
            "before" => Self::Before,
            "after" => Self::After,
            "conflicts" => Self::Conflicts,
            _ => Self::Other(s.to_string()),
        };
        Ok(relation)
    }
}

impl Serialize for Relation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Relation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(name.parse().unwrap_or_else(|never| match never {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Requires", Relation::Requires)]
    #[case("wants", Relation::Wants)]
    #[case("BEFORE", Relation::Before)]
    #[case("After", Relation::After)]
    #[case("Conflicts", Relation::Conflicts)]
    #[case("PartOf", Relation::Other("PartOf".to_string()))]
    fn test_relation_from_str(#[case] input: &str, #[case] expected: Relation) {
        let parsed: Relation = input.parse().unwrap();
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("green", Some(Relation::After))]
    #[case("black", Some(Relation::Requires))]
    #[case("grey66", Some(Relation::Wants))]
    #[case("red", Some(Relation::Conflicts))]
    #[case("darkblue", Some(Relation::Other("Requisite".to_string())))]
    #[case("purple", None)]
    fn test_relation_from_dot_color(#[case] color: &str, #[case] expected: Option<Relation>) {
        assert_eq!(Relation::from_dot_color(color), expected);
    }

    #[test]
    fn test_relation_serializes_as_name() {
        let json = serde_json::to_string(&Relation::Wants).unwrap();
        assert_eq!(json, "\"Wants\"");

        let back: Relation = serde_json::from_str("\"Requisite\"").unwrap();
        assert_eq!(back, Relation::Other("Requisite".to_string()));
    }

    #[test]
    fn test_unit_id_display() {
        let id = UnitId::new("sshd.service");
        assert_eq!(id.to_string(), "sshd.service");
        assert_eq!(id.as_str(), "sshd.service");
    }
}
