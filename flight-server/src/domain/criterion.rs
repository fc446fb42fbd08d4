//! Optimisation criteria for route queries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The objective a route query optimises for.
///
/// The wire names (`minimum_stops`, `minimum_cost`, `minimum_time`) are what
/// the HTTP API accepts in its `filter` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion {
    /// Fewest connections, ignoring schedules.
    #[serde(rename = "minimum_stops")]
    FewestStops,

    /// Lowest total fare, ignoring schedules.
    #[serde(rename = "minimum_cost")]
    LowestCost,

    /// Earliest arrival, respecting the minimum connection time.
    #[serde(rename = "minimum_time")]
    EarliestArrival,
}

impl Criterion {
    /// All criteria, in wire order.
    pub const ALL: [Criterion; 3] = [
        Criterion::FewestStops,
        Criterion::LowestCost,
        Criterion::EarliestArrival,
    ];

    /// Parse a wire name. Returns `None` for anything unrecognised.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "minimum_stops" => Some(Criterion::FewestStops),
            "minimum_cost" => Some(Criterion::LowestCost),
            "minimum_time" => Some(Criterion::EarliestArrival),
            _ => None,
        }
    }

    /// The wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::FewestStops => "minimum_stops",
            Criterion::LowestCost => "minimum_cost",
            Criterion::EarliestArrival => "minimum_time",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_wire_names() {
        for criterion in Criterion::ALL {
            assert_eq!(Criterion::parse(criterion.as_str()), Some(criterion));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(Criterion::parse("fastest"), None);
        assert_eq!(Criterion::parse("MINIMUM_COST"), None);
        assert_eq!(Criterion::parse(""), None);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Criterion::EarliestArrival).unwrap();
        assert_eq!(json, "\"minimum_time\"");

        let parsed: Criterion = serde_json::from_str("\"minimum_stops\"").unwrap();
        assert_eq!(parsed, Criterion::FewestStops);
    }
}
