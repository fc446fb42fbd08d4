//! Scheduled flight edges.

use chrono::Duration;

use super::{AirportCode, FlightError, Timestamp};

/// One scheduled flight instance: a directed, time-stamped edge of the
/// flight graph.
///
/// Flight numbers are not unique. The same number flown on different days is
/// a separate edge, and two edges may connect the same pair of airports.
///
/// # Invariants
///
/// - `arrival > departure`
/// - `cost` is finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct FlightEdge {
    from: AirportCode,
    to: AirportCode,
    departure: Timestamp,
    arrival: Timestamp,
    flight_number: String,
    cost: f64,
}

impl FlightEdge {
    /// Create a flight edge, validating the schedule and fare.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::{parse_instant, AirportCode, FlightEdge};
    ///
    /// let edge = FlightEdge::new(
    ///     AirportCode::parse("DEL").unwrap(),
    ///     AirportCode::parse("BOM").unwrap(),
    ///     parse_instant("2024-03-15T09:00:00Z").unwrap(),
    ///     parse_instant("2024-03-15T11:00:00Z").unwrap(),
    ///     "AI101".to_string(),
    ///     4500.0,
    /// )
    /// .unwrap();
    /// assert_eq!(edge.duration().num_minutes(), 120);
    /// ```
    pub fn new(
        from: AirportCode,
        to: AirportCode,
        departure: Timestamp,
        arrival: Timestamp,
        flight_number: String,
        cost: f64,
    ) -> Result<Self, FlightError> {
        if arrival <= departure {
            return Err(FlightError::NonPositiveDuration);
        }
        if !cost.is_finite() {
            return Err(FlightError::InvalidCost(cost));
        }
        if cost < 0.0 {
            return Err(FlightError::InvalidCost(cost));
        }

        Ok(Self {
            from,
            to,
            departure,
            arrival,
            flight_number,
            cost,
        })
    }

    /// Origin airport.
    pub fn from(&self) -> &AirportCode {
        &self.from
    }

    /// Destination airport.
    pub fn to(&self) -> &AirportCode {
        &self.to
    }

    /// Scheduled departure instant.
    pub fn departure(&self) -> Timestamp {
        self.departure
    }

    /// Scheduled arrival instant.
    pub fn arrival(&self) -> Timestamp {
        self.arrival
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Time in the air. Always positive.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Returns true if this edge connects `from` to `to`.
    pub fn connects(&self, from: &AirportCode, to: &AirportCode) -> bool {
        &self.from == from && &self.to == to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_instant;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn at(s: &str) -> Timestamp {
        parse_instant(s).unwrap()
    }

    #[test]
    fn valid_edge() {
        let edge = FlightEdge::new(
            code("DEL"),
            code("BOM"),
            at("2024-03-15T09:00:00Z"),
            at("2024-03-15T11:15:00Z"),
            "6E201".into(),
            3999.5,
        )
        .unwrap();

        assert_eq!(edge.from(), &code("DEL"));
        assert_eq!(edge.to(), &code("BOM"));
        assert_eq!(edge.flight_number(), "6E201");
        assert_eq!(edge.cost(), 3999.5);
        assert_eq!(edge.duration(), Duration::minutes(135));
        assert!(edge.connects(&code("DEL"), &code("BOM")));
        assert!(!edge.connects(&code("BOM"), &code("DEL")));
    }

    #[test]
    fn duration_across_offsets() {
        // 09:00Z to 16:00+05:30 is 90 minutes
        let edge = FlightEdge::new(
            code("DXB"),
            code("DEL"),
            at("2024-03-15T09:00:00Z"),
            at("2024-03-15T16:00:00+05:30"),
            "EK510".into(),
            0.0,
        )
        .unwrap();
        assert_eq!(edge.duration(), Duration::minutes(90));
    }

    #[test]
    fn reject_zero_duration() {
        let result = FlightEdge::new(
            code("DEL"),
            code("BOM"),
            at("2024-03-15T09:00:00Z"),
            at("2024-03-15T09:00:00Z"),
            "AI1".into(),
            100.0,
        );
        assert_eq!(result, Err(FlightError::NonPositiveDuration));
    }

    #[test]
    fn reject_arrival_before_departure() {
        let result = FlightEdge::new(
            code("DEL"),
            code("BOM"),
            at("2024-03-15T11:00:00Z"),
            at("2024-03-15T09:00:00Z"),
            "AI1".into(),
            100.0,
        );
        assert_eq!(result, Err(FlightError::NonPositiveDuration));
    }

    #[test]
    fn reject_bad_cost() {
        for cost in [-1.0, f64::NAN, f64::INFINITY] {
            let result = FlightEdge::new(
                code("DEL"),
                code("BOM"),
                at("2024-03-15T09:00:00Z"),
                at("2024-03-15T11:00:00Z"),
                "AI1".into(),
                cost,
            );
            assert!(matches!(result, Err(FlightError::InvalidCost(_))));
        }
    }
}
