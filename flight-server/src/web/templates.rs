//! Askama templates for the web frontend.

use askama::Template;

use super::dto::{FlightLeg, ShortestPathResponse};
use crate::domain::Criterion;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub cities: Vec<CityView>,
    pub criteria: Vec<CriterionView>,
}

impl IndexTemplate {
    pub fn new(cities: Vec<CityView>) -> Self {
        Self {
            cities,
            criteria: Criterion::ALL.iter().map(|c| CriterionView::new(*c)).collect(),
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route result fragment.
#[derive(Template)]
#[template(path = "itinerary.html")]
pub struct ItineraryTemplate {
    pub itinerary: ItineraryView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A city and its airport, for the search form.
#[derive(Debug, Clone)]
pub struct CityView {
    pub city: String,
    pub code: String,
}

/// A criterion option in the search form.
#[derive(Debug, Clone)]
pub struct CriterionView {
    pub value: &'static str,
    pub label: &'static str,
}

impl CriterionView {
    pub fn new(criterion: Criterion) -> Self {
        let label = match criterion {
            Criterion::FewestStops => "Fewest stops",
            Criterion::LowestCost => "Lowest cost",
            Criterion::EarliestArrival => "Shortest travel time",
        };
        Self {
            value: criterion.as_str(),
            label,
        }
    }
}

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct ItineraryView {
    pub path: String,
    pub duration: String,
    pub legs: Vec<LegView>,
    pub summary: String,
}

impl ItineraryView {
    pub fn from_response(response: &ShortestPathResponse) -> Self {
        let summary = match (response.stops, response.total_cost) {
            (Some(1), _) => "Direct flight".to_string(),
            (Some(stops), _) => format!("{stops} flights"),
            (None, Some(cost)) => format!("Total cost {}", format_cost(cost)),
            (None, None) => String::new(),
        };

        Self {
            path: response.path.join(" → "),
            duration: format_minutes(response.duration_minutes),
            legs: response.flights.iter().map(LegView::from_leg).collect(),
            summary,
        }
    }

    pub fn is_trivial(&self) -> bool {
        self.legs.is_empty()
    }
}

/// Flight view model.
#[derive(Debug, Clone)]
pub struct LegView {
    pub flight: String,
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
    pub cost: String,
}

impl LegView {
    pub fn from_leg(leg: &FlightLeg) -> Self {
        Self {
            flight: leg.flight.clone(),
            from: format!("{} ({})", leg.from_city, leg.from),
            to: format!("{} ({})", leg.to_city, leg.to),
            departure: leg.departure.clone(),
            arrival: leg.arrival.clone(),
            cost: format_cost(leg.cost),
        }
    }
}

/// Format minutes as e.g. "5h 10m".
fn format_minutes(minutes: f64) -> String {
    let total = minutes.round() as i64;
    match (total / 60, total % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

fn format_cost(cost: f64) -> String {
    format!("{cost:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(flight: &str, cost: f64) -> FlightLeg {
        FlightLeg {
            from: "DEL".into(),
            to: "BOM".into(),
            from_city: "Delhi".into(),
            to_city: "Mumbai".into(),
            from_airport: "Indira Gandhi International Airport".into(),
            to_airport: "Unknown Airport".into(),
            from_coords: Some([28.5665, 77.1031]),
            to_coords: None,
            departure: "2024-03-15T09:00:00+00:00".into(),
            arrival: "2024-03-15T11:00:00+00:00".into(),
            flight: flight.into(),
            cost,
        }
    }

    fn response(stops: Option<usize>, total_cost: Option<f64>) -> ShortestPathResponse {
        ShortestPathResponse {
            path: vec!["DEL".into(), "BOM".into()],
            duration_minutes: 130.0,
            flights: vec![leg("AI101", 4500.0)],
            stops,
            total_cost,
        }
    }

    #[test]
    fn format_minutes_variants() {
        assert_eq!(format_minutes(45.0), "45m");
        assert_eq!(format_minutes(120.0), "2h");
        assert_eq!(format_minutes(310.0), "5h 10m");
        assert_eq!(format_minutes(0.0), "0m");
    }

    #[test]
    fn summary_depends_on_criterion() {
        let view = ItineraryView::from_response(&response(Some(1), None));
        assert_eq!(view.summary, "Direct flight");

        let view = ItineraryView::from_response(&response(Some(3), None));
        assert_eq!(view.summary, "3 flights");

        let view = ItineraryView::from_response(&response(None, Some(4500.0)));
        assert_eq!(view.summary, "Total cost 4500.00");
    }

    #[test]
    fn leg_view_names_cities() {
        let view = LegView::from_leg(&leg("AI101", 99.5));
        assert_eq!(view.from, "Delhi (DEL)");
        assert_eq!(view.to, "Mumbai (BOM)");
        assert_eq!(view.cost, "99.50");
    }

    #[test]
    fn itinerary_fragment_renders() {
        let template = ItineraryTemplate {
            itinerary: ItineraryView::from_response(&response(None, Some(4500.0))),
        };
        let html = template.render().unwrap();
        assert!(html.contains("AI101"));
        assert!(html.contains("2h 10m"));
        assert!(html.contains("Delhi (DEL)"));
    }

    #[test]
    fn index_lists_cities_and_criteria() {
        let template = IndexTemplate::new(vec![CityView {
            city: "delhi".into(),
            code: "DEL".into(),
        }]);
        let html = template.render().unwrap();
        assert!(html.contains("DEL"));
        assert!(html.contains("minimum_time"));
        assert!(html.contains("Fewest stops"));
    }
}
