//! Route planner over a flight catalog.
//!
//! Three searches answer the three query criteria:
//!
//! - fewest stops: breadth-first search, schedules ignored
//! - lowest cost: Dijkstra on fares, schedules ignored
//! - earliest arrival: A* on elapsed time, honouring a minimum connection
//!
//! [`Planner`] dispatches a query to the right one and assembles the
//! resulting [`Itinerary`](crate::domain::Itinerary).

mod assemble;
mod config;
mod cost;
mod fastest;
mod geo;
mod search;
mod stops;


pub use assemble::{assemble, path_cost, path_duration, total_cost, total_duration};
pub use config::SearchConfig;
pub use cost::{CheapestRoute, cheapest};
pub use fastest::{TimedRoute, fastest};
pub use geo::{DEFAULT_CRUISE_SPEED_KMH, EARTH_RADIUS_KM, GeoHeuristic, haversine_km};
pub use search::{CancelFlag, Explored, Planner, SearchError, SearchResult};
pub use stops::fewest_stops;

pub use crate::domain::Criterion;
