use serde::{Deserialize, Serialize};

/// Path of the itinerary generation endpoint, relative to the service root.
pub const GENERATE_ITINERARY_PATH: &str = "/generate-itinerary";

/// Trip parameters posted to the generation service.
///
/// Scalar fields are carried exactly as typed into the form. `activity` and
/// `food` hold the selected option values in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub start: String,
    pub end: String,
    pub num_people: String,
    pub activity: Vec<String>,
    pub food: Vec<String>,
}

/// Success body of `POST /generate-itinerary`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateItineraryResponse {
    pub itinerary: String,
}
