use thiserror::Error;

/// Why an itinerary request did not produce an itinerary.
///
/// Every variant renders the same generic message to the user; the detail is
/// for logs only.
#[derive(Debug, Error)]
pub enum ItineraryError {
    #[error("invalid itinerary service url: {0}")]
    InvalidServiceUrl(#[from] url::ParseError),
    #[error("itinerary request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("itinerary service responded with status {status}: {body}")]
    Service { status: u16, body: String },
    #[error("malformed itinerary response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ItineraryError {
    /// HTTP status of a service failure, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}
