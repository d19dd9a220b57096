use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{GenerateItineraryResponse, TripRequest, GENERATE_ITINERARY_PATH};
use tracing::debug;
use url::Url;

use crate::{ItineraryError, ItineraryService};

/// Posts trip requests to `<service root>/generate-itinerary`.
pub struct HttpItineraryService {
    http: Client,
    endpoint: Url,
}

impl HttpItineraryService {
    /// The endpoint path is resolved against the root of `service_url`, so any
    /// path already on `service_url` is replaced.
    pub fn new(service_url: &str) -> Result<Self, ItineraryError> {
        let endpoint = Url::parse(service_url)?.join(GENERATE_ITINERARY_PATH)?;
        Ok(Self {
            http: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ItineraryService for HttpItineraryService {
    async fn generate_itinerary(
        &self,
        request: &TripRequest,
    ) -> Result<GenerateItineraryResponse, ItineraryError> {
        debug!(endpoint = %self.endpoint, "posting trip request");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(ItineraryError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ItineraryError::Transport)?;
        if !status.is_success() {
            return Err(ItineraryError::Service {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(ItineraryError::Decode)
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
