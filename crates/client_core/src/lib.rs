use async_trait::async_trait;
use shared::{
    domain::{FormField, MultiSelectField, Region, SelectOption},
    protocol::{GenerateItineraryResponse, TripRequest},
};

pub mod collector;
pub mod error;
pub mod formatter;
pub mod orchestrator;
pub mod page;
pub mod transport;

pub use collector::collect_trip_request;
pub use error::ItineraryError;
pub use formatter::{format_itinerary, ItineraryHtml};
pub use orchestrator::{CycleOutcome, PlannerOrchestrator, UiState, GENERIC_ERROR_MESSAGE};
pub use page::{FormSubmission, MemoryPage, ViewOp};
pub use transport::HttpItineraryService;

/// Read access to the current values of the planner form.
pub trait FormSource: Send + Sync {
    /// Raw value of a scalar input, exactly as typed.
    fn field_value(&self, field: FormField) -> String;

    /// Every option of a multi-select control in document order, selected or not.
    fn options(&self, field: MultiSelectField) -> Vec<SelectOption>;
}

/// The three display regions and the mutations the orchestrator performs on them.
pub trait ItineraryView: Send + Sync {
    fn set_visible(&self, region: Region, visible: bool);
    fn set_result_html(&self, html: &str);
    fn set_error_text(&self, text: &str);
    /// Brings `region` into the viewport with smooth scrolling.
    fn scroll_into_view(&self, region: Region);
}

/// A form submission event whose default navigation can be suppressed.
pub trait SubmitEvent: Send + Sync {
    fn prevent_default(&self);
}

#[async_trait]
pub trait ItineraryService: Send + Sync {
    async fn generate_itinerary(
        &self,
        request: &TripRequest,
    ) -> Result<GenerateItineraryResponse, ItineraryError>;
}
