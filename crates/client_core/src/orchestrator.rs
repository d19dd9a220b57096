//! Submission lifecycle: loading feedback, the service round-trip, and the
//! final success or error rendering.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, MutexGuard, PoisonError,
};

use shared::domain::Region;
use tracing::{debug, error, info};

use crate::{
    collect_trip_request, format_itinerary, FormSource, ItineraryHtml, ItineraryService,
    ItineraryView, SubmitEvent,
};

pub const GENERIC_ERROR_MESSAGE: &str =
    "Sorry, there was an error generating your itinerary. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(ItineraryHtml),
    Error,
}

impl UiState {
    /// The only region shown in this state. `Idle` shows none.
    pub fn visible_region(&self) -> Option<Region> {
        match self {
            Self::Idle => None,
            Self::Loading => Some(Region::Loading),
            Self::Success(_) => Some(Region::Result),
            Self::Error => Some(Region::Error),
        }
    }
}

/// Applies `state` to the view. Regions are hidden before content is written
/// and the visible region is shown last.
pub fn render(view: &dyn ItineraryView, state: &UiState) {
    let visible = state.visible_region();
    for region in Region::ALL {
        if Some(*region) != visible {
            view.set_visible(*region, false);
        }
    }

    match state {
        UiState::Success(html) => view.set_result_html(html.as_str()),
        UiState::Error => view.set_error_text(GENERIC_ERROR_MESSAGE),
        UiState::Idle | UiState::Loading => {}
    }

    if let Some(region) = visible {
        view.set_visible(region, true);
    }
    if matches!(state, UiState::Success(_)) {
        view.scroll_into_view(Region::Result);
    }
}

/// How a submission cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Rendered(UiState),
    /// A newer submission started while this one was in flight; its result was dropped.
    Superseded,
}

pub struct PlannerOrchestrator {
    form: Arc<dyn FormSource>,
    view: Arc<dyn ItineraryView>,
    service: Arc<dyn ItineraryService>,
    state: Mutex<UiState>,
    generation: AtomicU64,
}

impl PlannerOrchestrator {
    pub fn new(
        form: Arc<dyn FormSource>,
        view: Arc<dyn ItineraryView>,
        service: Arc<dyn ItineraryService>,
    ) -> Self {
        Self {
            form,
            view,
            service,
            state: Mutex::new(UiState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, UiState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> UiState {
        self.lock_state().clone()
    }

    /// Renders `next` and records it. Callers hold the state lock so renders
    /// from concurrent cycles never interleave.
    fn transition(&self, state: &mut UiState, next: UiState) {
        render(self.view.as_ref(), &next);
        *state = next;
    }

    /// Runs one submission cycle.
    ///
    /// Everything up to the service call happens before the first await, so
    /// the loading region is already shown when the request goes out.
    pub async fn submit(&self, event: &dyn SubmitEvent) -> CycleOutcome {
        event.prevent_default();
        let request = collect_trip_request(self.form.as_ref());
        let generation = {
            let mut state = self.lock_state();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            self.transition(&mut state, UiState::Loading);
            generation
        };

        info!(
            generation,
            origin = %request.origin,
            destination = %request.destination,
            "requesting itinerary"
        );
        let result = self.service.generate_itinerary(&request).await;

        let mut state = self.lock_state();
        let latest = self.generation.load(Ordering::SeqCst);
        if latest != generation {
            debug!(
                generation,
                latest,
                error = ?result.as_ref().err(),
                "discarding superseded itinerary result"
            );
            return CycleOutcome::Superseded;
        }

        let next = match result {
            Ok(body) => {
                info!(generation, bytes = body.itinerary.len(), "received itinerary");
                UiState::Success(format_itinerary(&body.itinerary))
            }
            Err(err) => {
                error!(generation, error = %err, "itinerary generation failed");
                UiState::Error
            }
        };
        self.transition(&mut state, next.clone());
        CycleOutcome::Rendered(next)
    }
}

#[cfg(test)]
#[path = "tests/orchestrator_tests.rs"]
mod tests;
