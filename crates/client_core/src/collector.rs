use shared::{
    domain::{FormField, MultiSelectField, SelectOption},
    protocol::TripRequest,
};
use tracing::debug;

use crate::FormSource;

fn selected_values(options: Vec<SelectOption>) -> Vec<String> {
    options
        .into_iter()
        .filter(|option| option.selected)
        .map(|option| option.value)
        .collect()
}

/// Snapshots the form into a fresh request. Nothing is trimmed or validated.
pub fn collect_trip_request(form: &dyn FormSource) -> TripRequest {
    let request = TripRequest {
        origin: form.field_value(FormField::Origin),
        destination: form.field_value(FormField::Destination),
        start: form.field_value(FormField::Start),
        end: form.field_value(FormField::End),
        num_people: form.field_value(FormField::NumPeople),
        activity: selected_values(form.options(MultiSelectField::Activity)),
        food: selected_values(form.options(MultiSelectField::Food)),
    };
    debug!(?request, "collected trip request");
    request
}
