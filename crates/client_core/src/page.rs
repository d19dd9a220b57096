//! In-memory stand-in for the planner page, used by the CLI and tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
};

use shared::domain::{FormField, MultiSelectField, Region, SelectOption};

use crate::{FormSource, ItineraryView, SubmitEvent};

/// A single mutation applied to the page, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOp {
    SetVisible(Region, bool),
    SetResultHtml(String),
    SetErrorText(String),
    ScrollIntoView(Region),
}

#[derive(Default)]
struct PageState {
    fields: HashMap<FormField, String>,
    options: HashMap<MultiSelectField, Vec<SelectOption>>,
    visible: HashSet<Region>,
    result_html: String,
    error_text: String,
    ops: Vec<ViewOp>,
}

/// Form values and region state held in memory. All regions start hidden.
#[derive(Default)]
pub struct MemoryPage {
    state: Mutex<PageState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_field(self, field: FormField, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn with_options(self, field: MultiSelectField, options: Vec<SelectOption>) -> Self {
        self.set_options(field, options);
        self
    }

    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.lock().fields.insert(field, value.into());
    }

    pub fn set_options(&self, field: MultiSelectField, options: Vec<SelectOption>) {
        self.lock().options.insert(field, options);
    }

    /// Visible regions in `Region::ALL` order.
    pub fn visible_regions(&self) -> Vec<Region> {
        let state = self.lock();
        Region::ALL
            .iter()
            .copied()
            .filter(|region| state.visible.contains(region))
            .collect()
    }

    pub fn result_html(&self) -> String {
        self.lock().result_html.clone()
    }

    pub fn error_text(&self) -> String {
        self.lock().error_text.clone()
    }

    pub fn ops(&self) -> Vec<ViewOp> {
        self.lock().ops.clone()
    }
}

impl FormSource for MemoryPage {
    fn field_value(&self, field: FormField) -> String {
        self.lock().fields.get(&field).cloned().unwrap_or_default()
    }

    fn options(&self, field: MultiSelectField) -> Vec<SelectOption> {
        self.lock().options.get(&field).cloned().unwrap_or_default()
    }
}

impl ItineraryView for MemoryPage {
    fn set_visible(&self, region: Region, visible: bool) {
        let mut state = self.lock();
        if visible {
            state.visible.insert(region);
        } else {
            state.visible.remove(&region);
        }
        state.ops.push(ViewOp::SetVisible(region, visible));
    }

    fn set_result_html(&self, html: &str) {
        let mut state = self.lock();
        state.result_html = html.to_string();
        state.ops.push(ViewOp::SetResultHtml(html.to_string()));
    }

    fn set_error_text(&self, text: &str) {
        let mut state = self.lock();
        state.error_text = text.to_string();
        state.ops.push(ViewOp::SetErrorText(text.to_string()));
    }

    fn scroll_into_view(&self, region: Region) {
        self.lock().ops.push(ViewOp::ScrollIntoView(region));
    }
}

/// Submit event that records whether its default action was suppressed.
#[derive(Debug, Default)]
pub struct FormSubmission {
    default_prevented: AtomicBool,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }
}

impl SubmitEvent for FormSubmission {
    fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }
}
