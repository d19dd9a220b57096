//! Identifiers of the page elements the planner reads from and renders into.

/// Element id of the form whose submission starts a planning cycle.
pub const FORM_ELEMENT_ID: &str = "userInputForm";

macro_rules! element_ids {
    ($name:ident { $($variant:ident => $id:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn element_id(self) -> &'static str {
                match self {
                    $($name::$variant => $id,)+
                }
            }
        }
    };
}

element_ids!(FormField {
    Origin => "origin",
    Destination => "destination",
    Start => "start",
    End => "end",
    NumPeople => "numPeople",
});

element_ids!(MultiSelectField {
    Activity => "activity",
    Food => "food",
});

element_ids!(Region {
    Result => "itineraryResult",
    Loading => "loadingMessage",
    Error => "errorMessage",
});

/// One `<option>` of a multi-select control, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            selected,
        }
    }
}
