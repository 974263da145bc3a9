//! Service-dependent form fields.

use crate::dom::Control;

/// Selection value that reveals the dependent fields by default.
pub const DEFAULT_SENTINEL: &str = "Flow Meter Calibration";

/// Shows and requires extra fields only for one particular service.
#[derive(Debug, Clone)]
pub struct ServiceFields<E> {
    select: E,
    container: E,
    fields: Vec<E>,
    sentinel: String,
}

impl<E: Control> ServiceFields<E> {
    /// Create a toggler. Without both the selection control and the
    /// container there is nothing to toggle, so callers skip construction.
    pub fn new(select: E, container: E, fields: Vec<E>) -> Self {
        Self {
            select,
            container,
            fields,
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }

    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn select(&self) -> &E {
        &self.select
    }

    /// Sync the dependent fields with the current selection and return
    /// whether they are shown.
    ///
    /// Hiding also clears the fields, so stale values never get submitted.
    pub fn check(&self) -> bool {
        let selected = self.select.value() == self.sentinel;

        if selected {
            self.container.set_style("display", "block");
            for field in &self.fields {
                field.set_required(true);
            }
        } else {
            self.container.set_style("display", "none");
            for field in &self.fields {
                field.set_required(false);
                field.set_value("");
            }
        }

        selected
    }
}
