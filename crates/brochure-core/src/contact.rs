//! Asynchronous contact form submission.
//!
//! Submission follows `Idle -> Sending -> (Succeeded | Failed) -> Idle`.
//! While a request is in flight the submit control is disabled; that is the
//! only guard against duplicate submissions. Requests are never retried or
//! cancelled.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::{
    dom::{Control, Form},
    error::Result,
};

/// Status area class after a successful submission.
pub const STATUS_SUCCESS_CLASS: &str = "form-status success";

/// Status area class after a failed submission.
pub const STATUS_ERROR_CLASS: &str = "form-status error";

/// Field values of a form, in document order. Names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload(Vec<(String, String)>);

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// HTTP-level outcome of a submission. The body is never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
}

impl TransportResponse {
    pub fn new(status: u16) -> Self {
        Self { status }
    }

    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a form payload to its endpoint.
///
/// Implementations POST the fields as multipart form data with an
/// `Accept: application/json` header. `Err` covers every failure to obtain
/// a response at all.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(&self, endpoint: &str, payload: &FormPayload) -> Result<TransportResponse>;
}

/// User-visible copy of the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormMessages {
    /// Submit label while a request is in flight.
    #[serde(default = "default_sending")]
    pub sending: String,

    /// Status text after a successful submission.
    #[serde(default = "default_success")]
    pub success: String,

    /// Status text after any failure.
    #[serde(default = "default_failure")]
    pub failure: String,

    /// Label restored after a submission. Defaults to the label the submit
    /// control had when the form was mounted.
    #[serde(default)]
    pub submit_label: Option<String>,
}

fn default_sending() -> String {
    "Sending...".to_string()
}

fn default_success() -> String {
    "Message sent successfully.".to_string()
}

fn default_failure() -> String {
    "Failed to send message.".to_string()
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            sending: default_sending(),
            success: default_success(),
            failure: default_failure(),
            submit_label: None,
        }
    }
}

/// Where a contact form is in its submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

/// Contact form controller.
#[derive(Debug)]
pub struct ContactForm<E, T> {
    form: E,
    submit: Option<E>,
    status: Option<E>,
    transport: T,
    messages: FormMessages,
    label: String,
    phase: Cell<FormPhase>,
}

impl<E, T> ContactForm<E, T>
where
    E: Form + Control,
    T: Transport,
{
    /// Create a controller. The submit control's current label is kept for
    /// restoring unless `messages.submit_label` overrides it.
    pub fn new(
        form: E,
        submit: Option<E>,
        status: Option<E>,
        transport: T,
        messages: FormMessages,
    ) -> Self {
        let label = messages
            .submit_label
            .clone()
            .or_else(|| submit.as_ref().map(|button| button.text()))
            .unwrap_or_default();

        Self {
            form,
            submit,
            status,
            transport,
            messages,
            label,
            phase: Cell::new(FormPhase::Idle),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    pub fn form(&self) -> &E {
        &self.form
    }

    /// Submit the current field values and report the outcome.
    ///
    /// Returns `Succeeded` or `Failed`; the controller itself is back in
    /// `Idle` by the time this resolves.
    pub async fn submit(&self) -> FormPhase {
        self.phase.set(FormPhase::Sending);
        if let Some(button) = &self.submit {
            button.set_disabled(true);
            button.set_text(&self.messages.sending);
        }

        let endpoint = self.form.action();
        let payload = self.form.payload();
        log::debug!("submitting {} fields to {endpoint}", payload.len());

        let outcome = match self.transport.post(&endpoint, &payload).await {
            Ok(response) if response.ok() => FormPhase::Succeeded,
            Ok(response) => {
                log::warn!("contact form rejected: HTTP {}", response.status);
                FormPhase::Failed
            }
            Err(err) => {
                log::warn!("contact form failed: {err}");
                FormPhase::Failed
            }
        };
        self.phase.set(outcome);

        if outcome == FormPhase::Succeeded {
            self.report(&self.messages.success, STATUS_SUCCESS_CLASS);
            self.form.reset();
        } else {
            self.report(&self.messages.failure, STATUS_ERROR_CLASS);
        }

        if let Some(button) = &self.submit {
            button.set_disabled(false);
            button.set_text(&self.label);
        }

        self.phase.set(FormPhase::Idle);
        outcome
    }

    fn report(&self, message: &str, class_name: &str) {
        if let Some(status) = &self.status {
            status.set_text(message);
            status.set_class_name(class_name);
        }
    }
}
