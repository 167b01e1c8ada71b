//! Contact form state machine.
//!
//! ```text
//!            edit / reset            edit         2xx + JSON body
//!   ┌──────────────────────┐   submit    ┌────────────┐ ─────────────▶ Submitted
//!   │         Idle         │ ──────────▶ │ Submitting │
//!   └──────────────────────┘             └────────────┘ ─────────────▶ Failed
//!     ▲       │ invalid draft                             non-2xx, network
//!     │       ▼                                           or parse failure
//!     └──── Failed / Submitted  (edit or reset)
//! ```

use crate::api::dto::submission::SubmissionRequest;
use crate::domain::validation::{check_contact_fields, fits_phone_field, normalize_phone};
use crate::form::transport::{SubmissionTransport, TransportError, TransportResponse};

/// Shown for every non-2xx answer, whatever the body says.
pub const SUBMISSION_FAILED: &str = "Form Submission Failed";

/// Shown when a failure has no message of its own.
pub const GENERIC_FAILURE: &str = "There was an error submitting the form. Please try again.";

/// Editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    /// Fields in the order they are shown.
    pub const ALL: [Field; 3] = [Field::Name, Field::Phone, Field::Email];

    /// Placeholder text of the field's input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Phone => "Phone Number",
            Field::Email => "E-mail",
        }
    }
}

/// Current field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl FormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
        }
    }

    fn to_request(&self) -> SubmissionRequest {
        SubmissionRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

/// Result of [`ContactForm::edit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// The phone value was too long; the draft is unchanged.
    Rejected,
}

/// What the form shows. The two variants are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView<'a> {
    /// Acknowledgment only; the form is no longer shown.
    Success,
    Form {
        draft: &'a FormDraft,
        /// The submit control is disabled while this is true.
        loading: bool,
        error: Option<&'a str>,
    },
}

/// A contact form: the draft plus the phase of the current submission.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: FormDraft,
    phase: FormPhase,
}

impl ContactForm {
    /// Creates an empty, idle form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn view(&self) -> FormView<'_> {
        if self.is_submitted() {
            FormView::Success
        } else {
            FormView::Form {
                draft: &self.draft,
                loading: self.is_loading(),
                error: self.error(),
            }
        }
    }

    /// Sets one field of the draft.
    ///
    /// Phone values are normalized first (see [`normalize_phone`]) and dropped
    /// if still longer than 12 characters. An applied edit returns a failed or
    /// submitted form to [`FormPhase::Idle`]. While a submission is in flight
    /// the edit lands in the draft and the phase is left alone.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> EditOutcome {
        let value = value.into();
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Phone => {
                let phone = normalize_phone(&value);
                if !fits_phone_field(&phone) {
                    return EditOutcome::Rejected;
                }
                self.draft.phone = phone;
            }
        }

        if !self.is_loading() {
            self.phase = FormPhase::Idle;
        }
        EditOutcome::Applied
    }

    /// Clears the draft and returns to [`FormPhase::Idle`].
    ///
    /// Has no effect while a submission is in flight.
    pub fn reset(&mut self) {
        if self.is_loading() {
            return;
        }
        self.draft = FormDraft::default();
        self.phase = FormPhase::Idle;
    }

    /// Validates the draft and, if it passes, enters [`FormPhase::Submitting`].
    ///
    /// Returns the payload to send, or `None` when nothing must be sent: the
    /// draft failed validation (the form is now [`FormPhase::Failed`]) or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmissionRequest> {
        if self.is_loading() {
            tracing::debug!("Submit ignored, a submission is already in flight");
            return None;
        }

        if let Err(e) = check_contact_fields(&self.draft.phone, &self.draft.email) {
            self.phase = FormPhase::Failed(e.to_string());
            return None;
        }

        self.phase = FormPhase::Submitting;
        Some(self.draft.to_request())
    }

    /// Applies the outcome of the request started by [`Self::begin_submit`].
    ///
    /// Always leaves [`FormPhase::Submitting`]. The draft is cleared only on
    /// success.
    pub fn finish_submit(&mut self, result: Result<TransportResponse, TransportError>) {
        if !self.is_loading() {
            tracing::warn!("Submission result received while not submitting, ignoring");
            return;
        }

        let response = match result {
            Ok(response) => response,
            Err(e) => return self.fail(e.to_string()),
        };

        tracing::info!(status = response.status, body = %response.body, "Response text");

        if !response.is_success() {
            return self.fail(SUBMISSION_FAILED.to_string());
        }

        match serde_json::from_str::<serde_json::Value>(&response.body) {
            Ok(_) => {
                self.phase = FormPhase::Submitted;
                self.draft = FormDraft::default();
            }
            Err(e) => self.fail(e.to_string()),
        }
    }

    /// Validates, sends and applies the result in one step.
    ///
    /// No request is made if [`Self::begin_submit`] returns `None`.
    pub async fn submit<T>(&mut self, transport: &T) -> &FormPhase
    where
        T: SubmissionTransport + ?Sized,
    {
        if let Some(request) = self.begin_submit() {
            let result = transport.send(&request).await;
            self.finish_submit(result);
        }
        &self.phase
    }

    fn fail(&mut self, message: String) {
        tracing::error!(error = %message, "Error during form submission");
        let message = if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        };
        self.phase = FormPhase::Failed(message);
    }
}
