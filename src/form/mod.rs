//! Contact form UI logic.
//!
//! The form is an explicit state machine ([`ContactForm`]) that owns the draft
//! and the phase of the current submission. It talks to the submission
//! endpoint through [`SubmissionTransport`], so the same logic drives the
//! terminal client (`src/bin/contact.rs`) and the tests.
//!
//! ```rust,ignore
//! let transport = HttpTransport::new("http://localhost:3000/api/notion")?;
//! let mut form = ContactForm::new();
//! form.edit(Field::Name, "Jane Doe");
//! form.edit(Field::Phone, "+15551234567");
//! form.edit(Field::Email, "jane@example.com");
//! form.submit(&transport).await;
//! assert!(form.is_submitted());
//! ```

pub mod state;
pub mod transport;

pub use state::{ContactForm, EditOutcome, Field, FormDraft, FormPhase, FormView};
pub use transport::{HttpTransport, SubmissionTransport, TransportError, TransportResponse};
