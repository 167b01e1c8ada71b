//! Contact form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::form::{ContactForm, FormView};

/// Path the page posts submissions to.
pub const SUBMISSION_ENDPOINT: &str = "/api/notion";

/// Template for the contact form page.
///
/// Renders `templates/contact.html` from a [`FormView`]: either the success
/// acknowledgment, or the form with its current values, loading flag and
/// inline error.
#[derive(Debug, Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub submitted: bool,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub loading: bool,
    pub error: Option<String>,
    pub endpoint: &'static str,
}

impl From<FormView<'_>> for ContactTemplate {
    fn from(view: FormView<'_>) -> Self {
        match view {
            FormView::Success => Self {
                submitted: true,
                name: String::new(),
                phone: String::new(),
                email: String::new(),
                loading: false,
                error: None,
                endpoint: SUBMISSION_ENDPOINT,
            },
            FormView::Form {
                draft,
                loading,
                error,
            } => Self {
                submitted: false,
                name: draft.name.clone(),
                phone: draft.phone.clone(),
                email: draft.email.clone(),
                loading,
                error: error.map(str::to_string),
                endpoint: SUBMISSION_ENDPOINT,
            },
        }
    }
}

/// Renders the empty contact form.
///
/// # Endpoint
///
/// `GET /`
///
/// The page validates and posts to [`SUBMISSION_ENDPOINT`] from the browser.
pub async fn contact_handler() -> impl IntoResponse {
    ContactTemplate::from(ContactForm::new().view())
}
