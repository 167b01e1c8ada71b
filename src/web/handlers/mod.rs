//! HTML template rendering handlers.

mod contact;

pub use contact::{ContactTemplate, SUBMISSION_ENDPOINT, contact_handler};
