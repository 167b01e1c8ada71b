//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::submission_service::SubmissionService`] - Configuration checks
//!   and record forwarding for contact form submissions

pub mod services;
