//! Data access trait definitions.
//!
//! Traits define the contract the application layer relies on; the
//! infrastructure layer provides the implementations.

pub mod submission_repository;

pub use submission_repository::{ForwardError, SubmissionRepository, UNKNOWN_ERROR_DETAILS};

#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
