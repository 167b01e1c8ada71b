//! Domain layer containing the submission model and its rules.
//!
//! # Architecture
//!
//! - [`entities`] - Submission and record data structures
//! - [`repositories`] - The forwarding contract implemented by infrastructure
//! - [`validation`] - Field format rules shared by the form and the handler
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
pub mod validation;
