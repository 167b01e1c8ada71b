//! Core domain entities.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`Submission`] - The three fields entered in the contact form
//! - [`ContactRecord`] - A submission stamped with its handling time
//! - [`DatabaseTarget`] - Where and with which credentials a record is created
//! - [`CreatedRecord`] - The record returned by the external service

pub mod submission;

pub use submission::{ContactRecord, CreatedRecord, DatabaseTarget, Submission};
