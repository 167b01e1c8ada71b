//! Notion integration.
//!
//! - [`NotionClient`] - `reqwest` client implementing
//!   [`crate::domain::repositories::SubmissionRepository`]
//! - [`page`] - JSON shapes of the page-create request and error responses

mod client;
pub mod page;

pub use client::NotionClient;
