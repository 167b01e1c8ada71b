//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`notion`] - Notion API client forwarding contact records

pub mod notion;
