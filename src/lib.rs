//! # Contact Form
//!
//! A marketing-site contact form and the serverless-style endpoint that
//! forwards each submission to a Notion database, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Submission entities, field rules and the
//!   forwarding contract
//! - **Application Layer** ([`application`]) - Configuration checks and record
//!   forwarding
//! - **Infrastructure Layer** ([`infrastructure`]) - Notion API client
//! - **API Layer** ([`api`]) - The `POST /api/notion` handler, DTOs and middleware
//! - **Web Layer** ([`web`]) - Server-rendered contact form page
//! - **Form** ([`form`]) - Client-side form state machine and HTTP transport
//!
//! The handler is stateless: each request is checked, forwarded once and
//! answered. Nothing is persisted and nothing is retried.
//!
//! ## Quick Start
//!
//! ```bash
//! export NOTION_SECRET="secret_..."
//! export NOTION_DB="0123456789abcdef0123456789abcdef"
//!
//! # Start the service
//! cargo run
//!
//! # Submit from the terminal
//! cargo run --bin contact -- --endpoint http://localhost:3000/api/notion
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod form;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::SubmissionService;
    pub use crate::config::NotionConfig;
    pub use crate::domain::entities::{ContactRecord, CreatedRecord, DatabaseTarget, Submission};
    pub use crate::error::AppError;
    pub use crate::form::{ContactForm, Field, FormPhase, HttpTransport};
    pub use crate::infrastructure::notion::NotionClient;
    pub use crate::state::AppState;
}
