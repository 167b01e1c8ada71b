//! Web layer serving the contact form page.
//!
//! Uses Askama templates for server-side rendering of the form states
//! produced by [`crate::form::ContactForm`].
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
