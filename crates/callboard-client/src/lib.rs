//! Network and configuration layer for callboard.
//!
//! Loads event data for the signup form and the lineup board, and posts
//! collected signups to the site's form-handling endpoint.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod loader;
pub mod submit;

pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use loader::{DataLoader, DataSource};
pub use submit::{FormEndpoint, HttpEndpoint, Notifier, SubmitOutcome, Submitter};
