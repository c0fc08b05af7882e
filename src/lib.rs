//! Client for the local backend API.
//!
//! Two things matter here: the operations never raise to their caller
//! (failures degrade to an empty list or a synthesized error object), and
//! payloads stay opaque JSON owned by the backend.

pub mod api_client;
pub mod config;
pub mod error;
pub mod logging;

pub use api_client::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
