//! Xtreme Assignment Client Library
//!
//! An async Rust client for the data-assignment API of the Xtreme labeling
//! platform. Assignments link the data items of a dataset to the users
//! responsible for labeling them.
//!
//! # Features
//!
//! - **Assignments**: assign data, list assignments, remove an assignment,
//!   check whether a user may access a data item
//! - **Raw responses**: the server's payload is returned untouched, with a
//!   typed [`HttpResponse::json`] helper for callers that want to decode it
//! - **Pluggable transport**: the default transport wraps `reqwest`; any
//!   [`transport::HttpTransport`] implementation can be swapped in
//! - **Observability**: tracing spans, structured logging, request metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xtreme_client::{AssignDataRequest, AssignmentQuery, XtremeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = XtremeClient::builder()
//!         .base_url("https://xtreme.example.com")
//!         .token("my-session-token")
//!         .build()?;
//!
//!     client
//!         .assignments()
//!         .assign(&AssignDataRequest::new(1, 2, vec![10, 11]))
//!         .await?;
//!
//!     let page = client
//!         .assignments()
//!         .list(&AssignmentQuery::new().dataset_id(1).page_size(50))
//!         .await?;
//!     println!("{}", page.text());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{XtremeClient, XtremeClientBuilder};
pub use config::XtremeConfig;
pub use errors::{XtremeError, XtremeResult};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, TransportError};

// Type re-exports
pub use types::assignments::{AssignDataRequest, Assignment, AssignmentQuery};
pub use types::common::Page;

/// Mock implementations for testing.
pub mod mocks;
