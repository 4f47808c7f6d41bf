//! Common test infrastructure
//!
//! Spawns a fake listings backend over HTTP so the loader can be exercised
//! end to end. Tests should only import from this module, not from internal
//! submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{Behavior, TestServer};
//! use beatmarket_client::load_from_settings;
//!
//! #[tokio::test]
//! async fn test_loads_remote_rows() {
//!     let server = TestServer::spawn(Behavior::Rows(common::remote_project_rows())).await;
//!     let loaded = load_from_settings(Some(&server.settings())).await;
//!     assert!(!loaded.is_fallback());
//! }
//! ```

mod constants;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use constants::*;
pub use fixtures::{remote_project_rows, unused_local_url};
pub use server::{Behavior, TestServer};
