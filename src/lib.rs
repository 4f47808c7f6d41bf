//! Beatmarket Client Library
//!
//! Listings, search, playback selection, the contract editor and the
//! session controller behind the `beatmarket` terminal client.

pub mod app;
pub mod catalog;
pub mod cli_style;
pub mod config;
pub mod contracts;
pub mod playback;
pub mod remote;
pub mod search;
pub mod ui;
pub mod user;

// Re-export commonly used types for convenience
pub use app::{AppState, Page, View};
pub use catalog::{fallback_projects, Project, Track};
pub use contracts::{Contract, ContractEditor, ContractField};
pub use remote::{load_from_settings, load_projects, LoadedProjects, ProjectsBackend};
pub use search::{filter_projects, FilterState};
