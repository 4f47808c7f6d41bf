mod backend;
mod error;
mod keys;
mod loader;

pub use backend::{parse_projects_body, ProjectsBackend, RestProjectsBackend};
pub use error::LoadError;
pub use keys::{camelize_keys, model_key, snake_to_camel, KEY_EXCEPTIONS};
pub use loader::{load_from_settings, load_projects, DataSource, LoadedProjects, FALLBACK_NOTICE};
