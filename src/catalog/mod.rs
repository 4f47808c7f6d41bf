mod fallback;
mod models;

pub use fallback::fallback_projects;
pub use models::{
    FileType, LicenseInfo, LicenseType, Project, ProjectKind, ProjectStatus, Track, TrackFiles,
};
