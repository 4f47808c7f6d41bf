use tracing::{info, warn};

use super::backend::{ProjectsBackend, RestProjectsBackend};
use super::error::LoadError;
use crate::catalog::{fallback_projects, Project};
use crate::config::BackendSettings;

/// Inline notice shown above the listings whenever sample data is in use.
pub const FALLBACK_NOTICE: &str = "Could not connect to database. Displaying sample data.";

#[derive(Debug)]
pub enum DataSource {
    Remote,
    Fallback(LoadError),
}

/// Result of the one-shot startup fetch. The listings are either entirely
/// remote or entirely the fallback set.
#[derive(Debug)]
pub struct LoadedProjects {
    pub projects: Vec<Project>,
    pub source: DataSource,
}

impl LoadedProjects {
    fn fallback(reason: LoadError) -> Self {
        warn!(
            "Failed to fetch projects ({}): {}. Using fallback data.",
            reason.kind(),
            reason
        );
        Self {
            projects: fallback_projects(),
            source: DataSource::Fallback(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, DataSource::Fallback(_))
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.is_fallback().then_some(FALLBACK_NOTICE)
    }
}

/// Fetches the listing collection. Never fails: any problem yields the
/// fallback dataset with the reason attached.
pub async fn load_projects(backend: Option<&dyn ProjectsBackend>) -> LoadedProjects {
    let Some(backend) = backend else {
        return LoadedProjects::fallback(LoadError::MissingConfig);
    };

    match backend.fetch_projects().await {
        Ok(projects) => {
            info!("Loaded {} projects from backend", projects.len());
            LoadedProjects {
                projects,
                source: DataSource::Remote,
            }
        }
        Err(e) => LoadedProjects::fallback(e),
    }
}

/// Builds the REST backend from resolved settings (if any) and loads.
pub async fn load_from_settings(settings: Option<&BackendSettings>) -> LoadedProjects {
    let backend = match settings.map(RestProjectsBackend::new).transpose() {
        Ok(backend) => backend,
        Err(e) => return LoadedProjects::fallback(e),
    };
    load_projects(backend.as_ref().map(|b| b as &dyn ProjectsBackend)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, CliConfig, EnvConfig};
    use async_trait::async_trait;

    struct StaticBackend(Vec<Project>);

    #[async_trait]
    impl ProjectsBackend for StaticBackend {
        async fn fetch_projects(&self) -> Result<Vec<Project>, LoadError> {
            Ok(self.0.clone())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl ProjectsBackend for FailingBackend {
        async fn fetch_projects(&self) -> Result<Vec<Project>, LoadError> {
            Err(LoadError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_missing_backend_falls_back() {
        let loaded = load_projects(None).await;
        assert!(loaded.is_fallback());
        assert!(matches!(
            loaded.source,
            DataSource::Fallback(LoadError::MissingConfig)
        ));
        assert_eq!(loaded.projects, fallback_projects());
        assert_eq!(loaded.notice(), Some(FALLBACK_NOTICE));
    }

    #[tokio::test]
    async fn test_remote_result_is_used_as_is() {
        let mut remote = fallback_projects();
        remote.truncate(1);
        remote[0].title = "Only Remote".to_string();

        let backend = StaticBackend(remote.clone());
        let loaded = load_projects(Some(&backend)).await;

        assert!(!loaded.is_fallback());
        assert_eq!(loaded.notice(), None);
        assert_eq!(loaded.projects, remote);
    }

    #[tokio::test]
    async fn test_empty_remote_is_not_fallback() {
        let backend = StaticBackend(Vec::new());
        let loaded = load_projects(Some(&backend)).await;
        assert!(matches!(loaded.source, DataSource::Remote));
        assert!(loaded.projects.is_empty());
    }

    #[tokio::test]
    async fn test_failing_backend_falls_back() {
        let loaded = load_projects(Some(&FailingBackend)).await;
        assert!(matches!(
            loaded.source,
            DataSource::Fallback(LoadError::Status { status: 503, .. })
        ));
        assert_eq!(loaded.projects.len(), fallback_projects().len());
    }

    #[tokio::test]
    async fn test_load_from_no_settings() {
        let loaded = load_from_settings(None).await;
        assert!(matches!(
            loaded.source,
            DataSource::Fallback(LoadError::MissingConfig)
        ));
    }

    #[tokio::test]
    async fn test_url_without_scheme_falls_back() {
        let env = EnvConfig {
            base_url: Some("myproj.supabase.co".to_string()),
            anon_key: Some("key".to_string()),
        };
        let config = AppConfig::resolve(&CliConfig::default(), None, &env).unwrap();

        let loaded = load_from_settings(config.backend.as_ref()).await;

        assert!(matches!(
            loaded.source,
            DataSource::Fallback(LoadError::InvalidUrl(_))
        ));
        assert_eq!(loaded.notice(), Some(FALLBACK_NOTICE));
        assert_eq!(loaded.projects.len(), fallback_projects().len());
    }
}
