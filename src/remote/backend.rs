//! HTTP client for the remote listing store.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::error::LoadError;
use super::keys::camelize_keys;
use crate::catalog::Project;
use crate::config::BackendSettings;

/// Something that can hand back the full listing collection.
#[async_trait]
pub trait ProjectsBackend: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>, LoadError>;
}

/// PostgREST-style backend: `GET {base}/rest/v1/projects?select=*`.
pub struct RestProjectsBackend {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl RestProjectsBackend {
    pub fn new(settings: &BackendSettings) -> Result<Self, LoadError> {
        let url = settings.base_url.as_str();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(LoadError::InvalidUrl(url.to_string()));
        }
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_sec) = settings.timeout_sec {
            builder = builder.timeout(Duration::from_secs(timeout_sec));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            anon_key: settings.anon_key.clone(),
        })
    }

    pub fn projects_url(&self) -> String {
        format!("{}/rest/v1/projects?select=*", self.base_url)
    }

    fn headers(&self) -> Result<HeaderMap, LoadError> {
        let invalid = |e: reqwest::header::InvalidHeaderValue| {
            LoadError::MalformedBody(format!("invalid anon key header: {}", e))
        };
        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(&self.anon_key).map_err(invalid)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.anon_key)).map_err(invalid)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

/// Pulls a human readable message out of an error body, if there is one.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Rewrites the wire keys and maps the body into listings. Any row that
/// does not fit fails the whole body.
pub fn parse_projects_body(body: &str) -> Result<Vec<Project>, LoadError> {
    let raw: Value =
        serde_json::from_str(body).map_err(|e| LoadError::MalformedBody(e.to_string()))?;
    if !raw.is_array() {
        return Err(LoadError::MalformedBody(
            "expected a JSON array of projects".to_string(),
        ));
    }
    serde_json::from_value(camelize_keys(raw)).map_err(|e| LoadError::MalformedBody(e.to_string()))
}

#[async_trait]
impl ProjectsBackend for RestProjectsBackend {
    async fn fetch_projects(&self) -> Result<Vec<Project>, LoadError> {
        let url = self.projects_url();
        debug!("Fetching projects from {}", url);

        let response = self.client.get(&url).headers(self.headers()?).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LoadError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body = response.text().await?;
        parse_projects_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str) -> BackendSettings {
        BackendSettings {
            base_url: base_url.to_string(),
            anon_key: "anon".to_string(),
            timeout_sec: None,
        }
    }

    #[test]
    fn test_projects_url_trims_trailing_slash() {
        let backend = RestProjectsBackend::new(&settings("https://example.supabase.co/")).unwrap();
        assert_eq!(
            backend.projects_url(),
            "https://example.supabase.co/rest/v1/projects?select=*"
        );
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let result = RestProjectsBackend::new(&settings("myproj.supabase.co"));
        assert!(matches!(result, Err(LoadError::InvalidUrl(url)) if url == "myproj.supabase.co"));
    }

    #[test]
    fn test_headers_carry_key_twice() {
        let backend = RestProjectsBackend::new(&settings("http://localhost")).unwrap();
        let headers = backend.headers().unwrap();
        assert_eq!(headers.get("apikey").unwrap(), "anon");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer anon");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message":"Invalid API key"}"#),
            "Invalid API key"
        );
        assert_eq!(error_message("<html>oops</html>"), "Unknown error");
        assert_eq!(error_message(r#"{"code":42}"#), "Unknown error");
    }

    #[test]
    fn test_parse_projects_body_snake_case() {
        let body = r#"[{
            "id": "r1", "title": "Remote", "producer": "Someone",
            "price": 20, "bpm": 100, "key": "E Minor", "genre": "Drill",
            "sub_genre": "UK Drill", "type": "beat_tape", "tags": ["uk"],
            "created_at": "2024-05-01",
            "tracks": [{"id": "rt1", "title": "One", "duration": 120, "waveform_data": [0.5]}],
            "licenses": [{"id": "rl1", "type": "MP3", "name": "Basic", "price": 20,
                          "features": [], "file_types_included": ["MP3"], "contract_id": "ct-lease"}]
        }]"#;

        let projects = parse_projects_body(body).unwrap();
        assert_eq!(projects.len(), 1);
        let p = &projects[0];
        assert_eq!(p.sub_genre.as_deref(), Some("UK Drill"));
        assert_eq!(p.created.as_deref(), Some("2024-05-01"));
        assert_eq!(p.tracks[0].waveform_data, Some(vec![0.5]));
        assert_eq!(p.licenses[0].contract_id.as_deref(), Some("ct-lease"));
    }

    #[test]
    fn test_parse_projects_body_rejects_non_array() {
        let err = parse_projects_body(r#"{"id": "x"}"#).unwrap_err();
        assert_eq!(err.kind(), "malformed_body");
    }

    #[test]
    fn test_parse_projects_body_rejects_bad_row() {
        // second row has no title: the whole body is rejected
        let body = r#"[
            {"id": "a", "title": "A", "producer": "P", "price": 1, "bpm": 1,
             "key": "C", "genre": "G", "type": "beat_tape"},
            {"id": "b", "producer": "P", "price": 1, "bpm": 1,
             "key": "C", "genre": "G", "type": "beat_tape"}
        ]"#;
        assert!(matches!(
            parse_projects_body(body),
            Err(LoadError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_parse_projects_body_rejects_garbage() {
        assert!(matches!(
            parse_projects_body("not json"),
            Err(LoadError::MalformedBody(_))
        ));
    }
}
