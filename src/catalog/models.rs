//! Listing models.
//!
//! Field names follow the in-app camelCase shape; the remote loader rewrites
//! the backend's snake_case keys before deserializing into these types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Enumerations
// =============================================================================

/// Distinguishes beat tapes from sound packs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    BeatTape,
    SoundPack,
}

impl ProjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::BeatTape => "Beat Tape",
            ProjectKind::SoundPack => "Sound Pack",
        }
    }
}

/// Publication lifecycle of a listing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    Published,
}

/// Deliverable file type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Mp3,
    Wav,
    Stems,
}

/// License tier type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LicenseType {
    Mp3,
    Wav,
    Stems,
    Unlimited,
}

// =============================================================================
// Core Entities
// =============================================================================

/// File references attached to a track (mock ids or URLs).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackFiles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mp3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wav: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stems: Option<String>,
}

/// A single playable item inside a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub title: String,
    /// Duration in seconds.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waveform_data: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<TrackFiles>,
}

/// A license offer attached to a listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub license_type: LicenseType,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub file_types_included: Vec<FileType>,
}

/// A marketplace listing: a beat tape or a sound pack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub producer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Display price, usually the cheapest license.
    pub price: f64,
    pub bpm: u32,
    pub key: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_genre: Option<String>,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub licenses: Vec<LicenseInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl Project {
    pub fn track(&self, track_id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    pub fn license(&self, license_id: &str) -> Option<&LicenseInfo> {
        self.licenses.iter().find(|l| l.id == license_id)
    }

    pub fn first_track_id(&self) -> Option<&str> {
        self.tracks.first().map(|t| t.id.as_str())
    }

    /// Sum of all track durations, in seconds.
    pub fn total_duration(&self) -> u32 {
        self.tracks.iter().map(|t| t.duration).sum()
    }
}
