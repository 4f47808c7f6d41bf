//! Static sample listings shown when the backend can't be reached.

use super::models::{
    FileType, LicenseInfo, LicenseType, Project, ProjectKind, ProjectStatus, Track, TrackFiles,
};

fn track(id: &str, title: &str, duration: u32) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        duration,
        waveform_data: Some(waveform(id, 48)),
        files: Some(TrackFiles {
            mp3: Some(format!("{}.mp3", id)),
            wav: Some(format!("{}.wav", id)),
            stems: None,
        }),
    }
}

/// Deterministic pseudo waveform so sample tracks render with some shape.
fn waveform(seed: &str, samples: usize) -> Vec<f32> {
    let seed = seed.bytes().fold(7u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    (0..samples)
        .map(|i| {
            let v = seed.wrapping_mul(i as u32 + 1).wrapping_add(i as u32 * 17) % 100;
            0.2 + (v as f32 / 100.0) * 0.8
        })
        .collect()
}

fn standard_licenses(project_id: &str, base_price: f64) -> Vec<LicenseInfo> {
    vec![
        LicenseInfo {
            id: format!("{}-mp3", project_id),
            license_type: LicenseType::Mp3,
            name: "Basic Lease".to_string(),
            price: base_price,
            contract_id: Some("ct-lease".to_string()),
            features: vec![
                "Tagged MP3".to_string(),
                "Up to 5,000 streams".to_string(),
                "Non-profit performances".to_string(),
            ],
            file_types_included: vec![FileType::Mp3],
        },
        LicenseInfo {
            id: format!("{}-wav", project_id),
            license_type: LicenseType::Wav,
            name: "Premium Lease".to_string(),
            price: base_price + 20.0,
            contract_id: Some("ct-lease".to_string()),
            features: vec![
                "Untagged WAV".to_string(),
                "Up to 50,000 streams".to_string(),
                "Music video rights".to_string(),
            ],
            file_types_included: vec![FileType::Mp3, FileType::Wav],
        },
        LicenseInfo {
            id: format!("{}-stems", project_id),
            license_type: LicenseType::Stems,
            name: "Trackout".to_string(),
            price: base_price + 70.0,
            contract_id: Some("ct-lease".to_string()),
            features: vec![
                "Tracked-out stems".to_string(),
                "Unlimited streams".to_string(),
                "Radio broadcasting".to_string(),
            ],
            file_types_included: vec![FileType::Mp3, FileType::Wav, FileType::Stems],
        },
        LicenseInfo {
            id: format!("{}-unlimited", project_id),
            license_type: LicenseType::Unlimited,
            name: "Exclusive Rights".to_string(),
            price: base_price + 250.0,
            contract_id: Some("ct-exclusive".to_string()),
            features: vec![
                "Full ownership transfer".to_string(),
                "Beat removed from store".to_string(),
            ],
            file_types_included: vec![FileType::Mp3, FileType::Wav, FileType::Stems],
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    producer: &str,
    kind: ProjectKind,
    genre: &str,
    key: &str,
    bpm: u32,
    price: f64,
    tags: &[&str],
    tracks: Vec<Track>,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        producer: producer.to_string(),
        cover_image: None,
        price,
        bpm,
        key: key.to_string(),
        genre: genre.to_string(),
        sub_genre: None,
        kind,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        tracks,
        description: None,
        notes: None,
        licenses: standard_licenses(id, price),
        status: Some(ProjectStatus::Published),
        created: Some("2024-03-01".to_string()),
    }
}

/// The sample dataset used whenever the remote listing source is unavailable.
pub fn fallback_projects() -> Vec<Project> {
    let mut midnight = project(
        "p1",
        "Midnight Protocol",
        "Mani Rae",
        ProjectKind::BeatTape,
        "Trap",
        "C Minor",
        140,
        29.99,
        &["808", "trap", "dark"],
        vec![
            track("p1-t1", "Midnight Protocol", 184),
            track("p1-t2", "Neon Static", 171),
            track("p1-t3", "Ghost Signal", 203),
        ],
    );
    midnight.sub_genre = Some("Dark Trap".to_string());
    midnight.description = Some("Cold, cinematic trap built around distorted 808s.".to_string());

    let mut velvet = project(
        "p2",
        "Velvet Hours",
        "Soraya Beats",
        ProjectKind::BeatTape,
        "R&B",
        "F Major",
        92,
        34.99,
        &["smooth", "guitar", "late night"],
        vec![
            track("p2-t1", "Velvet Hours", 198),
            track("p2-t2", "Slow Burn", 176),
        ],
    );
    velvet.sub_genre = Some("Alt R&B".to_string());

    let drill = project(
        "p3",
        "Concrete Jungle",
        "Kairo",
        ProjectKind::BeatTape,
        "Drill",
        "G# Minor",
        144,
        24.99,
        &["trap", "uk", "sliding 808"],
        vec![
            track("p3-t1", "Concrete Jungle", 162),
            track("p3-t2", "Block Report", 158),
        ],
    );

    let mut dust = project(
        "p4",
        "Dusty Tapes Vol. 1",
        "Lo Motion",
        ProjectKind::SoundPack,
        "Lo-Fi",
        "A Minor",
        85,
        19.99,
        &["vinyl", "chill", "samples"],
        vec![
            track("p4-t1", "Tape Warmth Demo", 64),
            track("p4-t2", "Rhodes Loop Demo", 58),
        ],
    );
    dust.description = Some("42 dusty one-shots and 18 melodic loops.".to_string());

    let pop = project(
        "p5",
        "Sunset Boulevard",
        "Mani Rae",
        ProjectKind::BeatTape,
        "Pop",
        "D Major",
        118,
        39.99,
        &["upbeat", "radio", "summer"],
        vec![
            track("p5-t1", "Sunset Boulevard", 189),
            track("p5-t2", "Golden Hour", 201),
        ],
    );

    let mut drums = project(
        "p6",
        "808 Arsenal",
        "Kairo",
        ProjectKind::SoundPack,
        "Trap",
        "C Minor",
        150,
        14.99,
        &["808", "drums", "one-shots"],
        vec![track("p6-t1", "Arsenal Demo", 72)],
    );
    drums.status = Some(ProjectStatus::Draft);

    vec![midnight, velvet, drill, dust, pop, drums]
}
