use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentProfile {
    pub id: String,
    pub username: String,
    pub handle: String,
    pub avatar: String,
    pub role: String,
    pub tags: Vec<String>,
    /// Preformatted, e.g. "12.4K"
    pub followers: String,
    #[serde(default)]
    pub is_verified: bool,
}

fn talent(
    id: &str,
    username: &str,
    handle: &str,
    role: &str,
    tags: &[&str],
    followers: &str,
    is_verified: bool,
) -> TalentProfile {
    TalentProfile {
        id: id.to_string(),
        username: username.to_string(),
        handle: handle.to_string(),
        avatar: format!("avatars/{}.png", id),
        role: role.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        followers: followers.to_string(),
        is_verified,
    }
}

pub fn mock_talent() -> Vec<TalentProfile> {
    vec![
        talent(
            "tl-soraya",
            "Soraya Beats",
            "@soraya",
            "Producer",
            &["R&B", "Soul"],
            "8.2K",
            true,
        ),
        talent(
            "tl-kairo",
            "Kairo",
            "@kairo",
            "Producer",
            &["Drill", "Trap"],
            "21K",
            true,
        ),
        talent(
            "tl-lomotion",
            "Lo Motion",
            "@lomotion",
            "Sound Designer",
            &["Lo-Fi", "Samples"],
            "3.9K",
            false,
        ),
        talent(
            "tl-vera",
            "Vera Lux",
            "@veralux",
            "Vocalist",
            &["Pop", "Topline"],
            "15.7K",
            true,
        ),
        talent(
            "tl-dex",
            "Dex Ortega",
            "@dexmix",
            "Mix Engineer",
            &["Mixing", "Mastering"],
            "5.1K",
            false,
        ),
    ]
}

/// Talent whose role, name or tags contain `query` (case-insensitive).
pub fn search_talent<'a>(talent: &'a [TalentProfile], query: &str) -> Vec<&'a TalentProfile> {
    let query = query.trim().to_lowercase();
    talent
        .iter()
        .filter(|t| {
            query.is_empty()
                || t.username.to_lowercase().contains(&query)
                || t.role.to_lowercase().contains(&query)
                || t.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .collect()
}
