use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{fallback_projects, Project};
use crate::config::ProfileSettings;

/// Gems granted by one daily claim.
pub const DAILY_GEMS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub features: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SoundPackKind {
    #[serde(rename = "Drum Kit")]
    DrumKit,
    #[serde(rename = "Loop Kit")]
    LoopKit,
    #[serde(rename = "Preset Bank")]
    PresetBank,
}

impl SoundPackKind {
    pub fn label(&self) -> &'static str {
        match self {
            SoundPackKind::DrumKit => "Drum Kit",
            SoundPackKind::LoopKit => "Loop Kit",
            SoundPackKind::PresetBank => "Preset Bank",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundPack {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SoundPackKind,
    pub price: f64,
    pub file_size: String,
    pub item_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub avatar: String,
    pub banner: String,
    pub subscribers: u64,
    pub gems: u64,
    pub balance: f64,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub sound_packs: Vec<SoundPack>,
}

impl UserProfile {
    /// Overrides display identity with configured values.
    pub fn with_settings(mut self, settings: &ProfileSettings) -> Self {
        if let Some(username) = &settings.username {
            self.username = username.clone();
        }
        if let Some(handle) = &settings.handle {
            self.handle = handle.clone();
        }
        self
    }
}

pub fn mock_profile() -> UserProfile {
    let username = "Mani Rae".to_string();
    let projects = fallback_projects()
        .into_iter()
        .filter(|p| p.producer == username)
        .collect();

    UserProfile {
        username,
        handle: "@manirae".to_string(),
        location: Some("Atlanta, GA".to_string()),
        avatar: "avatars/manirae.png".to_string(),
        banner: "banners/manirae.png".to_string(),
        subscribers: 12_400,
        gems: 150,
        balance: 4_520.50,
        bio: "Producer and engineer. Dark trap, melodic pop, late night sessions.".to_string(),
        website: Some("https://manirae.example".to_string()),
        projects,
        services: vec![
            Service {
                id: "svc-mix".to_string(),
                title: "Mixing & Mastering".to_string(),
                description: "Radio-ready mix and master for one song.".to_string(),
                price: 150.0,
                features: vec![
                    "Up to 40 stems".to_string(),
                    "Two revisions".to_string(),
                    "72h delivery".to_string(),
                ],
            },
            Service {
                id: "svc-custom".to_string(),
                title: "Custom Beat".to_string(),
                description: "A beat produced from scratch around your reference.".to_string(),
                price: 300.0,
                features: vec!["Exclusive rights".to_string(), "Trackout stems".to_string()],
            },
        ],
        sound_packs: vec![
            SoundPack {
                id: "sp-nocturne".to_string(),
                title: "Nocturne Drums".to_string(),
                kind: SoundPackKind::DrumKit,
                price: 29.99,
                file_size: "420 MB".to_string(),
                item_count: 180,
            },
            SoundPack {
                id: "sp-haze".to_string(),
                title: "Haze Loops".to_string(),
                kind: SoundPackKind::LoopKit,
                price: 24.99,
                file_size: "1.1 GB".to_string(),
                item_count: 65,
            },
        ],
    }
}

/// Once-per-day gem reward. The flag stays set until the day rolls over
/// or it is explicitly reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DailyReward {
    claimed_on: Option<NaiveDate>,
    claimed: bool,
}

impl DailyReward {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claimed_today(&self) -> bool {
        self.claimed
    }

    /// Adds [`DAILY_GEMS`] to the profile unless already claimed. Returns
    /// whether gems were granted.
    pub fn claim(&mut self, profile: &mut UserProfile, today: NaiveDate) -> bool {
        if self.claimed {
            debug!("Daily gems already claimed");
            return false;
        }
        profile.gems += DAILY_GEMS;
        self.claimed = true;
        self.claimed_on = Some(today);
        info!("Claimed {} daily gems, balance now {}", DAILY_GEMS, profile.gems);
        true
    }

    pub fn reset(&mut self) {
        self.claimed = false;
        self.claimed_on = None;
    }

    /// Clears the flag if `today` is past the day of the last claim.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        match self.claimed_on {
            Some(day) if today > day => {
                self.reset();
                true
            }
            _ => false,
        }
    }
}

/// Cash balance masking in the top bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BalanceVisibility {
    shown: bool,
}

impl BalanceVisibility {
    pub fn toggle(&mut self) -> bool {
        self.shown = !self.shown;
        self.shown
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn format(&self, balance: f64) -> String {
        if self.shown {
            format_money(balance)
        } else {
            "****".to_string()
        }
    }
}

/// `$1,234.50` style formatting.
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    #[test]
    fn test_claim_adds_ten_once() {
        let mut profile = mock_profile();
        let start = profile.gems;
        let mut reward = DailyReward::new();

        assert!(reward.claim(&mut profile, day(1)));
        assert_eq!(profile.gems, start + 10);
        assert!(reward.claimed_today());

        assert!(!reward.claim(&mut profile, day(1)));
        assert_eq!(profile.gems, start + 10);
    }

    #[test]
    fn test_reset_allows_exactly_one_more_claim() {
        let mut profile = mock_profile();
        let start = profile.gems;
        let mut reward = DailyReward::new();

        reward.claim(&mut profile, day(1));
        reward.reset();
        assert!(!reward.claimed_today());
        assert!(reward.claim(&mut profile, day(2)));
        assert!(!reward.claim(&mut profile, day(2)));
        assert_eq!(profile.gems, start + 20);
    }

    #[test]
    fn test_roll_over_only_on_later_day() {
        let mut profile = mock_profile();
        let mut reward = DailyReward::new();

        assert!(!reward.roll_over(day(1)));
        reward.claim(&mut profile, day(5));
        assert!(!reward.roll_over(day(5)));
        assert!(!reward.roll_over(day(4)));
        assert!(reward.claimed_today());
        assert!(reward.roll_over(day(6)));
        assert!(!reward.claimed_today());
    }

    #[test]
    fn test_mock_profile_projects_are_own() {
        let profile = mock_profile();
        assert!(!profile.projects.is_empty());
        assert!(profile.projects.iter().all(|p| p.producer == "Mani Rae"));
    }

    #[test]
    fn test_with_settings_overrides_identity() {
        let settings = ProfileSettings {
            username: Some("Kairo".to_string()),
            handle: None,
        };
        let profile = mock_profile().with_settings(&settings);
        assert_eq!(profile.username, "Kairo");
        assert_eq!(profile.handle, "@manirae");
    }

    #[test]
    fn test_balance_visibility() {
        let mut visibility = BalanceVisibility::default();
        assert_eq!(visibility.format(4520.5), "****");
        assert!(visibility.toggle());
        assert_eq!(visibility.format(4520.5), "$4,520.50");
        assert!(!visibility.toggle());
        assert!(!visibility.is_shown());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(29.99), "$29.99");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(-12.5), "-$12.50");
    }
}
