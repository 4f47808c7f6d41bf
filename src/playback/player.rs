//! Presentational state of the bottom player panel.

use super::selection::PlaybackSelection;

/// Formats seconds as `m:ss`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// The player panel owns only its own expanded/minimized toggle; what it
/// shows comes from [`PlaybackSelection`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPanel {
    minimized: bool,
}

impl Default for PlayerPanel {
    fn default() -> Self {
        Self { minimized: true }
    }
}

/// What the player shows for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub project_title: String,
    pub producer: String,
    pub track_title: String,
    pub duration: String,
    pub is_playing: bool,
}

impl PlayerPanel {
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn expand(&mut self) {
        self.minimized = false;
    }

    pub fn minimize(&mut self) {
        self.minimized = true;
    }

    /// None when nothing is selected. Falls back to the listing title when
    /// the selected track id is not part of the listing.
    pub fn now_playing(&self, selection: &PlaybackSelection) -> Option<NowPlaying> {
        let project = selection.current_project()?;
        let track = selection.current_track();
        Some(NowPlaying {
            project_title: project.title.clone(),
            producer: project.producer.clone(),
            track_title: track
                .map(|t| t.title.clone())
                .unwrap_or_else(|| project.title.clone()),
            duration: track
                .map(|t| format_duration(t.duration))
                .unwrap_or_else(|| format_duration(0)),
            is_playing: selection.is_playing(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_projects;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(184), "3:04");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn test_panel_starts_minimized() {
        let mut panel = PlayerPanel::default();
        assert!(panel.is_minimized());
        panel.expand();
        assert!(!panel.is_minimized());
        panel.minimize();
        assert!(panel.is_minimized());
    }

    #[test]
    fn test_now_playing() {
        let panel = PlayerPanel::default();
        let mut selection = PlaybackSelection::new();
        assert!(panel.now_playing(&selection).is_none());

        let project = fallback_projects().remove(0);
        selection.select_and_play(&project, "p1-t1");
        let now = panel.now_playing(&selection).unwrap();
        assert_eq!(now.track_title, "Midnight Protocol");
        assert_eq!(now.duration, "3:04");
        assert!(now.is_playing);
    }
}
