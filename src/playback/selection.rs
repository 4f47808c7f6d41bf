//! Which listing/track is "current" and whether it is playing.
//!
//! There is no audio engine behind this: it is selection-and-flag state that
//! the player panel and listing cards render.

use tracing::debug;

use crate::catalog::{Project, Track};

/// The currently selected (listing, track) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSelection {
    /// Snapshot of the listing at selection time.
    pub project: Project,
    pub track_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackSelection {
    current: Option<CurrentSelection>,
    is_playing: bool,
}

impl PlaybackSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-selecting the current pair toggles playback; any other pair becomes
    /// current and starts playing.
    pub fn select_and_play(&mut self, project: &Project, track_id: &str) {
        if self.is_current(&project.id, track_id) {
            self.is_playing = !self.is_playing;
            debug!(
                "Toggled {}/{} -> playing={}",
                project.id, track_id, self.is_playing
            );
            return;
        }

        self.current = Some(CurrentSelection {
            project: project.clone(),
            track_id: track_id.to_string(),
        });
        self.is_playing = true;
        debug!("Now playing {}/{}", project.id, track_id);
    }

    /// Flips the playing flag. No-op while nothing is selected.
    pub fn toggle_play(&mut self) {
        if self.current.is_some() {
            self.is_playing = !self.is_playing;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_some() && self.is_playing
    }

    pub fn current(&self) -> Option<&CurrentSelection> {
        self.current.as_ref()
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current.as_ref().map(|c| &c.project)
    }

    pub fn current_track_id(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.track_id.as_str())
    }

    /// The current track, if its id exists in the current listing.
    pub fn current_track(&self) -> Option<&Track> {
        self.current
            .as_ref()
            .and_then(|c| c.project.track(&c.track_id))
    }

    pub fn is_current(&self, project_id: &str, track_id: &str) -> bool {
        self.current
            .as_ref()
            .map(|c| c.project.id == project_id && c.track_id == track_id)
            .unwrap_or(false)
    }

    /// True iff this listing is the current one and it is playing.
    pub fn is_project_playing(&self, project_id: &str) -> bool {
        self.is_playing()
            && self
                .current
                .as_ref()
                .map(|c| c.project.id == project_id)
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_projects;

    #[test]
    fn test_reselecting_same_pair_toggles() {
        let project = fallback_projects().remove(0);
        let mut playback = PlaybackSelection::new();

        playback.select_and_play(&project, "p1-t1");
        assert!(playback.is_playing());

        playback.select_and_play(&project, "p1-t1");
        assert!(!playback.is_playing());
        assert_eq!(playback.current_track_id(), Some("p1-t1"));

        playback.select_and_play(&project, "p1-t1");
        assert!(playback.is_playing());
    }

    #[test]
    fn test_selecting_other_track_keeps_playing() {
        let project = fallback_projects().remove(0);
        let mut playback = PlaybackSelection::new();

        playback.select_and_play(&project, "p1-t1");
        playback.select_and_play(&project, "p1-t2");
        assert!(playback.is_playing());
        assert_eq!(playback.current_track_id(), Some("p1-t2"));
    }

    #[test]
    fn test_selecting_new_pair_after_pause_forces_playing() {
        let projects = fallback_projects();
        let mut playback = PlaybackSelection::new();

        playback.select_and_play(&projects[0], "p1-t1");
        playback.toggle_play();
        assert!(!playback.is_playing());

        playback.select_and_play(&projects[1], "p2-t1");
        assert!(playback.is_playing());
        assert_eq!(playback.current_project().unwrap().id, "p2");
    }

    #[test]
    fn test_same_track_id_in_other_project_is_a_new_pair() {
        let projects = fallback_projects();
        let mut playback = PlaybackSelection::new();

        playback.select_and_play(&projects[0], "shared");
        playback.toggle_play();
        playback.select_and_play(&projects[1], "shared");
        assert!(playback.is_playing());
        assert_eq!(playback.current_project().unwrap().id, projects[1].id);
    }

    #[test]
    fn test_toggle_without_selection_is_noop() {
        let mut playback = PlaybackSelection::new();
        playback.toggle_play();
        assert!(!playback.is_playing());
        assert!(playback.current().is_none());
    }

    #[test]
    fn test_current_track_lookup() {
        let project = fallback_projects().remove(0);
        let mut playback = PlaybackSelection::new();

        playback.select_and_play(&project, "p1-t2");
        assert_eq!(playback.current_track().unwrap().title, "Neon Static");

        playback.select_and_play(&project, "not-a-track");
        assert!(playback.current_track().is_none());
        assert!(playback.is_playing());
    }

    #[test]
    fn test_is_project_playing() {
        let projects = fallback_projects();
        let mut playback = PlaybackSelection::new();

        playback.select_and_play(&projects[0], "p1-t1");
        assert!(playback.is_project_playing("p1"));
        assert!(!playback.is_project_playing("p2"));

        playback.toggle_play();
        assert!(!playback.is_project_playing("p1"));
    }
}
