//! Listings page, top bar and the player bar.

use super::screen::Screen;
use crate::app::AppState;
use crate::playback::format_duration;
use crate::search::{available_genres, available_keys};
use crate::user::{format_money, DAILY_GEMS};

pub const EMPTY_RESULTS: &str = "No data found matching query parameters.";
pub const LOADING: &str = "CONNECTING_TO_DATABASE...";

/// Playing marker for a listing row.
fn play_marker(state: &AppState, project_id: &str) -> &'static str {
    let playback = state.playback();
    match playback.current_project() {
        Some(p) if p.id == project_id && playback.is_playing() => "▶",
        Some(p) if p.id == project_id => "❚❚",
        _ => "",
    }
}

pub fn home(state: &AppState) -> Screen {
    let mut screen = Screen::new("Marketplace");

    if state.shows_reward_banner() {
        screen.banner(format!(
            "Daily Reward Available! Claim your {} free Gems for today with 'claim-gems'.",
            DAILY_GEMS
        ));
    }

    let filters = state.filters();
    screen
        .key_value("Genre", &filters.genre)
        .key_value("Key", &filters.key)
        .key_value(
            "BPM",
            format!("{}-{}", filters.min_bpm, filters.max_bpm),
        )
        .key_value(
            "Price",
            format!(
                "{}-{}",
                format_money(filters.min_price),
                format_money(filters.max_price)
            ),
        );
    if !filters.search_query.trim().is_empty() {
        screen.key_value_highlight("Search", &filters.search_query);
    }

    if let Some(notice) = state.notice() {
        screen.notice(notice);
    }

    if state.is_loading() {
        screen.text(LOADING);
        return screen;
    }

    let visible = state.filtered_projects();
    if visible.is_empty() {
        screen.empty(EMPTY_RESULTS, Some("Reset Search Query: 'reset-filters'"));
        return screen;
    }

    let rows = visible
        .iter()
        .map(|p| {
            vec![
                play_marker(state, &p.id).to_string(),
                p.id.clone(),
                p.title.clone(),
                p.producer.clone(),
                p.genre.clone(),
                p.key.clone(),
                p.bpm.to_string(),
                format_money(p.price),
                p.kind.label().to_string(),
            ]
        })
        .collect();
    screen.table(
        &["", "ID", "Title", "Producer", "Genre", "Key", "BPM", "Price", "Type"],
        rows,
    );
    screen.text(format!(
        "Showing {} of {} projects",
        visible.len(),
        state.projects().len()
    ));
    screen
}

/// Genre and key choices for the filter bar.
pub fn filter_options(state: &AppState) -> Screen {
    let mut screen = Screen::new("Filters");
    screen
        .key_value("Genres", available_genres(state.projects()).join(", "))
        .key_value("Keys", available_keys(state.projects()).join(", "));
    screen
}

pub fn top_bar(state: &AppState) -> Screen {
    let profile = state.profile();
    let mut screen = Screen::new("Account");
    if !state.is_logged_in() {
        screen.text("Not signed in. Use 'login' to sign in.");
        return screen;
    }
    screen
        .key_value("User", format!("{} ({})", profile.username, profile.handle))
        .key_value_highlight("Gems", profile.gems.to_string())
        .key_value(
            "Balance",
            state.balance_visibility().format(profile.balance),
        )
        .key_value("Cart", format!("{} item(s)", state.cart().len()))
        .key_value(
            "Notifications",
            format!("{} unread", state.unread_notifications()),
        );
    if !state.reward().claimed_today() {
        screen.banner(format!("+{} daily gems available", DAILY_GEMS));
    }
    screen
}

/// The bell panel of the top bar. Signed-in users only.
pub fn notifications(state: &AppState) -> Screen {
    let mut screen = Screen::new("Notifications");
    if !state.is_logged_in() {
        screen.text("Not signed in. Use 'login' to sign in.");
        return screen;
    }
    if state.notifications().is_empty() {
        screen.empty("You're all caught up.", None);
        return screen;
    }
    let rows = state
        .notifications()
        .iter()
        .map(|n| {
            vec![
                if n.read { "" } else { "•" }.to_string(),
                n.kind.label().to_string(),
                n.title.clone(),
                n.message.clone(),
                n.time.clone(),
            ]
        })
        .collect();
    screen
        .table(&["", "Type", "Title", "Message", "When"], rows)
        .text("'notifications --mark-read' marks everything as read.");
    screen
}

/// None while nothing has been selected.
pub fn player_bar(state: &AppState) -> Option<Screen> {
    let now = state.player().now_playing(state.playback())?;
    let mut screen = Screen::new("Now Playing");
    screen
        .key_value_highlight(
            if now.is_playing { "Playing" } else { "Paused" },
            format!("{} - {}", now.track_title, now.producer),
        )
        .key_value("Project", &now.project_title)
        .key_value("Duration", &now.duration);

    if !state.player().is_minimized() {
        if let Some(project) = state.playback().current_project() {
            let current = state.playback().current_track_id();
            let rows = project
                .tracks
                .iter()
                .map(|t| {
                    vec![
                        if Some(t.id.as_str()) == current { "▶" } else { "" }.to_string(),
                        t.id.clone(),
                        t.title.clone(),
                        format_duration(t.duration),
                    ]
                })
                .collect();
            screen.table(&["", "ID", "Track", "Length"], rows);
        }
    }
    Some(screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_projects;
    use crate::remote::{DataSource, LoadError, LoadedProjects};
    use crate::user::mock_profile;

    fn state_with(source: DataSource) -> AppState {
        let mut state = AppState::new(mock_profile());
        state.apply_loaded(LoadedProjects {
            projects: fallback_projects(),
            source,
        });
        state
    }

    #[test]
    fn test_loading_screen() {
        let state = AppState::new(mock_profile());
        let screen = home(&state);
        assert!(screen.contains(LOADING));
        assert!(!screen.contains("Showing"));
    }

    #[test]
    fn test_fallback_notice_is_rendered() {
        let state = state_with(DataSource::Fallback(LoadError::MissingConfig));
        assert!(home(&state).contains("Displaying sample data."));

        let state = state_with(DataSource::Remote);
        assert!(!home(&state).contains("Displaying sample data."));
    }

    #[test]
    fn test_empty_results_offer_reset() {
        let mut state = state_with(DataSource::Remote);
        state.handle_search("zzzz-nothing");
        let screen = home(&state);
        assert!(screen.contains(EMPTY_RESULTS));
        assert!(screen.contains("reset-filters"));
    }

    #[test]
    fn test_reward_banner_only_when_logged_in_and_unclaimed() {
        let mut state = state_with(DataSource::Remote);
        assert!(!home(&state).contains("Daily Reward"));
        state.login();
        assert!(home(&state).contains("Daily Reward"));
        state.claim_daily_gems(chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert!(!home(&state).contains("Daily Reward"));
    }

    #[test]
    fn test_playing_marker() {
        let mut state = state_with(DataSource::Remote);
        state.play("p1", None).unwrap();
        assert!(home(&state).contains("▶ | p1"));
        state.toggle_play();
        assert!(home(&state).contains("❚❚ | p1"));
    }

    #[test]
    fn test_player_bar() {
        let mut state = state_with(DataSource::Remote);
        assert!(player_bar(&state).is_none());

        state.play("p1", Some("p1-t2")).unwrap();
        let bar = player_bar(&state).unwrap();
        assert!(bar.contains("Neon Static"));
        assert!(!bar.contains("p1-t1"));

        state.player_mut().expand();
        let bar = player_bar(&state).unwrap();
        assert!(bar.contains("p1-t1"));
    }

    #[test]
    fn test_notifications_panel() {
        let mut state = state_with(DataSource::Remote);
        assert!(notifications(&state).contains("Not signed in"));

        state.login();
        let screen = notifications(&state);
        assert!(screen.contains("• | Sale | New Sale!"));
        assert!(top_bar(&state).contains("Notifications: 2 unread"));

        state.mark_notifications_read();
        assert!(!notifications(&state).contains("•"));
        assert!(top_bar(&state).contains("Notifications: 0 unread"));
    }

    #[test]
    fn test_top_bar_masks_balance() {
        let mut state = state_with(DataSource::Remote);
        state.login();
        assert!(top_bar(&state).contains("Balance: ****"));
        state.toggle_balance();
        assert!(top_bar(&state).contains("Balance: $4,520.50"));
    }
}
