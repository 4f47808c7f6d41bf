use super::dashboard::{contracts, dashboard};
use super::home::home;
use super::screen::Screen;
use crate::app::{AppState, Page, View};
use crate::user::{format_money, PurchaseKind, PurchaseStatus};

/// Renders whatever the current view routes to.
pub fn render(state: &AppState) -> Screen {
    match state.page() {
        Page::Home => home(state),
        Page::Profile => profile(state),
        Page::BrowseTalent => talent(state),
        Page::Contracts => contracts(state),
        Page::Dashboard(section) => dashboard(state, section),
        Page::Checkout => cart(state, "Checkout"),
        Page::Library => library(state),
        Page::Settings => settings(state),
        Page::Help => help(),
        Page::Terms => legal(
            "Terms of Service",
            "Licenses are granted per the tier purchased. Redistribution of raw files is prohibited.",
        ),
        Page::Privacy => legal(
            "Privacy Policy",
            "We store only what is needed to deliver your purchases and payouts.",
        ),
        Page::Upload => placeholder("Upload", "Drop audio files to create a new project."),
        Page::PostService => placeholder(
            "Post a Service",
            "Describe what you offer and set a price.",
        ),
        Page::Notes => placeholder("Notes", "Session notes and lyric drafts."),
        Page::Collaborate => placeholder(
            "Collaborate",
            "Find curators, playlisters and creators to work with.",
        ),
        Page::LoginRequired(view) => login_required(view),
    }
}

fn placeholder(title: &str, description: &str) -> Screen {
    let mut screen = Screen::new(title);
    screen.text(description);
    screen
}

fn login_required(view: View) -> Screen {
    let mut screen = Screen::new("Sign In Required");
    screen.empty(
        format!("'{}' is only available to signed-in users.", view),
        Some("Use 'login' to sign in."),
    );
    screen
}

fn legal(title: &str, body: &str) -> Screen {
    let mut screen = Screen::new(title);
    screen.text(body).text("Use 'back' to return to Help.");
    screen
}

pub fn profile(state: &AppState) -> Screen {
    let profile = state.profile();
    let mut screen = Screen::new(profile.username.clone());
    screen
        .key_value("Handle", &profile.handle)
        .key_value("Location", profile.location.as_deref().unwrap_or("-"))
        .key_value("Subscribers", profile.subscribers.to_string())
        .key_value_highlight("Gems", profile.gems.to_string())
        .key_value("Bio", &profile.bio);
    if let Some(website) = &profile.website {
        screen.key_value("Website", website);
    }

    let rows = profile
        .projects
        .iter()
        .map(|p| {
            vec![
                if state.playback().is_project_playing(&p.id) { "▶" } else { "" }.to_string(),
                p.id.clone(),
                p.title.clone(),
                p.tracks.len().to_string(),
                format_money(p.price),
            ]
        })
        .collect();
    screen.table(&["", "ID", "Project", "Tracks", "Price"], rows);

    screen.list(
        profile
            .services
            .iter()
            .map(|s| {
                format!(
                    "{} - {} ({})",
                    s.title,
                    format_money(s.price),
                    s.features.join(", ")
                )
            })
            .collect(),
    );

    let packs = profile
        .sound_packs
        .iter()
        .map(|sp| {
            vec![
                sp.title.clone(),
                sp.kind.label().to_string(),
                sp.item_count.to_string(),
                sp.file_size.clone(),
                format_money(sp.price),
            ]
        })
        .collect();
    screen.table(&["Sound Pack", "Type", "Items", "Size", "Price"], packs);
    screen
}

pub fn talent(state: &AppState) -> Screen {
    let mut screen = Screen::new("Browse Talent");
    let rows = state
        .talent()
        .iter()
        .map(|t| {
            vec![
                if t.is_verified { "✓" } else { "" }.to_string(),
                t.username.clone(),
                t.handle.clone(),
                t.role.clone(),
                t.tags.join(", "),
                t.followers.clone(),
            ]
        })
        .collect();
    screen.table(&["", "Name", "Handle", "Role", "Tags", "Followers"], rows);
    screen
}

/// Cart contents with total. Also used as the checkout page.
pub fn cart(state: &AppState, title: &str) -> Screen {
    let cart = state.cart();
    let mut screen = Screen::new(title);
    if cart.is_empty() {
        screen.empty("Your cart is empty.", Some("cart-add <project> [license]"));
        return screen;
    }
    let rows = cart
        .items()
        .iter()
        .map(|item| {
            vec![
                item.project_title.clone(),
                item.track_id.clone().unwrap_or_default(),
                item.license_name.clone(),
                format_money(item.price),
            ]
        })
        .collect();
    screen
        .table(&["Project", "Track", "License", "Price"], rows)
        .key_value_highlight(
            format!("Total ({})", cart.len()),
            format_money(cart.total()),
        );
    screen
}

fn library(state: &AppState) -> Screen {
    let mut screen = Screen::new("Library");
    let owned: Vec<String> = state
        .purchases()
        .iter()
        .filter(|p| p.status == PurchaseStatus::Completed && !p.kind.is_order())
        .map(|p| match p.kind {
            PurchaseKind::SoundKit => format!("{} (Sound Kit) by {}", p.item, p.seller),
            _ => format!("{} by {}", p.item, p.seller),
        })
        .collect();
    if owned.is_empty() {
        screen.empty("Nothing in your library yet.", None);
    } else {
        screen.list(owned);
    }
    screen
}

fn settings(state: &AppState) -> Screen {
    let profile = state.profile();
    let mut screen = Screen::new("Settings");
    screen
        .key_value("Display Name", &profile.username)
        .key_value("Handle", &profile.handle)
        .key_value(
            "Signed In",
            if state.is_logged_in() { "yes" } else { "no" },
        )
        .key_value(
            "Show Balance",
            if state.balance_visibility().is_shown() {
                "yes"
            } else {
                "no"
            },
        );
    screen
}

fn help() -> Screen {
    let mut screen = Screen::new("Get Help");
    screen
        .list(vec![
            "Buying beats and licenses".to_string(),
            "Payouts and wallet".to_string(),
            "Contracts and signatures".to_string(),
        ])
        .text("Legal: 'view terms' or 'view privacy'.");
    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_projects;
    use crate::remote::{DataSource, LoadedProjects};
    use crate::user::mock_profile;

    fn state() -> AppState {
        let mut state = AppState::new(mock_profile());
        state.apply_loaded(LoadedProjects {
            projects: fallback_projects(),
            source: DataSource::Remote,
        });
        state
    }

    #[test]
    fn test_render_follows_gating() {
        let mut state = state();
        state.navigate(View::Contracts);
        let screen = render(&state);
        assert_eq!(screen.title(), "Sign In Required");
        assert!(screen.contains("'contracts'"));

        state.login();
        assert_eq!(render(&state).title(), "Contracts");
    }

    #[test]
    fn test_render_public_pages() {
        let mut state = state();
        for (view, title) in [
            (View::Home, "Marketplace"),
            (View::BrowseTalent, "Browse Talent"),
            (View::DashboardHelp, "Get Help"),
            (View::Settings, "Settings"),
            (View::Terms, "Terms of Service"),
            (View::Privacy, "Privacy Policy"),
            (View::Upload, "Upload"),
        ] {
            state.navigate(view);
            assert_eq!(render(&state).title(), title);
        }
    }

    #[test]
    fn test_profile_page() {
        let state = state();
        let screen = profile(&state);
        assert_eq!(screen.title(), "Mani Rae");
        assert!(screen.contains("Midnight Protocol"));
        assert!(screen.contains("Nocturne Drums"));
    }

    #[test]
    fn test_checkout_shows_cart_total() {
        let mut state = state();
        state.login();
        state.navigate(View::Checkout);
        assert!(render(&state).contains("Your cart is empty."));

        state.add_to_cart("p1", None, None).unwrap();
        let screen = render(&state);
        assert!(screen.contains("Total (1): $29.99"));
    }

    #[test]
    fn test_talent_page_lists_everyone() {
        let state = state();
        let screen = talent(&state);
        for t in state.talent() {
            assert!(screen.contains(&t.handle));
        }
    }
}
