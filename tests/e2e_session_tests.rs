//! End-to-end tests for a whole client session
//!
//! Drives the session state the way the REPL does: load listings, search,
//! play, edit contracts, claim gems, and walk the views.

mod common;

use beatmarket_client::app::{AppState, Page, View};
use beatmarket_client::contracts::{ContractEditor, ContractField, EditorError};
use beatmarket_client::remote::{load_from_settings, load_projects};
use beatmarket_client::search::{filter_projects, FilterState};
use beatmarket_client::ui;
use beatmarket_client::user::{mock_profile, PurchaseTab, DAILY_GEMS};
use beatmarket_client::{fallback_projects, Project};
use chrono::NaiveDate;
use common::*;

async fn session() -> AppState {
    let mut state = AppState::new(mock_profile());
    state.apply_loaded(load_projects(None).await);
    state
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
}

fn ids(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.id.clone()).collect()
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_filter_is_an_ordered_subset() {
    let projects = fallback_projects();
    let filters = [
        FilterState::default().with_genre("Trap"),
        FilterState::default().with_key("C Minor"),
        FilterState::default().with_query("mani"),
        FilterState::default().with_query("nothing matches this"),
    ];

    for filter in filters {
        let result = filter_projects(&projects, &filter);
        let positions: Vec<usize> = result
            .iter()
            .map(|p| projects.iter().position(|q| q.id == p.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_default_filter_is_identity() {
    let projects = fallback_projects();
    let result = filter_projects(&projects, &FilterState::default());
    assert_eq!(result.len(), projects.len());
    assert!(result.iter().zip(&projects).all(|(a, b)| a.id == b.id));
}

#[test]
fn test_query_terms_are_anded_across_fields() {
    let projects = fallback_projects();

    let result = filter_projects(&projects, &FilterState::default().with_query("TRAP 808"));

    // p1 by tags, p3 by "sliding 808", p6 by genre plus title
    assert_eq!(ids(&result), vec!["p1", "p3", "p6"]);
}

#[tokio::test]
async fn test_search_from_any_view_lands_on_home() {
    let mut state = session().await;
    state.login();
    state.navigate(View::DashboardWallet);

    state.handle_search("velvet");

    assert_eq!(state.view(), View::Home);
    assert_eq!(ids(&state.filtered_projects()), vec!["p2"]);
    assert!(ui::home(&state).contains("Velvet Hours"));
}

#[tokio::test]
async fn test_remote_listings_are_searchable() {
    let server = TestServer::spawn(Behavior::Rows(remote_project_rows())).await;
    let mut state = AppState::new(mock_profile());
    state.apply_loaded(load_from_settings(Some(&server.settings())).await);

    assert_eq!(state.notice(), None);
    state.handle_search("jazzhop");
    // sub-genre is not part of the searchable text
    assert!(state.filtered_projects().is_empty());

    state.handle_search("glass cathedral");
    assert_eq!(ids(&state.filtered_projects()), vec![REMOTE_PROJECT_1_ID]);
}

// =============================================================================
// Playback
// =============================================================================

#[tokio::test]
async fn test_replaying_current_track_pauses() {
    let mut state = session().await;

    state.play("p1", Some("p1-t1")).unwrap();
    assert!(state.playback().is_playing());

    state.play("p1", Some("p1-t1")).unwrap();
    assert!(!state.playback().is_playing());
    assert!(state.playback().is_current("p1", "p1-t1"));
}

#[tokio::test]
async fn test_switching_track_keeps_playing() {
    let mut state = session().await;

    state.play("p1", Some("p1-t1")).unwrap();
    state.play("p1", Some("p1-t2")).unwrap();

    assert!(state.playback().is_playing());
    assert_eq!(state.playback().current_track_id(), Some("p1-t2"));
    let bar = ui::player_bar(&state).unwrap();
    assert!(bar.contains("Neon Static"));
}

// =============================================================================
// Contracts
// =============================================================================

#[test]
fn test_create_edit_title_and_save_keeps_defaults() {
    let mut editor = ContractEditor::new(Vec::new(), "Mani Rae");

    let id = editor.create().id.clone();
    editor
        .edit_field(ContractField::Title, "Exclusive Deal")
        .unwrap();
    let saved = editor.save().unwrap().clone();

    assert_eq!(saved.id, id);
    assert_eq!(saved.title, "Exclusive Deal");
    assert_eq!(saved.royalty_split, Some(50));
    assert_eq!(saved.revenue_split, Some(50));
    assert!(!editor.is_editing());
}

#[tokio::test]
async fn test_signature_in_cancelled_edit_is_discarded() {
    let mut state = session().await;
    state.login();
    let before = state.contracts().selected().unwrap().clone();

    let editor = state.contracts_mut();
    editor.start_edit().unwrap();
    editor.start_sign().unwrap();
    editor.update_sign_input("Someone Else").unwrap();
    editor.confirm_sign().unwrap();
    assert_eq!(
        editor.displayed().unwrap().producer_signature.as_deref(),
        Some("Someone Else")
    );
    editor.cancel_edit().unwrap();

    let after = state.contracts().selected().unwrap();
    assert_eq!(after.producer_signature, before.producer_signature);
    assert_eq!(after, &before);
}

#[tokio::test]
async fn test_switching_contract_drops_the_draft() {
    let mut state = session().await;
    let second = state.contracts().contracts()[1].id.clone();
    let first = state.contracts().contracts()[0].clone();

    let editor = state.contracts_mut();
    editor.start_edit().unwrap();
    editor.edit_field(ContractField::Title, "Never Saved").unwrap();
    editor.select(&second).unwrap();

    assert!(!editor.is_editing());
    assert_eq!(editor.contracts()[0], first);
    assert_eq!(editor.save(), Err(EditorError::NotEditing));
}

// =============================================================================
// Daily Reward
// =============================================================================

#[tokio::test]
async fn test_daily_gems_once_per_day() {
    let mut state = session().await;
    state.login();
    let start = state.profile().gems;

    assert!(state.claim_daily_gems(day(24)));
    assert!(!state.claim_daily_gems(day(24)));
    assert_eq!(state.profile().gems, start + DAILY_GEMS);
    assert!(!state.shows_reward_banner());

    state.new_day();
    assert!(state.claim_daily_gems(day(24)));
    assert!(!state.claim_daily_gems(day(24)));
    assert_eq!(state.profile().gems, start + 2 * DAILY_GEMS);

    assert!(state.roll_over_day(day(25)));
    assert!(state.shows_reward_banner());
    assert!(state.claim_daily_gems(day(25)));
    assert_eq!(state.profile().gems, start + 3 * DAILY_GEMS);
}

// =============================================================================
// Views
// =============================================================================

#[tokio::test]
async fn test_gated_views_need_login() {
    let mut state = session().await;

    state.navigate(View::DashboardOrders);
    assert_eq!(state.page(), Page::LoginRequired(View::DashboardOrders));

    state.login();
    assert!(matches!(state.page(), Page::Dashboard(_)));

    state.logout();
    assert_eq!(state.view(), View::Home);
    assert_eq!(state.page(), Page::Home);
}

#[tokio::test]
async fn test_legal_pages_link_back_to_help() {
    let mut state = session().await;

    state.navigate(View::Terms);
    assert!(state.back());
    assert_eq!(state.view(), View::Help);
    assert!(!state.back());
}

#[tokio::test]
async fn test_purchase_tabs_filter_orders_page() {
    let mut state = session().await;
    state.login();
    state.navigate(View::DashboardOrders);

    state.set_purchase_tab(PurchaseTab::Kits);
    let screen = ui::render(&state);

    assert_eq!(state.visible_purchases().len(), 1);
    assert!(screen.contains("[Sound Packs]"));
    assert!(screen.contains("ORD-7715"));
    assert!(!screen.contains("ORD-7721"));
}

#[tokio::test]
async fn test_order_detail_and_notifications() {
    let mut state = session().await;
    state.login();

    state.open_order("ORD-7688").unwrap();
    let screen = ui::render(&state);
    assert_eq!(screen.title(), "Vocal Topline Session");
    assert!(screen.contains("Chat with Soraya Beats"));

    state.navigate(View::DashboardOrders);
    assert_eq!(ui::render(&state).title(), "Purchases");

    assert_eq!(state.unread_notifications(), 2);
    state.mark_notifications_read();
    assert!(ui::top_bar(&state).contains("Notifications: 0 unread"));
}
