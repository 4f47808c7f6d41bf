//! The top-level session controller. Holds every piece of client state and
//! is the only writer of it; the REPL forwards one event at a time.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use super::view::{route, Page, View};
use crate::catalog::Project;
use crate::contracts::{sample_contracts, ContractEditor, EditorError};
use crate::playback::{PlaybackSelection, PlayerPanel};
use crate::remote::{DataSource, LoadedProjects};
use crate::search::{filter_projects, FilterState};
use crate::user::{
    filter_purchases, find_purchase, mark_all_read, mock_notifications, mock_purchases,
    mock_talent, unread_count, BalanceVisibility, Cart, CartItem, DailyReward, Notification,
    Purchase, PurchaseTab, TalentProfile, UserProfile,
};

#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("No project with id {0}")]
    UnknownProject(String),

    #[error("Project {project} has no track {track}")]
    UnknownTrack { project: String, track: String },

    #[error("Project {0} has no tracks")]
    NoTracks(String),

    #[error("No order with id {0}")]
    UnknownOrder(String),

    #[error("Cart: {0}")]
    Cart(String),

    #[error(transparent)]
    Contract(#[from] EditorError),
}

pub struct AppState {
    projects: Vec<Project>,
    loading: bool,
    notice: Option<String>,
    filters: FilterState,
    playback: PlaybackSelection,
    player: PlayerPanel,
    view: View,
    logged_in: bool,
    profile: UserProfile,
    reward: DailyReward,
    balance: BalanceVisibility,
    contracts: ContractEditor,
    purchases: Vec<Purchase>,
    purchase_tab: PurchaseTab,
    /// Order opened in the detail view of dashboard-orders.
    selected_order: Option<String>,
    notifications: Vec<Notification>,
    cart: Cart,
    talent: Vec<TalentProfile>,
}

impl AppState {
    /// A fresh session: logged out, on the home view, listings still loading.
    pub fn new(profile: UserProfile) -> Self {
        let contracts = ContractEditor::new(sample_contracts(), profile.username.clone());
        Self {
            projects: Vec::new(),
            loading: true,
            notice: None,
            filters: FilterState::default(),
            playback: PlaybackSelection::new(),
            player: PlayerPanel::default(),
            view: View::Home,
            logged_in: false,
            profile,
            reward: DailyReward::new(),
            balance: BalanceVisibility::default(),
            contracts,
            purchases: mock_purchases(),
            purchase_tab: PurchaseTab::default(),
            selected_order: None,
            notifications: mock_notifications(),
            cart: Cart::new(),
            talent: mock_talent(),
        }
    }

    /// Replaces the listing collection wholesale with the fetch result.
    pub fn apply_loaded(&mut self, loaded: LoadedProjects) {
        self.notice = loaded.notice().map(String::from);
        if let DataSource::Fallback(reason) = &loaded.source {
            debug!("Session running on sample data: {}", reason);
        }
        self.projects = loaded.projects;
        self.loading = false;
        info!("Session has {} projects", self.projects.len());
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Recomputed on every call so it can never be stale.
    pub fn filtered_projects(&self) -> Vec<&Project> {
        filter_projects(&self.projects, &self.filters)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_genre(&mut self, genre: &str) {
        self.filters.genre = genre.to_string();
    }

    pub fn set_key(&mut self, key: &str) {
        self.filters.key = key.to_string();
    }

    pub fn reset_search(&mut self) {
        self.filters.reset_search();
    }

    /// Sets the free-text query and brings the user back to the listings.
    pub fn handle_search(&mut self, query: &str) {
        self.filters.search_query = query.to_string();
        if self.view != View::Home {
            self.view = View::Home;
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn navigate(&mut self, view: View) {
        debug!("Navigate {} -> {}", self.view, view);
        self.view = view;
        self.selected_order = None;
    }

    pub fn page(&self) -> Page {
        route(self.view, self.logged_in)
    }

    /// Follows the current page's back link, if any.
    pub fn back(&mut self) -> bool {
        match self.page().back_target() {
            Some(target) => {
                self.view = target;
                true
            }
            None => false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn login(&mut self) {
        self.logged_in = true;
        info!("Logged in as {}", self.profile.username);
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.view = View::Home;
        self.selected_order = None;
        info!("Logged out");
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn reward(&self) -> &DailyReward {
        &self.reward
    }

    pub fn claim_daily_gems(&mut self, today: NaiveDate) -> bool {
        self.reward.claim(&mut self.profile, today)
    }

    /// Re-enables the daily claim.
    pub fn new_day(&mut self) {
        self.reward.reset();
    }

    pub fn roll_over_day(&mut self, today: NaiveDate) -> bool {
        self.reward.roll_over(today)
    }

    /// The home banner offering the daily claim.
    pub fn shows_reward_banner(&self) -> bool {
        self.logged_in && !self.reward.claimed_today()
    }

    pub fn balance_visibility(&self) -> BalanceVisibility {
        self.balance
    }

    pub fn toggle_balance(&mut self) -> bool {
        self.balance.toggle()
    }

    pub fn playback(&self) -> &PlaybackSelection {
        &self.playback
    }

    pub fn player(&self) -> &PlayerPanel {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerPanel {
        &mut self.player
    }

    /// Plays `track_id` of a listing, or its first track when no id is given.
    pub fn play(&mut self, project_id: &str, track_id: Option<&str>) -> Result<(), AppError> {
        let project = self
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| AppError::UnknownProject(project_id.to_string()))?;

        let track_id = match track_id {
            Some(id) => {
                if project.track(id).is_none() {
                    return Err(AppError::UnknownTrack {
                        project: project_id.to_string(),
                        track: id.to_string(),
                    });
                }
                id
            }
            None => project
                .first_track_id()
                .ok_or_else(|| AppError::NoTracks(project_id.to_string()))?,
        };

        self.playback.select_and_play(project, track_id);
        Ok(())
    }

    pub fn toggle_play(&mut self) {
        self.playback.toggle_play();
    }

    pub fn contracts(&self) -> &ContractEditor {
        &self.contracts
    }

    pub fn contracts_mut(&mut self) -> &mut ContractEditor {
        &mut self.contracts
    }

    pub fn purchase_tab(&self) -> PurchaseTab {
        self.purchase_tab
    }

    pub fn set_purchase_tab(&mut self, tab: PurchaseTab) {
        self.purchase_tab = tab;
        self.selected_order = None;
    }

    /// Opens the detail view of an order on dashboard-orders.
    pub fn open_order(&mut self, order_id: &str) -> Result<(), AppError> {
        let id = find_purchase(&self.purchases, order_id)
            .map(|p| p.id.clone())
            .ok_or_else(|| AppError::UnknownOrder(order_id.to_string()))?;
        self.navigate(View::DashboardOrders);
        self.selected_order = Some(id);
        Ok(())
    }

    /// Back from the order detail to the purchase list.
    pub fn close_order(&mut self) -> bool {
        self.selected_order.take().is_some()
    }

    pub fn selected_order(&self) -> Option<&Purchase> {
        let id = self.selected_order.as_deref()?;
        find_purchase(&self.purchases, id)
    }

    pub fn purchase(&self, order_id: &str) -> Option<&Purchase> {
        find_purchase(&self.purchases, order_id)
    }

    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn visible_purchases(&self) -> Vec<&Purchase> {
        filter_purchases(&self.purchases, self.purchase_tab)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(
        &mut self,
        project_id: &str,
        track_id: Option<&str>,
        license_id: Option<&str>,
    ) -> Result<&CartItem, AppError> {
        let project = self
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .ok_or_else(|| AppError::UnknownProject(project_id.to_string()))?;
        self.cart
            .add(project, track_id, license_id)
            .map_err(AppError::Cart)
    }

    pub fn talent(&self) -> &[TalentProfile] {
        &self.talent
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_notifications(&self) -> usize {
        unread_count(&self.notifications)
    }

    pub fn mark_notifications_read(&mut self) -> usize {
        mark_all_read(&mut self.notifications)
    }
}
