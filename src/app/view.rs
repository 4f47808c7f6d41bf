//! The enumerated current view and its mapping to pages.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum View {
    #[default]
    Home,
    Profile,
    Upload,
    PostService,
    Notes,
    Contracts,
    BrowseTalent,
    Collaborate,
    Library,
    Checkout,
    DashboardOverview,
    DashboardStudio,
    DashboardSales,
    DashboardManage,
    DashboardWallet,
    DashboardOrders,
    DashboardMessages,
    DashboardAnalytics,
    DashboardSettings,
    DashboardHelp,
    Settings,
    Help,
    Terms,
    Privacy,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown view: {0}")]
pub struct ViewParseError(pub String);

impl View {
    pub const ALL: [View; 24] = [
        View::Home,
        View::Profile,
        View::Upload,
        View::PostService,
        View::Notes,
        View::Contracts,
        View::BrowseTalent,
        View::Collaborate,
        View::Library,
        View::Checkout,
        View::DashboardOverview,
        View::DashboardStudio,
        View::DashboardSales,
        View::DashboardManage,
        View::DashboardWallet,
        View::DashboardOrders,
        View::DashboardMessages,
        View::DashboardAnalytics,
        View::DashboardSettings,
        View::DashboardHelp,
        View::Settings,
        View::Help,
        View::Terms,
        View::Privacy,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Profile => "profile",
            View::Upload => "upload",
            View::PostService => "post-service",
            View::Notes => "notes",
            View::Contracts => "contracts",
            View::BrowseTalent => "browse-talent",
            View::Collaborate => "collaborate",
            View::Library => "library",
            View::Checkout => "checkout",
            View::DashboardOverview => "dashboard-overview",
            View::DashboardStudio => "dashboard-studio",
            View::DashboardSales => "dashboard-sales",
            View::DashboardManage => "dashboard-manage",
            View::DashboardWallet => "dashboard-wallet",
            View::DashboardOrders => "dashboard-orders",
            View::DashboardMessages => "dashboard-messages",
            View::DashboardAnalytics => "dashboard-analytics",
            View::DashboardSettings => "dashboard-settings",
            View::DashboardHelp => "dashboard-help",
            View::Settings => "settings",
            View::Help => "help",
            View::Terms => "terms",
            View::Privacy => "privacy",
        }
    }

    pub fn is_dashboard(&self) -> bool {
        self.slug().starts_with("dashboard")
    }

    /// Views that render only while signed in. Dashboard settings and help
    /// are shared with their public counterparts and stay open.
    pub fn requires_login(&self) -> bool {
        match self {
            View::Library | View::Contracts | View::PostService | View::Notes | View::Checkout => {
                true
            }
            View::DashboardSettings | View::DashboardHelp => false,
            other => other.is_dashboard(),
        }
    }
}

impl FromStr for View {
    type Err = ViewParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        View::ALL
            .into_iter()
            .find(|view| view.slug() == wanted)
            .ok_or_else(|| ViewParseError(wanted.to_string()))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DashboardSection {
    Overview,
    Studio,
    Sales,
    Manage,
    Wallet,
    Orders,
    Messages,
    Analytics,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Page {
    Home,
    Profile,
    Upload,
    PostService,
    Notes,
    Contracts,
    BrowseTalent,
    Collaborate,
    Library,
    Checkout,
    Dashboard(DashboardSection),
    Settings,
    Help,
    Terms,
    Privacy,
    /// A gated view was requested while signed out.
    LoginRequired(View),
}

impl Page {
    /// Where the page's "back" action leads, if it has one.
    pub fn back_target(&self) -> Option<View> {
        match self {
            Page::Terms | Page::Privacy => Some(View::Help),
            _ => None,
        }
    }
}

pub fn route(view: View, logged_in: bool) -> Page {
    if view.requires_login() && !logged_in {
        return Page::LoginRequired(view);
    }
    match view {
        View::Home => Page::Home,
        View::Profile => Page::Profile,
        View::Upload => Page::Upload,
        View::PostService => Page::PostService,
        View::Notes => Page::Notes,
        View::Contracts => Page::Contracts,
        View::BrowseTalent => Page::BrowseTalent,
        View::Collaborate => Page::Collaborate,
        View::Library => Page::Library,
        View::Checkout => Page::Checkout,
        View::Settings | View::DashboardSettings => Page::Settings,
        View::Help | View::DashboardHelp => Page::Help,
        View::Terms => Page::Terms,
        View::Privacy => Page::Privacy,
        View::DashboardMessages => Page::Dashboard(DashboardSection::Messages),
        View::DashboardManage => Page::Dashboard(DashboardSection::Manage),
        View::DashboardStudio => Page::Dashboard(DashboardSection::Studio),
        View::DashboardSales => Page::Dashboard(DashboardSection::Sales),
        View::DashboardWallet => Page::Dashboard(DashboardSection::Wallet),
        View::DashboardOrders => Page::Dashboard(DashboardSection::Orders),
        View::DashboardAnalytics => Page::Dashboard(DashboardSection::Analytics),
        View::DashboardOverview => Page::Dashboard(DashboardSection::Overview),
    }
}
