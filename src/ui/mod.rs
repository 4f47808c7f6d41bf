mod dashboard;
mod home;
mod pages;
mod screen;

pub use dashboard::{contracts, dashboard, receipt};
pub use home::{
    filter_options, home, notifications, player_bar, top_bar, EMPTY_RESULTS, LOADING,
};
pub use pages::{cart, profile, render, talent};
pub use screen::{Block, Screen};
