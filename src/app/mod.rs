mod state;
mod view;

pub use state::{AppError, AppState};
pub use view::{route, DashboardSection, Page, View, ViewParseError};
