mod cart;
mod notifications;
mod profile;
mod purchases;
mod talent;

pub use cart::{Cart, CartItem};
pub use notifications::{
    mark_all_read, mock_notifications, unread_count, Notification, NotificationKind,
};
pub use profile::{
    format_money, mock_profile, BalanceVisibility, DailyReward, Service, SoundPack, SoundPackKind,
    UserProfile, DAILY_GEMS,
};
pub use purchases::{
    filter_purchases, find_purchase, mock_purchases, OrderStep, Purchase, PurchaseKind,
    PurchaseStatus, PurchaseTab, StepState,
};
pub use talent::{mock_talent, search_talent, TalentProfile};
