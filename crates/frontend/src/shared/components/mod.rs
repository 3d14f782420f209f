pub mod confirm_dialog;
pub mod message_banner;
pub mod stat_card;

pub use confirm_dialog::ConfirmDialog;
pub use message_banner::{Banner, MessageBanner};
pub use stat_card::StatCard;
