pub mod api;
pub mod context;

pub use context::{use_business, BusinessContext, ALL_BUSINESSES};
