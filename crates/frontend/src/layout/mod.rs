pub mod global_context;
pub mod navbar;

pub use global_context::{AppGlobalContext, Page};
pub use navbar::Navbar;
