//! UI Components
//!
//! Pages plus the small pieces they share.

pub mod form_fields;
mod stat_card;
mod sidebar;
mod header;
mod auth_page;
mod dashboard;
mod budget_view;
mod guest_view;
mod vendor_view;
mod task_view;
mod venue_view;
mod analytics_view;

pub use stat_card::{ProgressBar, StatCard};
pub use sidebar::Sidebar;
pub use header::Header;
pub use auth_page::AuthPage;
pub use dashboard::Dashboard;
pub use budget_view::BudgetView;
pub use guest_view::GuestView;
pub use vendor_view::VendorView;
pub use task_view::TaskView;
pub use venue_view::VenueView;
pub use analytics_view::AnalyticsView;
