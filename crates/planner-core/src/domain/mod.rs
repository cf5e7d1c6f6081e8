//! Domain Layer
//!
//! Records served by the backend, the drafts the forms edit, and the
//! normalization between them. No I/O happens here.

mod entity;
mod resource;
pub mod draft;
mod user;
mod budget;
mod guest;
mod vendor;
mod task;
mod venue;

pub use entity::{Entity, DomainError, DomainResult};
pub use resource::{Choice, Draft, Resource};
pub use user::{AuthToken, Countdown, CredentialsDraft, LoginRequest, RegisterRequest, User};
pub use budget::{BudgetDraft, BudgetItem, BudgetPayload, BUDGET_CATEGORIES};
pub use guest::{Guest, GuestDraft, GuestPayload, RsvpStatus, GUEST_GROUPS};
pub use vendor::{Vendor, VendorDraft, VendorPayload, VendorStatus, RATING_OPTIONS, VENDOR_CATEGORIES};
pub use task::{DueDate, Priority, Task, TaskDraft, TaskPayload, TASK_CATEGORIES};
pub use venue::{Venue, VenueDraft, VenuePayload, VenueStatus, VENUE_TYPES};
