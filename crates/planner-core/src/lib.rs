//! Wedding Planner Core
//!
//! Layered like the app that uses it:
//! - domain: records, drafts, and draft normalization
//! - client: REST client over a pluggable transport
//! - session / navigation / shell: app-level state machines
//! - form / controller: per-view edit state and its async operations
//! - aggregate / ordering / format: pure view helpers

pub mod domain;
pub mod client;
pub mod session;
pub mod navigation;
pub mod shell;
pub mod form;
pub mod controller;
pub mod aggregate;
pub mod ordering;
pub mod format;
pub mod config;

mod tests;

pub use client::{ApiClient, ApiError, ApiResult, HttpTransport, ReqwestTransport};
pub use config::AppConfig;
pub use session::{MemoryTokenStore, Session, SessionPhase, TokenStore};
pub use shell::Shell;
pub use navigation::{Navigation, Page};
pub use form::{FormMode, FormState, Submission};
