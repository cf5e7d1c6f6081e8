//! Domain Layer - Core Entity Trait
//!
//! Every record the backend hands out carries a server-assigned id.

use std::fmt::Display;
use std::hash::Hash;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash + Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for draft normalization
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors raised while turning a draft into a request payload.
///
/// These never reach the server: a submit that fails here is blocked
/// before any request is sent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a date (YYYY-MM-DD), got {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_field() {
        assert_eq!(DomainError::MissingField("category").to_string(), "category is required");
        let err = DomainError::InvalidNumber { field: "planned_amount", value: "abc".into() };
        assert!(err.to_string().contains("planned_amount"));
    }
}
