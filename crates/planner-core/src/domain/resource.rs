//! Resource Contract
//!
//! Ties a record type to its REST collection and to the draft the form
//! controller edits.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::entity::{DomainResult, Entity};

/// Transient form values for one record
pub trait Draft: Clone + Default + PartialEq {
    /// Body sent on create and update
    type Payload: Serialize;

    /// Normalize the draft into a request payload, or block the submit.
    fn to_payload(&self) -> DomainResult<Self::Payload>;
}

/// A record kind served by one REST collection (`/api/{COLLECTION}`)
pub trait Resource: Entity<Id = String> + DeserializeOwned {
    /// Path segment under `/api`
    const COLLECTION: &'static str;

    type Draft: Draft;

    /// Pre-fill a draft for edit mode
    fn to_draft(&self) -> Self::Draft;
}

/// A closed string enumeration offered through a dropdown
pub trait Choice: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    /// Wire value
    fn as_str(&self) -> &'static str;

    /// Display label
    fn label(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}
