//! Guest Entity
//!
//! Invitees and their RSVP state.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::draft::{self, timestamp};
use super::entity::{DomainResult, Entity};
use super::resource::{Choice, Draft, Resource};

/// Groups offered by the guest form
pub const GUEST_GROUPS: &[&str] = &["Family", "Friends", "Work", "Other"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl Choice for RsvpStatus {
    const ALL: &'static [Self] = &[RsvpStatus::Pending, RsvpStatus::Accepted, RsvpStatus::Declined];

    fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Pending => "pending",
            RsvpStatus::Accepted => "accepted",
            RsvpStatus::Declined => "declined",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RsvpStatus::Pending => "Pending",
            RsvpStatus::Accepted => "Accepted",
            RsvpStatus::Declined => "Declined",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rsvp_status: RsvpStatus,
    #[serde(default)]
    pub dietary_restrictions: Option<String>,
    #[serde(default)]
    pub plus_one: bool,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl Entity for Guest {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub rsvp_status: RsvpStatus,
    pub dietary_restrictions: String,
    pub plus_one: bool,
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestPayload {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rsvp_status: RsvpStatus,
    pub dietary_restrictions: Option<String>,
    pub plus_one: bool,
    pub group: Option<String>,
}

impl Draft for GuestDraft {
    type Payload = GuestPayload;

    fn to_payload(&self) -> DomainResult<GuestPayload> {
        Ok(GuestPayload {
            name: draft::required_text("name", &self.name)?,
            email: draft::optional_text(&self.email),
            phone: draft::optional_text(&self.phone),
            rsvp_status: self.rsvp_status,
            dietary_restrictions: draft::optional_text(&self.dietary_restrictions),
            plus_one: self.plus_one,
            group: draft::optional_text(&self.group),
        })
    }
}

impl Resource for Guest {
    const COLLECTION: &'static str = "guests";

    type Draft = GuestDraft;

    fn to_draft(&self) -> GuestDraft {
        GuestDraft {
            name: self.name.clone(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            rsvp_status: self.rsvp_status,
            dietary_restrictions: self.dietary_restrictions.clone().unwrap_or_default(),
            plus_one: self.plus_one,
            group: self.group.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsvp_status_wire_values() {
        assert_eq!(serde_json::to_value(RsvpStatus::Accepted).unwrap(), "accepted");
        assert_eq!(RsvpStatus::parse("declined"), Some(RsvpStatus::Declined));
        assert_eq!(RsvpStatus::parse("maybe"), None);
    }

    #[test]
    fn test_guest_defaults_from_minimal_record() {
        let guest: Guest = serde_json::from_str(r#"{"id":"g1","name":"Lia"}"#).unwrap();
        assert_eq!(guest.rsvp_status, RsvpStatus::Pending);
        assert!(!guest.plus_one);
        assert_eq!(guest.group, None);
    }

    #[test]
    fn test_payload_normalizes_contact_fields() {
        let draft = GuestDraft {
            name: "Lia".into(),
            email: " ".into(),
            phone: "555-0101".into(),
            rsvp_status: RsvpStatus::Accepted,
            plus_one: true,
            ..Default::default()
        };
        let body = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
        assert!(body["email"].is_null());
        assert_eq!(body["phone"], "555-0101");
        assert_eq!(body["rsvp_status"], "accepted");
        assert_eq!(body["plus_one"], true);
    }
}
