//! Venue Entity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::draft::{self, timestamp};
use super::entity::{DomainResult, Entity};
use super::resource::{Choice, Draft, Resource};

pub const VENUE_TYPES: &[&str] = &["Ceremony", "Reception", "Ceremony & Reception", "Outdoor", "Other"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VenueStatus {
    #[default]
    Considering,
    Visited,
    Booked,
}

impl Choice for VenueStatus {
    const ALL: &'static [Self] = &[VenueStatus::Considering, VenueStatus::Visited, VenueStatus::Booked];

    fn as_str(&self) -> &'static str {
        match self {
            VenueStatus::Considering => "considering",
            VenueStatus::Visited => "visited",
            VenueStatus::Booked => "booked",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VenueStatus::Considering => "Considering",
            VenueStatus::Visited => "Visited",
            VenueStatus::Booked => "Booked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub venue_type: String,
    pub address: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub status: VenueStatus,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl Entity for Venue {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueDraft {
    pub name: String,
    pub venue_type: String,
    pub address: String,
    pub capacity: String,
    pub price: String,
    pub rating: String,
    pub status: VenueStatus,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenuePayload {
    pub name: String,
    pub venue_type: String,
    pub address: String,
    pub capacity: Option<u32>,
    pub price: Option<f64>,
    pub rating: Option<u32>,
    pub status: VenueStatus,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

impl Draft for VenueDraft {
    type Payload = VenuePayload;

    fn to_payload(&self) -> DomainResult<VenuePayload> {
        Ok(VenuePayload {
            name: draft::required_text("name", &self.name)?,
            venue_type: draft::required_text("venue_type", &self.venue_type)?,
            address: draft::required_text("address", &self.address)?,
            capacity: draft::optional_count("capacity", &self.capacity)?,
            price: draft::optional_amount("price", &self.price)?,
            rating: draft::optional_count("rating", &self.rating)?,
            status: self.status,
            contact_person: draft::optional_text(&self.contact_person),
            phone: draft::optional_text(&self.phone),
            email: draft::optional_text(&self.email),
            notes: draft::optional_text(&self.notes),
        })
    }
}

impl Resource for Venue {
    const COLLECTION: &'static str = "venues";

    type Draft = VenueDraft;

    fn to_draft(&self) -> VenueDraft {
        VenueDraft {
            name: self.name.clone(),
            venue_type: self.venue_type.clone(),
            address: self.address.clone(),
            capacity: draft::optional_count_input(self.capacity),
            price: draft::optional_amount_input(self.price),
            rating: draft::optional_count_input(self.rating),
            status: self.status,
            contact_person: self.contact_person.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
        }
    }
}
