//! Vendor Entity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::draft::{self, timestamp};
use super::entity::{DomainResult, Entity};
use super::resource::{Choice, Draft, Resource};

pub const VENDOR_CATEGORIES: &[&str] = &[
    "Photographer",
    "Videographer",
    "Florist",
    "Caterer",
    "Baker",
    "Music/DJ",
    "Officiant",
    "Hair & Makeup",
    "Transportation",
    "Other",
];

/// Rating options; the select is the only bound on the value
pub const RATING_OPTIONS: &[u32] = &[1, 2, 3, 4, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    #[default]
    Researching,
    Contacted,
    Quoted,
    Booked,
}

impl Choice for VendorStatus {
    const ALL: &'static [Self] = &[
        VendorStatus::Researching,
        VendorStatus::Contacted,
        VendorStatus::Quoted,
        VendorStatus::Booked,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Researching => "researching",
            VendorStatus::Contacted => "contacted",
            VendorStatus::Quoted => "quoted",
            VendorStatus::Booked => "booked",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            VendorStatus::Researching => "Researching",
            VendorStatus::Contacted => "Contacted",
            VendorStatus::Quoted => "Quoted",
            VendorStatus::Booked => "Booked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub price_quote: Option<f64>,
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub status: VendorStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl Entity for Vendor {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorDraft {
    pub name: String,
    pub category: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub price_quote: String,
    pub rating: String,
    pub status: VendorStatus,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorPayload {
    pub name: String,
    pub category: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub price_quote: Option<f64>,
    pub rating: Option<u32>,
    pub status: VendorStatus,
    pub notes: Option<String>,
}

impl Draft for VendorDraft {
    type Payload = VendorPayload;

    fn to_payload(&self) -> DomainResult<VendorPayload> {
        Ok(VendorPayload {
            name: draft::required_text("name", &self.name)?,
            category: draft::required_text("category", &self.category)?,
            contact_person: draft::optional_text(&self.contact_person),
            email: draft::optional_text(&self.email),
            phone: draft::optional_text(&self.phone),
            address: draft::optional_text(&self.address),
            price_quote: draft::optional_amount("price_quote", &self.price_quote)?,
            rating: draft::optional_count("rating", &self.rating)?,
            status: self.status,
            notes: draft::optional_text(&self.notes),
        })
    }
}

impl Resource for Vendor {
    const COLLECTION: &'static str = "vendors";

    type Draft = VendorDraft;

    fn to_draft(&self) -> VendorDraft {
        VendorDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            contact_person: self.contact_person.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
            price_quote: draft::optional_amount_input(self.price_quote),
            rating: draft::optional_count_input(self.rating),
            status: self.status,
            notes: self.notes.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_numbers_are_parsed_per_field_kind() {
        let draft = VendorDraft {
            name: "Bloom & Co".into(),
            category: "Florist".into(),
            price_quote: "1499.99".into(),
            rating: "4".into(),
            status: VendorStatus::Quoted,
            ..Default::default()
        };
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.price_quote, Some(1499.99));
        assert_eq!(payload.rating, Some(4));
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["status"], "quoted");
        assert!(body["address"].is_null());
    }

    #[test]
    fn test_name_and_category_are_required() {
        let draft = VendorDraft { category: "Florist".into(), ..Default::default() };
        assert_eq!(draft.to_payload().unwrap_err(), DomainError::MissingField("name"));
        let draft = VendorDraft { name: "Bloom".into(), ..Default::default() };
        assert_eq!(draft.to_payload().unwrap_err(), DomainError::MissingField("category"));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<Vendor, _> =
            serde_json::from_str(r#"{"id":"v1","name":"X","category":"Baker","status":"fired"}"#);
        assert!(result.is_err());
    }
}
