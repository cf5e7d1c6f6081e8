//! Budget Entity
//!
//! One planned/spent line per expense category.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::draft::{self, timestamp};
use super::entity::{DomainResult, Entity};
use super::resource::{Draft, Resource};

/// Categories offered by the budget form
pub const BUDGET_CATEGORIES: &[&str] = &[
    "Venue",
    "Catering",
    "Photography",
    "Flowers",
    "Music/DJ",
    "Transportation",
    "Attire",
    "Rings",
    "Decorations",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: String,
    pub category: String,
    pub planned_amount: f64,
    #[serde(default)]
    pub spent_amount: f64,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl BudgetItem {
    /// Planned minus spent; negative when over budget
    pub fn remaining(&self) -> f64 {
        self.planned_amount - self.spent_amount
    }
}

impl Entity for BudgetItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetDraft {
    pub category: String,
    pub planned_amount: String,
    pub spent_amount: String,
    pub vendor: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetPayload {
    pub category: String,
    pub planned_amount: f64,
    pub spent_amount: f64,
    pub vendor: Option<String>,
    pub notes: Option<String>,
}

impl Draft for BudgetDraft {
    type Payload = BudgetPayload;

    fn to_payload(&self) -> DomainResult<BudgetPayload> {
        Ok(BudgetPayload {
            category: draft::required_text("category", &self.category)?,
            planned_amount: draft::required_amount("planned_amount", &self.planned_amount)?,
            spent_amount: draft::optional_amount("spent_amount", &self.spent_amount)?.unwrap_or(0.0),
            vendor: draft::optional_text(&self.vendor),
            notes: draft::optional_text(&self.notes),
        })
    }
}

impl Resource for BudgetItem {
    const COLLECTION: &'static str = "budget";

    type Draft = BudgetDraft;

    fn to_draft(&self) -> BudgetDraft {
        BudgetDraft {
            category: self.category.clone(),
            planned_amount: draft::amount_input(self.planned_amount),
            spent_amount: draft::amount_input(self.spent_amount),
            vendor: self.vendor.clone().unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_blank_optionals_become_null() {
        let draft = BudgetDraft {
            category: "Flowers".into(),
            planned_amount: "800".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
        assert_eq!(body["planned_amount"], 800.0);
        assert_eq!(body["spent_amount"], 0.0);
        assert!(body["vendor"].is_null());
        assert!(body["notes"].is_null());
    }

    #[test]
    fn test_missing_category_blocks_submit() {
        let draft = BudgetDraft { planned_amount: "800".into(), ..Default::default() };
        assert_eq!(draft.to_payload().unwrap_err(), DomainError::MissingField("category"));
    }

    #[test]
    fn test_edit_draft_round_trips_record_values() {
        let item = BudgetItem {
            id: "b1".into(),
            category: "Venue".into(),
            planned_amount: 12000.0,
            spent_amount: 3500.5,
            vendor: Some("Rose Hall".into()),
            notes: None,
            created_at: None,
        };
        let payload = item.to_draft().to_payload().unwrap();
        assert_eq!(payload.planned_amount, 12000.0);
        assert_eq!(payload.spent_amount, 3500.5);
        assert_eq!(payload.vendor.as_deref(), Some("Rose Hall"));
        assert_eq!(payload.notes, None);
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let item = BudgetItem {
            id: "b2".into(),
            category: "Catering".into(),
            planned_amount: 1000.0,
            spent_amount: 1200.0,
            vendor: None,
            notes: None,
            created_at: None,
        };
        assert_eq!(item.remaining(), -200.0);
    }

    #[test]
    fn test_missing_spent_amount_defaults_to_zero() {
        let item: BudgetItem =
            serde_json::from_str(r#"{"id":"b3","user_id":"u1","category":"Rings","planned_amount":2500}"#).unwrap();
        assert_eq!(item.spent_amount, 0.0);
    }
}
