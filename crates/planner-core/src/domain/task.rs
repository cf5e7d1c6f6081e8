//! Task Entity
//!
//! Planning checklist items. Completion is toggled on its own, outside
//! the edit form.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};

use super::draft::{self, timestamp, DATETIME_FORMAT, DATE_INPUT_FORMAT};
use super::entity::{DomainResult, Entity};
use super::resource::{Choice, Draft, Resource};

pub const TASK_CATEGORIES: &[&str] = &[
    "Venue",
    "Attire",
    "Catering",
    "Guests",
    "Decor",
    "Legal",
    "Honeymoon",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Choice for Priority {
    const ALL: &'static [Self] = &[Priority::Low, Priority::Medium, Priority::High];

    fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    #[serde(default, with = "timestamp")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl Task {
    /// Open and due strictly before `now`
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }

    /// Full update body carrying the record's current values
    pub fn to_payload(&self) -> TaskPayload {
        TaskPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            due_date: self.due_date.map(DueDate::At),
            priority: self.priority,
            assigned_to: self.assigned_to.clone(),
            notes: self.notes.clone(),
            completed: self.completed,
        }
    }

    /// Update body with only `completed` flipped
    pub fn toggled_payload(&self) -> TaskPayload {
        TaskPayload {
            completed: !self.completed,
            ..self.to_payload()
        }
    }
}

impl Entity for Task {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub due_date: String,
    pub priority: Priority,
    pub assigned_to: String,
    pub notes: String,
    /// Carried through edits so saving the form never reopens a task
    pub completed: bool,
}

/// Due date as sent: a day picked in the form, or a stored timestamp
/// echoed back with its time of day intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueDate {
    Day(NaiveDate),
    At(NaiveDateTime),
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DueDate::Day(day) => serializer.collect_str(&day.format(DATE_INPUT_FORMAT)),
            DueDate::At(at) => serializer.collect_str(&at.format(DATETIME_FORMAT)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub due_date: Option<DueDate>,
    pub priority: Priority,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
    pub completed: bool,
}

impl Draft for TaskDraft {
    type Payload = TaskPayload;

    fn to_payload(&self) -> DomainResult<TaskPayload> {
        Ok(TaskPayload {
            title: draft::required_text("title", &self.title)?,
            description: draft::optional_text(&self.description),
            category: draft::required_text("category", &self.category)?,
            due_date: draft::optional_date("due_date", &self.due_date)?.map(DueDate::Day),
            priority: self.priority,
            assigned_to: draft::optional_text(&self.assigned_to),
            notes: draft::optional_text(&self.notes),
            completed: self.completed,
        })
    }
}

impl Resource for Task {
    const COLLECTION: &'static str = "tasks";

    type Draft = TaskDraft;

    fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone().unwrap_or_default(),
            category: self.category.clone(),
            due_date: draft::optional_date_input(self.due_date),
            priority: self.priority,
            assigned_to: self.assigned_to.clone().unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
            completed: self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::draft::parse_timestamp;

    fn task(completed: bool, due: Option<&str>) -> Task {
        Task {
            id: "t1".into(),
            title: "Book photographer".into(),
            description: Some("Shortlist three".into()),
            category: "Vendors".into(),
            due_date: due.and_then(parse_timestamp),
            completed,
            priority: Priority::High,
            assigned_to: None,
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn test_toggle_flips_only_completed() {
        let t = task(false, Some("2025-03-01"));
        let mut before = serde_json::to_value(t.to_payload()).unwrap();
        let after = serde_json::to_value(t.toggled_payload()).unwrap();

        assert_eq!(after["completed"], true);
        before["completed"] = serde_json::Value::Bool(true);
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_keeps_time_of_day() {
        let t: Task = serde_json::from_str(
            r#"{"id":"t3","title":"Rehearsal","category":"Venue","due_date":"2024-12-15T18:30:00"}"#,
        )
        .unwrap();
        let body = serde_json::to_value(t.toggled_payload()).unwrap();
        assert_eq!(body["due_date"], "2024-12-15T18:30:00");
        assert_eq!(body["completed"], true);
    }

    #[test]
    fn test_overdue_is_strictly_before_now() {
        let now = parse_timestamp("2025-03-01T00:00:00").unwrap();
        assert!(task(false, Some("2025-02-28")).is_overdue(now));
        assert!(!task(false, Some("2025-03-01")).is_overdue(now));
        assert!(!task(true, Some("2025-02-01")).is_overdue(now));
        assert!(!task(false, None).is_overdue(now));
    }

    #[test]
    fn test_edit_keeps_completion_and_date() {
        let t = task(true, Some("2025-03-01T00:00:00"));
        let payload = t.to_draft().to_payload().unwrap();
        assert!(payload.completed);
        assert_eq!(payload.due_date, NaiveDate::from_ymd_opt(2025, 3, 1).map(DueDate::Day));
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["due_date"], "2025-03-01");
    }

    #[test]
    fn test_priority_defaults_to_medium() {
        let t: Task = serde_json::from_str(r#"{"id":"t2","title":"Cake","category":"Catering"}"#).unwrap();
        assert_eq!(t.priority, Priority::Medium);
        assert!(!t.completed);
    }
}
