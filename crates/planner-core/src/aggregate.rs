//! Aggregation Views
//!
//! Synchronous folds over the list a view has loaded. Nothing here reads
//! another view's data; the server's dashboard summary is a separate,
//! pre-computed shape ([`DashboardAnalytics`]).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{BudgetItem, Guest, RsvpStatus, Task, Vendor, VendorStatus};

/// Display tone for signed amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    /// Zero counts as positive: nothing is overspent.
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Positive => "amount-positive",
            Tone::Negative => "amount-negative",
        }
    }
}

/// `100 * part / whole`, clamped to a bar width. Zero when `whole` is zero.
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 {
        return 0.0;
    }
    (100.0 * part / whole).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetSummary {
    pub total_planned: f64,
    pub total_spent: f64,
    pub remaining: f64,
}

impl BudgetSummary {
    pub fn from_items(items: &[BudgetItem]) -> Self {
        let total_planned: f64 = items.iter().map(|b| b.planned_amount).sum();
        let total_spent: f64 = items.iter().map(|b| b.spent_amount).sum();
        Self {
            total_planned,
            total_spent,
            remaining: total_planned - total_spent,
        }
    }

    pub fn remaining_tone(&self) -> Tone {
        Tone::of(self.remaining)
    }

    pub fn spent_percent(&self) -> f64 {
        percent(self.total_spent, self.total_planned)
    }
}

/// Planned and spent per category, for the analytics chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub planned: f64,
    pub spent: f64,
}

/// Totals grouped by category, in first-seen order
pub fn budget_by_category(items: &[BudgetItem]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for item in items {
        match totals.iter_mut().find(|t| t.category == item.category) {
            Some(total) => {
                total.planned += item.planned_amount;
                total.spent += item.spent_amount;
            }
            None => totals.push(CategoryTotal {
                category: item.category.clone(),
                planned: item.planned_amount,
                spent: item.spent_amount,
            }),
        }
    }
    totals
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuestSummary {
    pub total: usize,
    pub accepted: usize,
    pub declined: usize,
    pub pending: usize,
    /// Guests bringing a plus-one, whatever their RSVP
    pub plus_ones: usize,
}

impl GuestSummary {
    pub fn from_guests(guests: &[Guest]) -> Self {
        guests.iter().fold(Self::default(), |mut s, g| {
            s.total += 1;
            match g.rsvp_status {
                RsvpStatus::Accepted => s.accepted += 1,
                RsvpStatus::Declined => s.declined += 1,
                RsvpStatus::Pending => s.pending += 1,
            }
            if g.plus_one {
                s.plus_ones += 1;
            }
            s
        })
    }

    pub fn count(&self, status: RsvpStatus) -> usize {
        match status {
            RsvpStatus::Accepted => self.accepted,
            RsvpStatus::Declined => self.declined,
            RsvpStatus::Pending => self.pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VendorSummary {
    pub total: usize,
    pub researching: usize,
    pub contacted: usize,
    pub quoted: usize,
    pub booked: usize,
}

impl VendorSummary {
    pub fn from_vendors(vendors: &[Vendor]) -> Self {
        vendors.iter().fold(Self::default(), |mut s, v| {
            s.total += 1;
            match v.status {
                VendorStatus::Researching => s.researching += 1,
                VendorStatus::Contacted => s.contacted += 1,
                VendorStatus::Quoted => s.quoted += 1,
                VendorStatus::Booked => s.booked += 1,
            }
            s
        })
    }

    pub fn count(&self, status: VendorStatus) -> usize {
        match status {
            VendorStatus::Researching => self.researching,
            VendorStatus::Contacted => self.contacted,
            VendorStatus::Quoted => self.quoted,
            VendorStatus::Booked => self.booked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

impl TaskSummary {
    pub fn from_tasks(tasks: &[Task], now: NaiveDateTime) -> Self {
        tasks.iter().fold(Self::default(), |mut s, t| {
            s.total += 1;
            if t.completed {
                s.completed += 1;
            } else {
                s.pending += 1;
            }
            if t.is_overdue(now) {
                s.overdue += 1;
            }
            s
        })
    }
}

// ========================
// Server-computed dashboard (GET /analytics/dashboard)
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardAnalytics {
    pub budget: BudgetAnalytics,
    pub guests: GuestAnalytics,
    pub tasks: TaskAnalytics,
    pub vendors: VendorAnalytics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAnalytics {
    pub total_planned: f64,
    pub total_spent: f64,
    pub remaining: f64,
    /// Number of distinct categories
    pub categories: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestAnalytics {
    pub total: u32,
    pub accepted: u32,
    pub declined: u32,
    pub pending: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAnalytics {
    pub total: u32,
    pub completed: u32,
    pub pending: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorAnalytics {
    pub total: u32,
    pub booked: u32,
}
