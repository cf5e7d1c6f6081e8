//! Form/Edit Controller State
//!
//! Transient per-view state behind each "Add"/"Edit" modal: the draft,
//! whether the modal is open, and which record (if any) is being edited.

use crate::domain::{Draft, DomainResult, Resource};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(String),
}

/// What a valid submit turns into
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<P> {
    Create(P),
    Update { id: String, payload: P },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState<D> {
    visible: bool,
    mode: FormMode,
    pub draft: D,
}

impl<D: Draft> FormState<D> {
    /// Show an empty form for a new record
    pub fn open_create(&mut self) {
        self.visible = true;
        self.mode = FormMode::Create;
        self.draft = D::default();
    }

    /// Show the form pre-filled from an existing record
    pub fn open_edit<R: Resource<Draft = D>>(&mut self, record: &R) {
        self.visible = true;
        self.mode = FormMode::Edit(record.id().clone());
        self.draft = record.to_draft();
    }

    /// Hide the form and drop the draft (cancel, or after a successful save)
    pub fn close(&mut self) {
        *self = Self {
            visible: false,
            mode: FormMode::Create,
            draft: D::default(),
        };
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Validate the draft and decide between create and update.
    pub fn submission(&self) -> DomainResult<Submission<D::Payload>> {
        let payload = self.draft.to_payload()?;
        Ok(match &self.mode {
            FormMode::Create => Submission::Create(payload),
            FormMode::Edit(id) => Submission::Update {
                id: id.clone(),
                payload,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BudgetDraft, BudgetItem, DomainError};

    fn record() -> BudgetItem {
        BudgetItem {
            id: "b1".into(),
            category: "Venue".into(),
            planned_amount: 5000.0,
            spent_amount: 0.0,
            vendor: None,
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn test_create_flow() {
        let mut form = FormState::<BudgetDraft>::default();
        assert!(!form.is_visible());

        form.open_create();
        form.edit(|d| {
            d.category = "Flowers".into();
            d.planned_amount = "600".into();
        });
        assert!(form.is_visible());
        assert!(!form.is_editing());
        assert!(matches!(form.submission(), Ok(Submission::Create(p)) if p.planned_amount == 600.0));
    }

    #[test]
    fn test_edit_binds_selected_record() {
        let mut form = FormState::<BudgetDraft>::default();
        form.open_edit(&record());
        assert_eq!(form.mode(), &FormMode::Edit("b1".into()));
        assert_eq!(form.draft.category, "Venue");
        match form.submission().unwrap() {
            Submission::Update { id, payload } => {
                assert_eq!(id, "b1");
                assert_eq!(payload.planned_amount, 5000.0);
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_close_resets_everything() {
        let mut form = FormState::<BudgetDraft>::default();
        form.open_edit(&record());
        form.close();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_open_create_discards_previous_edit() {
        let mut form = FormState::<BudgetDraft>::default();
        form.open_edit(&record());
        form.open_create();
        assert_eq!(form.mode(), &FormMode::Create);
        assert_eq!(form.draft, BudgetDraft::default());
    }

    #[test]
    fn test_invalid_draft_keeps_values() {
        let mut form = FormState::<BudgetDraft>::default();
        form.open_create();
        form.edit(|d| d.vendor = "Rose Hall".into());
        assert_eq!(form.submission().unwrap_err(), DomainError::MissingField("category"));
        assert_eq!(form.draft.vendor, "Rose Hall");
        assert!(form.is_visible());
    }
}
