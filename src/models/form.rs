//! Form draft and mode.
//!
//! The mode is a tagged variant rather than a boolean next to a nullable
//! identifier, so "editing with no target" cannot be represented.

use crate::models::user::{User, UserId, UserPayload};

/// The transient values bound to the input fields before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
}

impl FormState {
    /// Reset both fields to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
    }

    /// Copy a row's name and email into the draft.
    pub fn fill_from(&mut self, user: &User) {
        self.name = user.name.clone();
        self.email = user.email.clone();
    }

    /// Snapshot the draft as a request body.
    pub fn to_payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// What the next submit action does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Submit creates a new record.
    #[default]
    Creating,
    /// Submit updates the record with this identifier.
    Editing(UserId),
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Editing(_))
    }

    /// The update target, when editing.
    pub fn target(&self) -> Option<UserId> {
        match self {
            FormMode::Creating => None,
            FormMode::Editing(id) => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_mode_is_creating() {
        assert_eq!(FormMode::default(), FormMode::Creating);
        assert!(!FormMode::default().is_editing());
        assert_eq!(FormMode::default().target(), None);
    }

    #[test]
    fn editing_carries_its_target() {
        let mode = FormMode::Editing(UserId(5));
        assert!(mode.is_editing());
        assert_eq!(mode.target(), Some(UserId(5)));
    }

    #[test]
    fn fill_from_copies_row_fields() {
        let user = User {
            id: UserId(1),
            name: "Ana".into(),
            email: "ana@x.com".into(),
        };
        let mut form = FormState::default();
        form.fill_from(&user);
        assert_eq!(form.name, "Ana");
        assert_eq!(form.email, "ana@x.com");
    }

    #[test]
    fn clear_empties_both_fields() {
        let mut form = FormState {
            name: "Ana".into(),
            email: "ana@x.com".into(),
        };
        form.clear();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn to_payload_snapshots_draft() {
        let form = FormState {
            name: "Ana".into(),
            email: "ana@y.com".into(),
        };
        let payload = form.to_payload();
        assert_eq!(payload.name, "Ana");
        assert_eq!(payload.email, "ana@y.com");
    }
}
