//! View/state controller for the user table.
//!
//! Owns the cached user list, the form draft, and the form mode, and
//! dispatches store calls in response to operator actions. The cache is
//! transient: every successful mutation is followed by a full re-fetch
//! of the collection rather than a local reconciliation.
//!
//! Failures are written to the diagnostic stream and never surfaced to
//! the operator; the visible state simply stays as it was.

use std::sync::Arc;

use tracing::{error, warn};

use crate::api::UserStore;
use crate::models::{FormMode, FormState, User, UserId};

/// The interactive state behind the user table and its form.
pub struct Session {
    store: Arc<dyn UserStore>,
    users: Vec<User>,
    form: FormState,
    mode: FormMode,
}

impl Session {
    /// Start with an empty list and a blank create draft.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            users: Vec::new(),
            form: FormState::default(),
            mode: FormMode::Creating,
        }
    }

    /// The cached user list, in backend order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The current form draft.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// What the next submit will do.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Fetch the full collection and replace the local list.
    ///
    /// No retry: on failure the previous (possibly empty) list stays
    /// displayed.
    pub async fn load(&mut self) {
        match self.store.list().await {
            Ok(users) => self.users = users,
            Err(e) => error!("failed to fetch users: {e}"),
        }
    }

    /// Update the name field of the draft. No validation.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    /// Update the email field of the draft. No validation.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    /// Copy a row into the draft and switch to editing it.
    ///
    /// An identifier that is not in the current list is logged and
    /// ignored — there is no row to copy from.
    pub fn begin_edit(&mut self, id: UserId) {
        match self.users.iter().find(|u| u.id == id) {
            Some(user) => {
                self.form.fill_from(user);
                self.mode = FormMode::Editing(id);
            }
            None => warn!("no user {id} in the current list"),
        }
    }

    /// Submit the draft: create when `Creating`, update when `Editing`.
    pub async fn submit(&mut self) {
        match self.mode {
            FormMode::Creating => self.submit_create().await,
            FormMode::Editing(id) => self.submit_update(id).await,
        }
    }

    async fn submit_create(&mut self) {
        match self.store.create(&self.form.to_payload()).await {
            Ok(()) => {
                self.load().await;
                self.form.clear();
            }
            // The draft stays populated so the operator can retry.
            Err(e) => error!("failed to add user: {e}"),
        }
    }

    async fn submit_update(&mut self, id: UserId) {
        match self.store.update(id, &self.form.to_payload()).await {
            Ok(()) => {
                self.load().await;
                self.form.clear();
                self.mode = FormMode::Creating;
            }
            // Draft, list, and mode stay untouched; still editing `id`.
            Err(e) => error!("failed to save user {id}: {e}"),
        }
    }

    /// Send a delete and drop the row from the local list once the
    /// request completes, whatever the status code says. The list is
    /// reconciled with the backend on the next full refresh.
    pub async fn delete(&mut self, id: UserId) {
        match self.store.delete(id).await {
            Ok(status) => {
                if !(200..300).contains(&status) {
                    warn!("delete of user {id} returned HTTP {status}; list may be stale");
                }
                self.users.retain(|u| u.id != id);
            }
            Err(e) => error!("failed to delete user {id}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{StoreError, UserStore};
    use crate::models::UserPayload;
    use async_trait::async_trait;

    /// A store with a fixed list; mutations always succeed.
    struct FixedStore {
        users: Vec<User>,
    }

    #[async_trait]
    impl UserStore for FixedStore {
        async fn list(&self) -> Result<Vec<User>, StoreError> {
            Ok(self.users.clone())
        }

        async fn create(&self, _payload: &UserPayload) -> Result<(), StoreError> {
            Ok(())
        }

        async fn update(&self, _id: UserId, _payload: &UserPayload) -> Result<(), StoreError> {
            Ok(())
        }

        async fn delete(&self, _id: UserId) -> Result<u16, StoreError> {
            Ok(200)
        }
    }

    fn ana() -> User {
        User {
            id: UserId(1),
            name: "Ana".into(),
            email: "ana@x.com".into(),
        }
    }

    fn session_with(users: Vec<User>) -> Session {
        Session::new(Arc::new(FixedStore { users }))
    }

    #[tokio::test]
    async fn load_replaces_the_list() {
        let mut session = session_with(vec![ana()]);
        assert!(session.users().is_empty());
        session.load().await;
        assert_eq!(session.users().len(), 1);
        assert_eq!(session.users()[0].name, "Ana");
    }

    #[tokio::test]
    async fn begin_edit_copies_row_and_enters_editing() {
        let mut session = session_with(vec![ana()]);
        session.load().await;
        session.begin_edit(UserId(1));
        assert_eq!(session.mode(), FormMode::Editing(UserId(1)));
        assert_eq!(session.form().name, "Ana");
        assert_eq!(session.form().email, "ana@x.com");
    }

    #[tokio::test]
    async fn begin_edit_of_unknown_id_is_ignored() {
        let mut session = session_with(vec![ana()]);
        session.load().await;
        session.begin_edit(UserId(99));
        assert_eq!(session.mode(), FormMode::Creating);
        assert_eq!(session.form(), &FormState::default());
    }

    #[tokio::test]
    async fn field_edits_update_the_draft_immediately() {
        let mut session = session_with(vec![]);
        session.set_name("Bo");
        session.set_email("bo@x.com");
        assert_eq!(session.form().name, "Bo");
        assert_eq!(session.form().email, "bo@x.com");
    }

    #[tokio::test]
    async fn successful_update_returns_to_creating() {
        let mut session = session_with(vec![ana()]);
        session.load().await;
        session.begin_edit(UserId(1));
        session.set_email("ana@y.com");
        session.submit().await;
        assert_eq!(session.mode(), FormMode::Creating);
        assert_eq!(session.form(), &FormState::default());
    }
}
