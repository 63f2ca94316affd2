//! Circle member list store (admin dashboard)

use shared::models::{CircleMember, CircleMemberCreate, CircleMemberUpdate};
use tokio::sync::watch;
use validator::Validate;

use super::{Generation, Store, error_message};
use crate::client::AdminClient;
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleMembersState {
    pub members: Vec<CircleMember>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Holds the last fetched member list.
///
/// Loads swallow their errors into `error`; create/update/delete record the
/// error and also return it so a form can react.
#[derive(Debug)]
pub struct CircleMembersStore {
    client: AdminClient,
    state: Store<CircleMembersState>,
    generation: Generation,
}

impl CircleMembersStore {
    pub fn new(client: AdminClient) -> Self {
        Self {
            client,
            state: Store::default(),
            generation: Generation::default(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<CircleMembersState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> CircleMembersState {
        self.state.get()
    }

    /// Load all circle members
    pub async fn load_members(&self) {
        let ticket = self.begin();
        let result = self.client.circle_members().list().await;
        self.commit_load(ticket, result, "Failed to load members");
    }

    /// Load active circle members only
    pub async fn load_active_members(&self) {
        let ticket = self.begin();
        let result = self.client.circle_members().active().await;
        self.commit_load(ticket, result, "Failed to load active members");
    }

    /// Fetch one member without touching the list or the loading flag
    pub async fn get_member(&self, id: i64) -> Option<CircleMember> {
        match self.client.circle_members().get(id).await {
            Ok(member) => Some(member),
            Err(e) => {
                let message = error_message(&e, "Failed to get member");
                self.state.update(|s| s.error = Some(message));
                None
            }
        }
    }

    /// Create a member and append it
    pub async fn create_member(&self, data: CircleMemberCreate) -> ClientResult<CircleMember> {
        self.validate(&data, "Failed to create member")?;

        let ticket = self.begin();
        match self.client.circle_members().create(&data).await {
            Ok(member) => {
                self.commit_mutation(ticket, |members| upsert(members, &member));
                tracing::debug!(id = member.id, "Circle member created");
                Ok(member)
            }
            Err(e) => Err(self.fail(ticket, e, "Failed to create member")),
        }
    }

    /// Update a member and replace the entry with the same id
    pub async fn update_member(
        &self,
        id: i64,
        data: CircleMemberUpdate,
    ) -> ClientResult<CircleMember> {
        self.validate(&data, "Failed to update member")?;

        let ticket = self.begin();
        match self.client.circle_members().update(id, &data).await {
            Ok(updated) => {
                self.commit_mutation(ticket, |members| {
                    if let Some(member) = members.iter_mut().find(|m| m.id == id) {
                        *member = updated.clone();
                    }
                });
                Ok(updated)
            }
            Err(e) => Err(self.fail(ticket, e, "Failed to update member")),
        }
    }

    /// Delete a member and drop it from the list
    pub async fn delete_member(&self, id: i64) -> ClientResult<()> {
        let ticket = self.begin();
        match self.client.circle_members().delete(id).await {
            Ok(()) => {
                self.commit_mutation(ticket, |members| members.retain(|m| m.id != id));
                Ok(())
            }
            Err(e) => Err(self.fail(ticket, e, "Failed to delete member")),
        }
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    /// Back to the initial state; in-flight loads and mutations are discarded
    pub fn reset(&self) {
        self.generation.reset();
        self.state.set(CircleMembersState::default());
    }

    fn begin(&self) -> u64 {
        let ticket = self.generation.next();
        self.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });
        ticket
    }

    fn validate<V: Validate>(&self, data: &V, fallback: &str) -> ClientResult<()> {
        data.validate().map_err(|errors| {
            let err = ClientError::from(errors);
            let message = error_message(&err, fallback);
            self.state.update(|s| s.error = Some(message));
            err
        })
    }

    fn commit_load(&self, ticket: u64, result: ClientResult<Vec<CircleMember>>, fallback: &str) {
        let committed = self.state.update_if(|s| {
            if !self.generation.is_current(ticket) {
                return false;
            }
            s.is_loading = false;
            match result {
                Ok(members) => s.members = members,
                Err(e) => s.error = Some(error_message(&e, fallback)),
            }
            true
        });
        if !committed {
            tracing::debug!(ticket, "Discarding stale circle member load");
        }
    }

    /// Server-confirmed changes land unless a reset happened in between.
    /// Splices are keyed by id, so a newer load that already holds the
    /// entity is not duplicated. Only the newest ticket clears the loading flag.
    fn commit_mutation(&self, ticket: u64, splice: impl FnOnce(&mut Vec<CircleMember>)) {
        let committed = self.state.update_if(|s| {
            if !self.generation.survives_reset(ticket) {
                return false;
            }
            splice(&mut s.members);
            if self.generation.is_current(ticket) {
                s.is_loading = false;
            }
            true
        });
        if !committed {
            tracing::debug!(ticket, "Discarding circle member change made before reset");
        }
    }

    fn fail(&self, ticket: u64, err: ClientError, fallback: &str) -> ClientError {
        let message = error_message(&err, fallback);
        self.state.update_if(|s| {
            if !self.generation.is_current(ticket) {
                return false;
            }
            s.is_loading = false;
            s.error = Some(message);
            true
        });
        err
    }
}

/// Replace the entry with the same id, or append when there is none
fn upsert(members: &mut Vec<CircleMember>, member: &CircleMember) {
    match members.iter_mut().find(|m| m.id == member.id) {
        Some(existing) => *existing = member.clone(),
        None => members.push(member.clone()),
    }
}
