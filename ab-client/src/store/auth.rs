//! Session store (admin dashboard)
//!
//! Tracks who is logged in for UI gating. The bearer token lives in the
//! shared `ApiClient`, so every other store using a clone of that client
//! is authenticated by a successful login here.

use shared::models::{CircleMember, User};
use tokio::sync::watch;

use super::{Generation, Store, error_message};
use crate::client::AdminClient;
use crate::error::ClientResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// Circle member profile of the logged-in user, if one exists
    pub circle_member: Option<CircleMember>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct AuthStore {
    client: AdminClient,
    state: Store<AuthState>,
    generation: Generation,
}

impl AuthStore {
    pub fn new(client: AdminClient) -> Self {
        Self {
            client,
            state: Store::default(),
            generation: Generation::default(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated
    }

    /// Log in and keep the returned token on the client
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<User> {
        let ticket = self.begin(true);

        let response = match self.client.auth().login(username, password).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(username, error = %e, "Login failed");
                let message = error_message(&e, "Login failed");
                self.state.update_if(|s| {
                    if !self.generation.is_current(ticket) {
                        return false;
                    }
                    s.is_loading = false;
                    s.error = Some(message);
                    true
                });
                return Err(e);
            }
        };

        if !self.generation.is_current(ticket) {
            tracing::debug!(ticket, "Discarding stale login result");
            return Ok(response.user);
        }

        self.client.set_token(Some(response.token)).await;
        let member = self.member_profile(&response.user.username).await;
        tracing::info!(username = %response.user.username, "User logged in");

        let user = response.user;
        self.state.update_if(|s| {
            if !self.generation.is_current(ticket) {
                return false;
            }
            *s = AuthState {
                user: Some(user.clone()),
                circle_member: member,
                is_authenticated: true,
                is_loading: false,
                error: None,
            };
            true
        });
        Ok(user)
    }

    /// End the session. Local state is cleared even if the backend call fails.
    pub async fn logout(&self) -> ClientResult<()> {
        let ticket = self.begin(false);
        let result = self.client.auth().logout().await;
        self.client.clear_token().await;

        let error = result
            .as_ref()
            .err()
            .map(|e| error_message(e, "Logout failed"));
        self.state.update_if(|s| {
            if !self.generation.is_current(ticket) {
                return false;
            }
            *s = AuthState {
                error,
                ..AuthState::default()
            };
            true
        });

        match &result {
            Ok(()) => tracing::info!("User logged out"),
            Err(e) => tracing::warn!(error = %e, "Logout request failed; session cleared locally"),
        }
        result
    }

    /// Restore the session from the client's token. Returns whether a user
    /// is authenticated afterwards.
    pub async fn check_auth(&self) -> bool {
        let ticket = self.begin(false);

        if self.client.token().await.is_none() {
            self.reset_if_current(ticket);
            return false;
        }

        match self.client.auth().me().await {
            Ok(user) => {
                let member = self.member_profile(&user.username).await;
                self.state.update_if(|s| {
                    if !self.generation.is_current(ticket) {
                        return false;
                    }
                    *s = AuthState {
                        user: Some(user),
                        circle_member: member,
                        is_authenticated: true,
                        is_loading: false,
                        error: None,
                    };
                    true
                })
            }
            Err(e) => {
                tracing::debug!(error = %e, "Session check failed");
                if self.generation.is_current(ticket) {
                    self.client.clear_token().await;
                }
                self.reset_if_current(ticket);
                false
            }
        }
    }

    /// Exchange the current token for a fresh one. A refresh overtaken by
    /// a newer auth action (logout, login) leaves the token alone.
    pub async fn refresh(&self) -> ClientResult<()> {
        let ticket = self.generation.next();
        match self.client.auth().refresh().await {
            Ok(refresh) => {
                if self.generation.is_current(ticket) {
                    self.client.set_token(Some(refresh.token)).await;
                    tracing::debug!("Session token refreshed");
                } else {
                    tracing::debug!(ticket, "Discarding stale token refresh");
                }
                Ok(())
            }
            Err(e) => {
                let message = error_message(&e, "Session refresh failed");
                self.state.update_if(|s| {
                    if !self.generation.is_current(ticket) {
                        return false;
                    }
                    s.error = Some(message);
                    true
                });
                Err(e)
            }
        }
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    fn begin(&self, clear_error: bool) -> u64 {
        let ticket = self.generation.next();
        self.state.update(|s| {
            s.is_loading = true;
            if clear_error {
                s.error = None;
            }
        });
        ticket
    }

    fn reset_if_current(&self, ticket: u64) {
        self.state.update_if(|s| {
            if !self.generation.is_current(ticket) {
                return false;
            }
            *s = AuthState::default();
            true
        });
    }

    /// Circle member profile for `username`; absence is not an error
    async fn member_profile(&self, username: &str) -> Option<CircleMember> {
        match self.client.circle_members().get_by_username(username).await {
            Ok(member) => Some(member),
            Err(e) => {
                tracing::debug!(username, error = %e, "No circle member profile");
                None
            }
        }
    }
}
