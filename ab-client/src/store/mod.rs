//! Observable state containers
//!
//! A store owns one slice of remote state, mutates it only through its own
//! actions and publishes every change on a `tokio::sync::watch` channel.
//! Stores are plain values built around an injected client; there are no
//! global singletons.

mod auth;
mod circle_members;

pub use auth::{AuthState, AuthStore};
pub use circle_members::{CircleMembersState, CircleMembersStore};

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use crate::error::ClientError;

/// Reactive state cell
#[derive(Debug)]
pub struct Store<T> {
    tx: watch::Sender<T>,
}

impl<T> Store<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Receiver that observes every subsequent write
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate in place and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Mutate in place; subscribers are notified only when `f` returns true
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }
}

impl<T: Clone> Store<T> {
    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Monotonic request ticket counter.
///
/// Each action takes a ticket before it calls the backend. Only the holder
/// of the newest ticket may commit loading/error/replace-style results, so
/// overlapping calls resolve to the most recently issued one.
///
/// `reset` draws a line: tickets issued before it are dead and may not
/// write anything at all.
#[derive(Debug, Default)]
pub struct Generation {
    latest: AtomicU64,
    reset_at: AtomicU64,
}

impl Generation {
    /// Issue a new ticket, invalidating all earlier ones
    pub fn next(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// Kill every ticket issued so far
    pub fn reset(&self) {
        let ticket = self.next();
        self.reset_at.fetch_max(ticket, Ordering::SeqCst);
    }

    /// False once a `reset` happened after the ticket was issued
    pub fn survives_reset(&self, ticket: u64) -> bool {
        ticket > self.reset_at.load(Ordering::SeqCst)
    }
}

/// Error text for state, falling back when the error carries none
pub(crate) fn error_message(err: &ClientError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
