//! Community gallery state and its fetch protocol.
//!
//! DESIGN
//! ======
//! Fetches are tracked with a monotonic generation counter instead of a
//! boolean guard. Every attempt gets a fresh generation from
//! [`CreationsState::begin_fetch`], and a response may only land through
//! [`CreationsState::settle`] with the generation it was issued. A response
//! from a superseded attempt (the signed-in user changed mid-flight) is
//! discarded wholesale, so the list can never show one user's gallery under
//! another user's session.
//!
//! The gallery route calls [`CreationsState::reset`] on every mount: each
//! visit starts from the pre-fetch shape, and whatever an earlier visit
//! still had in flight is orphaned by the generation bump.

#[cfg(test)]
#[path = "creations_test.rs"]
mod creations_test;

use crate::net::types::Creation;

/// Published-creations list state for the community route.
///
/// `items` mirrors the server response including `null` holes; rendering
/// decides what a hole means, not this struct.
#[derive(Clone, Debug)]
pub struct CreationsState {
    /// Rows exactly as the last successful fetch delivered them.
    pub items: Vec<Option<Creation>>,
    /// True from the moment an attempt starts until its response settles.
    pub loading: bool,
    /// Identity the current `items` were fetched for.
    for_user: Option<String>,
    /// Generation of the most recent attempt. Only a matching generation
    /// may settle.
    fetch_seq: u64,
}

impl Default for CreationsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, for_user: None, fetch_seq: 0 }
    }
}

impl CreationsState {
    /// Whether a fetch should start for `user_id`.
    ///
    /// False once an attempt for the same identity has begun, so a repeat
    /// run of the fetch effect mid-visit is a no-op. [`CreationsState::reset`]
    /// clears the marker for the next visit.
    pub fn needs_fetch(&self, user_id: &str) -> bool {
        self.for_user.as_deref() != Some(user_id)
    }

    /// Return to the pre-fetch shape for a fresh visit.
    ///
    /// Drops the rows and the fetched-for identity, and advances the
    /// generation so an attempt still in flight from an earlier visit can
    /// no longer settle.
    pub fn reset(&mut self) {
        self.items.clear();
        self.loading = true;
        self.for_user = None;
        self.fetch_seq += 1;
    }

    /// Start a fetch attempt for `user_id` and return its generation.
    pub fn begin_fetch(&mut self, user_id: &str) -> u64 {
        self.fetch_seq += 1;
        self.for_user = Some(user_id.to_owned());
        self.loading = true;
        self.fetch_seq
    }

    /// Land the response of attempt `seq`.
    ///
    /// `outcome` is `Some(rows)` on success (the list is replaced wholesale)
    /// and `None` on failure (the list is kept). Returns false without
    /// touching anything when `seq` is not the current generation.
    pub fn settle(&mut self, seq: u64, outcome: Option<Vec<Option<Creation>>>) -> bool {
        if seq != self.fetch_seq {
            return false;
        }
        if let Some(items) = outcome {
            self.items = items;
        }
        self.loading = false;
        true
    }
}
