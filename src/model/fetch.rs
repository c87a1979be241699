// SPDX-License-Identifier: MPL-2.0
//! Tri-state slot for one-shot asynchronous fetch results.
//!
//! The platform collaborators deliver each result exactly once, and a
//! failed delivery is otherwise indistinguishable from one that has not
//! happened yet. The slot keeps those states apart so the UI can show a
//! loading indicator for [`FetchState::Pending`] and a placeholder for
//! [`FetchState::Unavailable`].

/// State of a one-shot asynchronous fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState<T> {
    /// No completion has landed yet.
    #[default]
    Pending,
    /// The fetch completed without a result.
    Unavailable,
    /// The fetch completed with a result.
    Ready(T),
}

impl<T> FetchState<T> {
    /// Returns `true` while no completion has landed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    /// Returns `true` once the fetch resolved empty.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FetchState::Unavailable)
    }

    /// Returns `true` once a result is available.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    /// Collapses the slot to the result, losing the pending/unavailable
    /// distinction.
    #[must_use]
    pub fn as_option(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            FetchState::Pending | FetchState::Unavailable => None,
        }
    }

    /// Consuming variant of [`FetchState::as_option`].
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            FetchState::Ready(value) => Some(value),
            FetchState::Pending | FetchState::Unavailable => None,
        }
    }
}
