//! State transition history tracking.
//!
//! The machine records every change of state variant so a host can audit
//! how each purchase unfolded.

use super::state::{Trigger, VendingState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Default number of transitions kept by a [`TransitionLog`].
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Record of a single state transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: VendingState,
    /// The state being transitioned to
    pub to: VendingState,
    /// The operation that caused the move
    pub trigger: Trigger,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Bounded, ordered history of state transitions.
///
/// Once `limit` entries are held, recording a new one drops the oldest.
///
/// # Example
///
/// ```rust
/// use coinbox::core::{Session, StateTransition, Trigger, TransitionLog, VendingState};
/// use chrono::Utc;
///
/// let mut log = TransitionLog::with_limit(2);
/// let session = Session::open(1);
///
/// log.record(StateTransition {
///     from: VendingState::Idle,
///     to: VendingState::AwaitingPayment(session.clone()),
///     trigger: Trigger::SelectShelf,
///     timestamp: Utc::now(),
/// });
/// log.record(StateTransition {
///     from: VendingState::AwaitingPayment(session),
///     to: VendingState::Idle,
///     trigger: Trigger::Cancel,
///     timestamp: Utc::now(),
/// });
///
/// let names: Vec<_> = log.get_path().iter().map(|s| s.name()).collect();
/// assert_eq!(names, ["Idle", "AwaitingPayment", "Idle"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionLog {
    limit: usize,
    transitions: VecDeque<StateTransition>,
}

impl Default for TransitionLog {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl TransitionLog {
    /// Create an empty log keeping at most `limit` transitions.
    ///
    /// A limit of zero is raised to one.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            transitions: VecDeque::new(),
        }
    }

    /// Append a transition, evicting the oldest entry when full.
    pub fn record(&mut self, transition: StateTransition) {
        if self.transitions.len() == self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// States traversed: the first recorded `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&VendingState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and the last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
