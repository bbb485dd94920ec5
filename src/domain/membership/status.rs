//! Join request status state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Status of a request to join a club.
///
/// `Pending` is the only non-terminal state. A rejected request stays on
/// record but does not block a new request for the same club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl StateMachine for JoinRequestStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use JoinRequestStatus::*;
        matches!((self, target), (Pending, Approved) | (Pending, Rejected))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use JoinRequestStatus::*;
        match self {
            Pending => vec![Approved, Rejected],
            Approved | Rejected => vec![],
        }
    }
}
