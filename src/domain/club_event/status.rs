//! Event proposal status state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle of a club event.
///
/// Events start as `Proposed`; a coordinator moves them to `Approved` or
/// `Rejected`, both terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Proposed,
    Approved,
    Rejected,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Proposed => "proposed",
            EventStatus::Approved => "approved",
            EventStatus::Rejected => "rejected",
        }
    }

    /// Students may register only for approved events.
    pub fn is_open(&self) -> bool {
        matches!(self, EventStatus::Approved)
    }
}

impl StateMachine for EventStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use EventStatus::*;
        matches!((self, target), (Proposed, Approved) | (Proposed, Rejected))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use EventStatus::*;
        match self {
            Proposed => vec![Approved, Rejected],
            Approved | Rejected => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proposed_can_be_approved_or_rejected() {
        assert_eq!(
            EventStatus::Proposed.transition_to(EventStatus::Approved),
            Ok(EventStatus::Approved)
        );
        assert_eq!(
            EventStatus::Proposed.transition_to(EventStatus::Rejected),
            Ok(EventStatus::Rejected)
        );
    }

    #[test]
    fn decided_statuses_are_terminal() {
        assert!(EventStatus::Approved.is_terminal());
        assert!(EventStatus::Rejected.is_terminal());
        assert!(EventStatus::Approved.transition_to(EventStatus::Rejected).is_err());
        assert!(EventStatus::Rejected.transition_to(EventStatus::Approved).is_err());
    }

    #[test]
    fn only_approved_is_open() {
        assert!(EventStatus::Approved.is_open());
        assert!(!EventStatus::Proposed.is_open());
        assert!(!EventStatus::Rejected.is_open());
    }
}
