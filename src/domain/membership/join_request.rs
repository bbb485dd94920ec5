//! Join request aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::club::MemberRole;
use crate::domain::foundation::{
    ClubId, JoinRequestId, StateMachine, Timestamp, UserId, ValidationError,
};

use super::JoinRequestStatus;

/// A student's request to join a club. Kept after resolution as history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: JoinRequestId,
    pub user_id: UserId,
    pub club_id: ClubId,
    pub status: JoinRequestStatus,
    pub requested_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responded_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_role: Option<MemberRole>,
}

impl JoinRequest {
    pub fn submit(
        id: JoinRequestId,
        user_id: UserId,
        club_id: ClubId,
        message: Option<String>,
        requested_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            club_id,
            status: JoinRequestStatus::Pending,
            requested_at,
            message: clean(message),
            response_message: None,
            responded_at: None,
            assigned_role: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == JoinRequestStatus::Pending
    }

    pub fn is_for(&self, user_id: &UserId, club_id: &ClubId) -> bool {
        &self.user_id == user_id && &self.club_id == club_id
    }

    pub fn approve(
        &mut self,
        role: MemberRole,
        response_message: Option<String>,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(JoinRequestStatus::Approved)?;
        self.assigned_role = Some(role);
        self.response_message = clean(response_message);
        self.responded_at = Some(now);
        Ok(())
    }

    pub fn reject(
        &mut self,
        response_message: Option<String>,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(JoinRequestStatus::Rejected)?;
        self.response_message = clean(response_message);
        self.responded_at = Some(now);
        Ok(())
    }
}

fn clean(message: Option<String>) -> Option<String> {
    message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::BaseRole;

    fn request() -> JoinRequest {
        JoinRequest::submit(
            JoinRequestId::new("r1").unwrap(),
            UserId::new("3").unwrap(),
            ClubId::new("1").unwrap(),
            Some("  I love robots ".to_string()),
            Timestamp::now(),
        )
    }

    #[test]
    fn submit_is_pending_with_trimmed_message() {
        let r = request();
        assert!(r.is_pending());
        assert_eq!(r.message.as_deref(), Some("I love robots"));
        assert!(r.responded_at.is_none());
    }

    #[test]
    fn approve_records_role_and_response() {
        let mut r = request();
        r.approve(BaseRole::Treasurer.into(), Some("Welcome".to_string()), Timestamp::now())
            .unwrap();
        assert_eq!(r.status, JoinRequestStatus::Approved);
        assert_eq!(r.assigned_role, Some(MemberRole::Base(BaseRole::Treasurer)));
        assert_eq!(r.response_message.as_deref(), Some("Welcome"));
        assert!(r.responded_at.is_some());
    }

    #[test]
    fn reject_has_no_role() {
        let mut r = request();
        r.reject(Some("Full".to_string()), Timestamp::now()).unwrap();
        assert_eq!(r.status, JoinRequestStatus::Rejected);
        assert!(r.assigned_role.is_none());
    }

    #[test]
    fn cannot_respond_twice() {
        let mut r = request();
        r.reject(None, Timestamp::now()).unwrap();
        assert!(r.approve(MemberRole::member(), None, Timestamp::now()).is_err());
        assert_eq!(r.status, JoinRequestStatus::Rejected);
    }

    #[test]
    fn serializes_assigned_role_as_string() {
        let mut r = request();
        r.approve(MemberRole::member(), None, Timestamp::now()).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["assignedRole"], "member");
        assert_eq!(json["status"], "approved");
        assert!(json.get("responseMessage").is_none());
    }
}
