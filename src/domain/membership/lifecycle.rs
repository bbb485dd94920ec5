//! Membership lifecycle engine.
//!
//! Per (user, club): no relation, then a pending request, then membership.
//! A rejected request is history only and never blocks a new one. Every
//! function works on a caller-owned working copy and returns the event to
//! publish once that copy has been saved.

use crate::domain::club::{ClubMembership, MemberRole};
use crate::domain::foundation::{
    ClubId, DomainError, ErrorCode, EventId, JoinRequestId, Timestamp, UserId,
};
use crate::domain::store::Document;

use super::{
    JoinRequest, JoinRequestApproved, JoinRequestRejected, JoinRequested, MemberRemoved,
    MemberRoleChanged,
};

/// A coordinator's answer to a join request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinDecision {
    /// Approve with the given role, or `member` when `None`.
    Approve { role: Option<MemberRole> },
    Reject,
}

/// Event produced by `respond_to_request`.
#[derive(Debug, Clone)]
pub enum JoinResponse {
    Approved(JoinRequestApproved),
    Rejected(JoinRequestRejected),
}

/// Records a pending request for `user_id` to join `club_id`.
pub fn request_join(
    doc: &mut Document,
    user_id: &UserId,
    club_id: &ClubId,
    message: Option<String>,
    now: Timestamp,
) -> Result<JoinRequested, DomainError> {
    doc.require_club(club_id)?;
    let user = doc.require_user(user_id)?;
    if !user.is_student() {
        return Err(DomainError::forbidden("Only students can request to join a club")
            .with_detail("user_id", user_id.to_string()));
    }
    if doc.pending_request(user_id, club_id).is_some() {
        return Err(DomainError::new(
            ErrorCode::DuplicatePendingRequest,
            "A request to join this club is already pending",
        )
        .with_detail("club_id", club_id.to_string()));
    }
    if doc.is_member(user_id, club_id) {
        return Err(DomainError::new(
            ErrorCode::AlreadyMember,
            "Already a member of this club",
        )
        .with_detail("club_id", club_id.to_string()));
    }

    let request = JoinRequest::submit(
        JoinRequestId::generate(),
        user_id.clone(),
        club_id.clone(),
        message,
        now,
    );
    let event = JoinRequested {
        event_id: EventId::new(),
        request_id: request.id.clone(),
        user_id: user_id.clone(),
        club_id: club_id.clone(),
        requested_at: now,
    };
    doc.join_requests.push(request);
    Ok(event)
}

/// Approves or rejects a pending request. Approval creates exactly one
/// membership; rejection creates none.
pub fn respond_to_request(
    doc: &mut Document,
    request_id: &JoinRequestId,
    decision: JoinDecision,
    response_message: Option<String>,
    responder: &UserId,
    now: Timestamp,
) -> Result<JoinResponse, DomainError> {
    let request = doc.require_join_request(request_id)?;
    if !request.is_pending() {
        return Err(DomainError::new(
            ErrorCode::RequestAlreadyResolved,
            "This request has already been answered",
        )
        .with_detail("request_id", request_id.to_string()));
    }
    let user_id = request.user_id.clone();
    let club_id = request.club_id.clone();

    match decision {
        JoinDecision::Approve { role } => {
            let role = role.unwrap_or_default();
            ensure_role_valid(doc, &role, &club_id)?;
            if doc.is_member(&user_id, &club_id) {
                return Err(DomainError::new(
                    ErrorCode::MembershipExists,
                    "User is already a member of this club",
                )
                .with_detail("user_id", user_id.to_string())
                .with_detail("club_id", club_id.to_string()));
            }

            resolve(doc, request_id)?.approve(role.clone(), response_message, now)?;
            doc.club_memberships.push(ClubMembership::new(
                user_id.clone(),
                club_id.clone(),
                role.clone(),
                now,
            ));

            Ok(JoinResponse::Approved(JoinRequestApproved {
                event_id: EventId::new(),
                request_id: request_id.clone(),
                user_id,
                club_id,
                assigned_role: role,
                responded_by: responder.clone(),
                approved_at: now,
            }))
        }
        JoinDecision::Reject => {
            resolve(doc, request_id)?.reject(response_message, now)?;

            Ok(JoinResponse::Rejected(JoinRequestRejected {
                event_id: EventId::new(),
                request_id: request_id.clone(),
                user_id,
                club_id,
                responded_by: responder.clone(),
                rejected_at: now,
            }))
        }
    }
}

/// Replaces a member's role in place.
pub fn change_role(
    doc: &mut Document,
    user_id: &UserId,
    club_id: &ClubId,
    new_role: MemberRole,
    changed_by: &UserId,
    now: Timestamp,
) -> Result<MemberRoleChanged, DomainError> {
    ensure_role_valid(doc, &new_role, club_id)?;
    let membership = doc
        .membership_mut(user_id, club_id)
        .ok_or_else(|| membership_not_found(user_id, club_id))?;
    let old_role = std::mem::replace(&mut membership.role, new_role.clone());

    Ok(MemberRoleChanged {
        event_id: EventId::new(),
        user_id: user_id.clone(),
        club_id: club_id.clone(),
        old_role,
        new_role,
        changed_by: changed_by.clone(),
        changed_at: now,
    })
}

/// Deletes a membership. Join request history is left alone.
pub fn remove_membership(
    doc: &mut Document,
    user_id: &UserId,
    club_id: &ClubId,
    removed_by: &UserId,
    now: Timestamp,
) -> Result<MemberRemoved, DomainError> {
    let before = doc.club_memberships.len();
    doc.club_memberships.retain(|m| !m.is_for(user_id, club_id));
    if doc.club_memberships.len() == before {
        return Err(membership_not_found(user_id, club_id));
    }

    Ok(MemberRemoved {
        event_id: EventId::new(),
        user_id: user_id.clone(),
        club_id: club_id.clone(),
        removed_by: removed_by.clone(),
        removed_at: now,
    })
}

fn resolve<'a>(
    doc: &'a mut Document,
    request_id: &JoinRequestId,
) -> Result<&'a mut JoinRequest, DomainError> {
    doc.join_request_mut(request_id).ok_or_else(|| {
        DomainError::not_found(ErrorCode::JoinRequestNotFound, "Join request", request_id)
    })
}

fn ensure_role_valid(doc: &Document, role: &MemberRole, club_id: &ClubId) -> Result<(), DomainError> {
    if doc.role_is_valid_for_club(role, club_id) {
        Ok(())
    } else {
        Err(DomainError::new(
            ErrorCode::InvalidRole,
            format!("Role '{}' is not available in this club", role),
        )
        .with_detail("club_id", club_id.to_string()))
    }
}

fn membership_not_found(user_id: &UserId, club_id: &ClubId) -> DomainError {
    DomainError::new(
        ErrorCode::MembershipNotFound,
        format!("User {} is not a member of club {}", user_id, club_id),
    )
    .with_detail("user_id", user_id.to_string())
    .with_detail("club_id", club_id.to_string())
}
