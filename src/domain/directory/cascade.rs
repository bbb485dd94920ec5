//! Deletes that remove everything hanging off a user or a club.
//!
//! All cascades live here so the rest of the domain can assume referenced
//! users and clubs exist.

use crate::domain::club::ClubDeleted;
use crate::domain::foundation::{ClubId, DomainError, EventId, Timestamp, UserId};
use crate::domain::store::Document;
use crate::domain::user::UserDeleted;

/// Removes a club with its memberships, join requests, events and custom roles.
pub fn delete_club(
    doc: &mut Document,
    club_id: &ClubId,
    deleted_by: &UserId,
    now: Timestamp,
) -> Result<ClubDeleted, DomainError> {
    doc.require_club(club_id)?;

    doc.clubs.retain(|c| &c.id != club_id);

    let memberships = doc.club_memberships.len();
    doc.club_memberships.retain(|m| &m.club_id != club_id);
    let removed_memberships = memberships - doc.club_memberships.len();

    let events = doc.events.len();
    doc.events.retain(|e| &e.club_id != club_id);
    let removed_events = events - doc.events.len();

    doc.join_requests.retain(|r| &r.club_id != club_id);
    doc.custom_roles.retain(|r| &r.club_id != club_id);

    Ok(ClubDeleted {
        event_id: EventId::new(),
        club_id: club_id.clone(),
        deleted_by: deleted_by.clone(),
        removed_memberships,
        removed_events,
        deleted_at: now,
    })
}

/// Removes a user with their memberships, join requests, registrations and
/// PIN. Clubs they coordinate are deleted through `delete_club`.
pub fn delete_user(
    doc: &mut Document,
    user_id: &UserId,
    deleted_by: &UserId,
    now: Timestamp,
) -> Result<(UserDeleted, Vec<ClubDeleted>), DomainError> {
    doc.require_user(user_id)?;
    if user_id == deleted_by {
        return Err(DomainError::forbidden("You cannot delete your own account"));
    }

    let owned: Vec<ClubId> = doc
        .clubs
        .iter()
        .filter(|c| c.is_coordinated_by(user_id))
        .map(|c| c.id.clone())
        .collect();
    let mut club_events = Vec::with_capacity(owned.len());
    for club_id in &owned {
        club_events.push(delete_club(doc, club_id, deleted_by, now)?);
    }

    doc.club_memberships.retain(|m| &m.user_id != user_id);
    doc.join_requests.retain(|r| &r.user_id != user_id);
    for event in &mut doc.events {
        event.registered_users.retain(|u| u != user_id);
    }
    doc.pins.remove(user_id.as_str());
    doc.users.retain(|u| &u.id != user_id);

    let deleted = UserDeleted {
        event_id: EventId::new(),
        user_id: user_id.clone(),
        deleted_by: deleted_by.clone(),
        removed_clubs: owned,
        deleted_at: now,
    };
    Ok((deleted, club_events))
}
