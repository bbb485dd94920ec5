//! Coordinator-defined roles.

use crate::domain::club::{CustomRole, CustomRoleCreated, CustomRoleDeleted};
use crate::domain::foundation::{
    ClubId, CustomRoleId, DomainError, ErrorCode, EventId, Timestamp, UserId,
};
use crate::domain::store::Document;

/// Adds a role to a club. Names are unique per club, ignoring case.
pub fn create_custom_role(
    doc: &mut Document,
    club_id: &ClubId,
    name: &str,
    description: &str,
    created_by: &UserId,
    now: Timestamp,
) -> Result<CustomRoleCreated, DomainError> {
    doc.require_club(club_id)?;
    let role = CustomRole::define(CustomRoleId::generate(), club_id.clone(), name, description, now)?;
    if doc.custom_roles_of_club(club_id).any(|r| r.has_name(&role.name)) {
        return Err(DomainError::new(
            ErrorCode::CustomRoleExists,
            format!("A role named '{}' already exists in this club", role.name),
        )
        .with_detail("club_id", club_id.to_string()));
    }

    let event = CustomRoleCreated {
        event_id: EventId::new(),
        club_id: club_id.clone(),
        role_id: role.id.clone(),
        name: role.name.clone(),
        created_by: created_by.clone(),
        created_at: now,
    };
    doc.custom_roles.push(role);
    Ok(event)
}

/// Removes a role nobody currently holds.
pub fn delete_custom_role(
    doc: &mut Document,
    role_id: &CustomRoleId,
    deleted_by: &UserId,
    now: Timestamp,
) -> Result<CustomRoleDeleted, DomainError> {
    let club_id = doc.require_custom_role(role_id)?.club_id.clone();
    let holders = doc
        .club_memberships
        .iter()
        .filter(|m| m.role.custom_id() == Some(role_id))
        .count();
    if holders > 0 {
        return Err(DomainError::new(
            ErrorCode::CustomRoleInUse,
            format!("Role is held by {} member(s)", holders),
        )
        .with_detail("role_id", role_id.to_string()));
    }

    doc.custom_roles.retain(|r| &r.id != role_id);
    Ok(CustomRoleDeleted {
        event_id: EventId::new(),
        club_id,
        role_id: role_id.clone(),
        deleted_by: deleted_by.clone(),
        deleted_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::club::MemberRole;
    use crate::domain::store::bootstrap_document;

    fn club() -> ClubId {
        ClubId::new("1").unwrap()
    }

    fn coordinator() -> UserId {
        UserId::new("2").unwrap()
    }

    #[test]
    fn create_adds_role_to_club() {
        let mut doc = bootstrap_document();
        let event = create_custom_role(&mut doc, &club(), "Event Manager", "Plans events", &coordinator(), Timestamp::now())
            .unwrap();
        assert_eq!(doc.custom_roles_of_club(&club()).count(), 2);
        assert!(doc.custom_role(&event.role_id).is_some());
    }

    #[test]
    fn duplicate_names_conflict_case_insensitively() {
        let mut doc = bootstrap_document();
        let err = create_custom_role(&mut doc, &club(), "tech lead", "", &coordinator(), Timestamp::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomRoleExists);
    }

    #[test]
    fn builtin_names_are_rejected() {
        let mut doc = bootstrap_document();
        let err = create_custom_role(&mut doc, &club(), "Treasurer", "", &coordinator(), Timestamp::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn delete_refused_while_held() {
        let mut doc = bootstrap_document();
        let role_id = CustomRoleId::new("1").unwrap();
        doc.club_memberships[0].role = MemberRole::Custom(role_id.clone());

        let err = delete_custom_role(&mut doc, &role_id, &coordinator(), Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomRoleInUse);
        assert!(doc.custom_role(&role_id).is_some());
    }

    #[test]
    fn delete_unused_role() {
        let mut doc = bootstrap_document();
        let role_id = CustomRoleId::new("1").unwrap();
        let event = delete_custom_role(&mut doc, &role_id, &coordinator(), Timestamp::now()).unwrap();
        assert_eq!(event.club_id, club());
        assert!(doc.custom_role(&role_id).is_none());
    }
}
