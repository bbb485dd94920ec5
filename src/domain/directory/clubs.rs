//! Club administration.

use crate::domain::club::{Club, ClubCreated, ClubImageUpdated, NewClub};
use crate::domain::foundation::{ClubId, DomainError, ErrorCode, EventId, Timestamp, UserId};
use crate::domain::store::Document;

/// Creates a club run by `coordinator_id`. A coordinator runs at most one club.
pub fn create_club(
    doc: &mut Document,
    input: NewClub,
    coordinator_id: &UserId,
    created_by: &UserId,
    now: Timestamp,
) -> Result<ClubCreated, DomainError> {
    let coordinator = doc.require_user(coordinator_id)?;
    if !coordinator.is_coordinator() {
        return Err(DomainError::new(
            ErrorCode::InvalidRole,
            format!("{} is not a coordinator", coordinator.name),
        )
        .with_detail("user_id", coordinator_id.to_string()));
    }
    if let Some(existing) = doc.club_of_coordinator(coordinator_id) {
        return Err(DomainError::new(
            ErrorCode::CoordinatorAlreadyAssigned,
            format!("Coordinator already runs {}", existing.name),
        )
        .with_detail("club_id", existing.id.to_string()));
    }

    let club = Club::create(
        ClubId::generate(),
        input,
        coordinator_id.clone(),
        created_by.clone(),
        now,
    )?;
    let event = ClubCreated {
        event_id: EventId::new(),
        club_id: club.id.clone(),
        name: club.name.clone(),
        coordinator_id: coordinator_id.clone(),
        created_by: created_by.clone(),
        created_at: now,
    };
    doc.clubs.push(club);
    Ok(event)
}

pub fn update_club_image(
    doc: &mut Document,
    club_id: &ClubId,
    image: &str,
    updated_by: &UserId,
    now: Timestamp,
) -> Result<ClubImageUpdated, DomainError> {
    let club = doc
        .club_mut(club_id)
        .ok_or_else(|| DomainError::not_found(ErrorCode::ClubNotFound, "Club", club_id))?;
    club.set_image(image)?;

    Ok(ClubImageUpdated {
        event_id: EventId::new(),
        club_id: club_id.clone(),
        updated_by: updated_by.clone(),
        image: club.image.clone(),
        updated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::create_user;
    use crate::domain::store::bootstrap_document;
    use crate::domain::user::{NewUserProfile, Role};

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn arts() -> NewClub {
        NewClub {
            name: "Arts Society".to_string(),
            description: "Paint and draw".to_string(),
            category: "Arts".to_string(),
            image: None,
        }
    }

    #[test]
    fn coordinator_can_run_only_one_club() {
        let mut doc = bootstrap_document();
        let err = create_club(&mut doc, arts(), &uid("2"), &uid("1"), Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CoordinatorAlreadyAssigned);
        assert_eq!(doc.clubs.len(), 1);
    }

    #[test]
    fn club_needs_a_coordinator_account() {
        let mut doc = bootstrap_document();
        let err = create_club(&mut doc, arts(), &uid("3"), &uid("1"), Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRole);
    }

    #[test]
    fn create_club_for_new_coordinator() {
        let mut doc = bootstrap_document();
        let coordinator = create_user(
            &mut doc,
            Role::Coordinator,
            NewUserProfile {
                name: "Sara Arts".to_string(),
                email: "sara@college.edu".to_string(),
                ..Default::default()
            },
            Some(&uid("1")),
            Timestamp::now(),
        )
        .unwrap()
        .user_id;

        let event = create_club(&mut doc, arts(), &coordinator, &uid("1"), Timestamp::now()).unwrap();
        let club = doc.club(&event.club_id).unwrap();
        assert_eq!(club.coordinator_id, coordinator);
        assert_eq!(club.created_by, uid("1"));
    }

    #[test]
    fn update_image_replaces_url() {
        let mut doc = bootstrap_document();
        let club_id = ClubId::new("1").unwrap();
        update_club_image(&mut doc, &club_id, "https://example.org/new.png", &uid("2"), Timestamp::now())
            .unwrap();
        assert_eq!(doc.club(&club_id).unwrap().image, "https://example.org/new.png");

        let err = update_club_image(&mut doc, &club_id, "", &uid("2"), Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }
}
