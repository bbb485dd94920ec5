//! Account administration, sign-up, PIN login and PIN change.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{DomainError, ErrorCode, EventId, Timestamp, UserId};
use crate::domain::store::Document;
use crate::domain::user::{
    verify_pin, NewUserProfile, Pin, PinChanged, ProfileChanges, ProfileUpdated, Role, User,
    UserRegistered, DEFAULT_PIN,
};

/// Adds a coordinator or student account with the default PIN.
///
/// `created_by` is the admin, or `None` for self sign-up.
pub fn create_user(
    doc: &mut Document,
    role: Role,
    profile: NewUserProfile,
    created_by: Option<&UserId>,
    now: Timestamp,
) -> Result<UserRegistered, DomainError> {
    if role == Role::Admin {
        return Err(DomainError::new(
            ErrorCode::InvalidRole,
            "Admin accounts cannot be created",
        ));
    }
    if doc.email_taken(&profile.email, None) {
        return Err(email_taken(&profile.email));
    }

    let user = User::register(UserId::generate(), role, profile)?;
    let event = UserRegistered {
        event_id: EventId::new(),
        user_id: user.id.clone(),
        role,
        email: user.email.clone(),
        registered_by: created_by.cloned(),
        registered_at: now,
    };
    doc.pins.insert(user.id.to_string(), DEFAULT_PIN.to_string());
    doc.users.push(user);
    Ok(event)
}

/// Self-service student registration.
pub fn sign_up(
    doc: &mut Document,
    profile: NewUserProfile,
    now: Timestamp,
) -> Result<UserRegistered, DomainError> {
    create_user(doc, Role::Student, profile, None, now)
}

/// Applies profile changes. The role never changes.
pub fn update_profile(
    doc: &mut Document,
    user_id: &UserId,
    changes: ProfileChanges,
    updated_by: &UserId,
    now: Timestamp,
) -> Result<ProfileUpdated, DomainError> {
    if let Some(email) = &changes.email {
        if doc.email_taken(email, Some(user_id)) {
            return Err(email_taken(email));
        }
    }

    let mut updated = doc.require_user(user_id)?.clone();
    updated.apply_changes(changes)?;
    if let Some(user) = doc.user_mut(user_id) {
        *user = updated;
    }

    Ok(ProfileUpdated {
        event_id: EventId::new(),
        user_id: user_id.clone(),
        updated_by: updated_by.clone(),
        updated_at: now,
    })
}

/// Checks an email/PIN pair and returns the account.
pub fn authenticate<'a>(
    doc: &'a Document,
    email: &str,
    pin: &SecretString,
) -> Result<&'a User, DomainError> {
    let user = doc.user_by_email(email).ok_or_else(|| {
        DomainError::new(ErrorCode::UserNotFound, "No account uses this email")
            .with_detail("email", email.trim().to_string())
    })?;
    if !verify_pin(doc.pin_for(&user.id), pin) {
        return Err(DomainError::new(ErrorCode::InvalidPin, "Incorrect PIN")
            .with_detail("user_id", user.id.to_string()));
    }
    Ok(user)
}

/// Replaces a user's PIN after checking format, confirmation and the
/// current PIN, in that order.
pub fn change_pin(
    doc: &mut Document,
    user_id: &UserId,
    current: &SecretString,
    new_pin: &SecretString,
    confirm: &SecretString,
    now: Timestamp,
) -> Result<PinChanged, DomainError> {
    doc.require_user(user_id)?;
    let pin = Pin::from_secret(new_pin)?;
    if new_pin.expose_secret() != confirm.expose_secret() {
        return Err(DomainError::new(ErrorCode::PinMismatch, "PINs do not match"));
    }
    if !verify_pin(doc.pin_for(user_id), current) {
        return Err(DomainError::new(ErrorCode::InvalidPin, "Current PIN is incorrect"));
    }

    doc.pins.insert(user_id.to_string(), pin.as_str().to_string());
    Ok(PinChanged {
        event_id: EventId::new(),
        user_id: user_id.clone(),
        changed_at: now,
    })
}

fn email_taken(email: &str) -> DomainError {
    DomainError::new(ErrorCode::EmailTaken, "Email already exists")
        .with_detail("email", email.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorKind;
    use crate::domain::store::bootstrap_document;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string())
    }

    fn profile(name: &str, email: &str) -> NewUserProfile {
        NewUserProfile {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    #[test]
    fn create_user_sets_default_pin() {
        let mut doc = bootstrap_document();
        let event = create_user(
            &mut doc,
            Role::Coordinator,
            profile("Sara Arts", "sara@college.edu"),
            Some(&uid("1")),
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(doc.pin_for(&event.user_id), Some(DEFAULT_PIN));
        assert_eq!(event.registered_by, Some(uid("1")));
        assert!(doc.require_user(&event.user_id).unwrap().is_coordinator());
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        let mut doc = bootstrap_document();
        let err = sign_up(&mut doc, profile("Mike Two", "MIKE@college.edu"), Timestamp::now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailTaken);
        assert_eq!(doc.users.len(), 3);
    }

    #[test]
    fn admins_cannot_be_created() {
        let mut doc = bootstrap_document();
        let err = create_user(&mut doc, Role::Admin, profile("Root", "root@college.edu"), None, Timestamp::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRole);
    }

    #[test]
    fn sign_up_creates_student() {
        let mut doc = bootstrap_document();
        let event = sign_up(&mut doc, profile("Ann", "ann@college.edu"), Timestamp::now()).unwrap();
        assert_eq!(event.role, Role::Student);
        assert!(event.registered_by.is_none());
    }

    #[test]
    fn update_profile_rechecks_email() {
        let mut doc = bootstrap_document();
        let err = update_profile(
            &mut doc,
            &uid("3"),
            ProfileChanges {
                email: Some("john@college.edu".to_string()),
                ..Default::default()
            },
            &uid("3"),
            Timestamp::now(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmailTaken);

        update_profile(
            &mut doc,
            &uid("3"),
            ProfileChanges {
                email: Some("mike@college.edu".to_string()),
                phone: Some("555".to_string()),
                ..Default::default()
            },
            &uid("3"),
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(doc.user(&uid("3")).unwrap().phone.as_deref(), Some("555"));
    }

    #[test]
    fn invalid_profile_change_leaves_user_untouched() {
        let mut doc = bootstrap_document();
        let before = doc.user(&uid("3")).unwrap().clone();
        let err = update_profile(
            &mut doc,
            &uid("3"),
            ProfileChanges {
                department: Some("Maths".to_string()),
                name: Some("  ".to_string()),
                ..Default::default()
            },
            &uid("3"),
            Timestamp::now(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(doc.user(&uid("3")).unwrap(), &before);
    }

    #[test]
    fn authenticate_checks_email_and_pin() {
        let doc = bootstrap_document();
        assert_eq!(
            authenticate(&doc, "mike@college.edu", &secret("0000")).unwrap().id,
            uid("3")
        );
        assert_eq!(
            authenticate(&doc, "ghost@college.edu", &secret("0000")).unwrap_err().code,
            ErrorCode::UserNotFound
        );
        assert_eq!(
            authenticate(&doc, "mike@college.edu", &secret("1234")).unwrap_err().code,
            ErrorCode::InvalidPin
        );
    }

    #[test]
    fn authenticate_falls_back_to_default_pin() {
        let mut doc = bootstrap_document();
        doc.pins.clear();
        assert!(authenticate(&doc, "john@college.edu", &secret("0000")).is_ok());
    }

    #[test]
    fn change_pin_validates_in_order() {
        let mut doc = bootstrap_document();
        let mike = uid("3");

        let err = change_pin(&mut doc, &mike, &secret("0000"), &secret("12a4"), &secret("12a4"), Timestamp::now())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = change_pin(&mut doc, &mike, &secret("0000"), &secret("1234"), &secret("4321"), Timestamp::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PinMismatch);

        let err = change_pin(&mut doc, &mike, &secret("9999"), &secret("1234"), &secret("1234"), Timestamp::now())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPin);

        change_pin(&mut doc, &mike, &secret("0000"), &secret("1234"), &secret("1234"), Timestamp::now()).unwrap();
        assert_eq!(doc.pin_for(&mike), Some("1234"));
        assert!(authenticate(&doc, "mike@college.edu", &secret("1234")).is_ok());
    }
}
