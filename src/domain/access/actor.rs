//! Who is performing an operation.

use std::fmt;

use crate::domain::foundation::UserId;
use crate::domain::store::Document;
use crate::domain::user::Role;

/// The caller of an operation, as seen by the access policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    Authenticated { id: UserId, role: Role },
}

impl Actor {
    /// Looks the user up in the document. Unknown ids are anonymous.
    pub fn resolve(document: &Document, user_id: Option<&UserId>) -> Self {
        user_id
            .and_then(|id| document.user(id))
            .map(|u| Actor::Authenticated {
                id: u.id.clone(),
                role: u.role,
            })
            .unwrap_or(Actor::Anonymous)
    }

    pub fn id(&self) -> Option<&UserId> {
        match self {
            Actor::Anonymous => None,
            Actor::Authenticated { id, .. } => Some(id),
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Anonymous => f.write_str("anonymous"),
            Actor::Authenticated { id, .. } => write!(f, "{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::bootstrap_document;

    #[test]
    fn resolve_known_user() {
        let doc = bootstrap_document();
        let actor = Actor::resolve(&doc, Some(&UserId::new("2").unwrap()));
        assert_eq!(
            actor,
            Actor::Authenticated {
                id: UserId::new("2").unwrap(),
                role: Role::Coordinator,
            }
        );
        assert_eq!(actor.to_string(), "2");
    }

    #[test]
    fn unknown_or_missing_user_is_anonymous() {
        let doc = bootstrap_document();
        assert_eq!(Actor::resolve(&doc, Some(&UserId::new("99").unwrap())), Actor::Anonymous);
        assert_eq!(Actor::resolve(&doc, None), Actor::Anonymous);
        assert_eq!(Actor::Anonymous.to_string(), "anonymous");
    }
}
