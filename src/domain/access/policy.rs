//! Role-based access policy.
//!
//! `authorize` is a pure function of the actor, the operation, and the facts
//! about the target the caller has already looked up. Handlers call it
//! before touching the working copy.

use crate::domain::club::Club;
use crate::domain::foundation::{AuthorizationResult, ClubId, UserId};
use crate::domain::store::Document;
use crate::domain::user::Role;

use super::Actor;

/// Everything a caller can ask the system to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Open to everyone
    ListLoginProfiles,
    Login,
    SignUp,

    // Any signed-in user
    ViewPublic,
    UpdateProfile,
    ChangePin,

    // Admin
    CreateUser,
    DeleteUser,
    CreateClub,
    DeleteClub,
    ExportDataset,
    ViewAdminOverview,

    // Owning coordinator
    EditClubImage,
    RespondToJoinRequest,
    DecideEvent,
    ChangeMemberRole,
    RemoveMember,
    ManageCustomRoles,
    ViewCoordinatorDashboard,

    // Student
    RequestJoin,
    ProposeEvent,
    RegisterForEvent,
    ViewStudentDashboard,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        use Operation::*;
        match self {
            ListLoginProfiles => "list_login_profiles",
            Login => "login",
            SignUp => "sign_up",
            ViewPublic => "view_public",
            UpdateProfile => "update_profile",
            ChangePin => "change_pin",
            CreateUser => "create_user",
            DeleteUser => "delete_user",
            CreateClub => "create_club",
            DeleteClub => "delete_club",
            ExportDataset => "export_dataset",
            ViewAdminOverview => "view_admin_overview",
            EditClubImage => "edit_club_image",
            RespondToJoinRequest => "respond_to_join_request",
            DecideEvent => "decide_event",
            ChangeMemberRole => "change_member_role",
            RemoveMember => "remove_member",
            ManageCustomRoles => "manage_custom_roles",
            ViewCoordinatorDashboard => "view_coordinator_dashboard",
            RequestJoin => "request_join",
            ProposeEvent => "propose_event",
            RegisterForEvent => "register_for_event",
            ViewStudentDashboard => "view_student_dashboard",
        }
    }

    fn is_public(&self) -> bool {
        matches!(
            self,
            Operation::ListLoginProfiles | Operation::Login | Operation::SignUp
        )
    }
}

/// Facts about a club relevant to the actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubFacts {
    pub club_id: ClubId,
    pub coordinator_id: UserId,
    pub actor_is_member: bool,
}

impl ClubFacts {
    pub fn of(document: &Document, club: &Club, actor: &Actor) -> Self {
        let actor_is_member = actor
            .id()
            .map(|id| document.is_member(id, &club.id))
            .unwrap_or(false);
        Self {
            club_id: club.id.clone(),
            coordinator_id: club.coordinator_id.clone(),
            actor_is_member,
        }
    }
}

/// What an operation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// The dataset as a whole.
    Dataset,
    /// A user account.
    Account(UserId),
    /// A club (and anything scoped to it).
    Club(ClubFacts),
}

impl Resource {
    fn describe(&self) -> String {
        match self {
            Resource::Dataset => "dataset".to_string(),
            Resource::Account(id) => format!("user:{}", id),
            Resource::Club(facts) => format!("club:{}", facts.club_id),
        }
    }
}

/// Decides whether `actor` may perform `operation` on `resource`.
pub fn authorize(actor: &Actor, operation: Operation, resource: &Resource) -> AuthorizationResult {
    let op = operation.as_str();
    let target = resource.describe();
    let who = actor.to_string();
    let allow = || AuthorizationResult::granted(op, target.clone(), who.clone());
    let deny = |reason: &str| AuthorizationResult::denied(op, target.clone(), who.clone(), reason);

    if operation.is_public() {
        return allow();
    }

    let (actor_id, role) = match actor {
        Actor::Anonymous => return deny("Sign in to continue").unauthenticated(),
        Actor::Authenticated { id, role } => (id, *role),
    };

    use Operation::*;
    match operation {
        ListLoginProfiles | Login | SignUp | ViewPublic => allow(),

        UpdateProfile => match resource {
            Resource::Account(target) if target == actor_id || role == Role::Admin => allow(),
            Resource::Account(_) => deny("You can only edit your own profile"),
            _ => deny("Operation does not apply to this resource"),
        },

        ChangePin => match resource {
            Resource::Account(target) if target == actor_id => allow(),
            Resource::Account(_) => deny("You can only change your own PIN"),
            _ => deny("Operation does not apply to this resource"),
        },

        CreateUser | DeleteUser | CreateClub | DeleteClub | ExportDataset | ViewAdminOverview => {
            if role == Role::Admin {
                allow()
            } else {
                deny("Only administrators can do this")
            }
        }

        ViewCoordinatorDashboard => {
            if role == Role::Coordinator {
                allow()
            } else {
                deny("Only coordinators can do this")
            }
        }

        EditClubImage | RespondToJoinRequest | DecideEvent | ChangeMemberRole | RemoveMember
        | ManageCustomRoles => match resource {
            Resource::Club(facts) if role == Role::Coordinator && &facts.coordinator_id == actor_id => {
                allow()
            }
            Resource::Club(_) => deny("Only the club's coordinator can do this"),
            _ => deny("Operation does not apply to this resource"),
        },

        RequestJoin => match (role, resource) {
            (Role::Student, Resource::Club(_)) => allow(),
            (_, Resource::Club(_)) => deny("Only students can join clubs"),
            _ => deny("Operation does not apply to this resource"),
        },

        ProposeEvent => match resource {
            Resource::Club(facts) if role != Role::Admin && facts.actor_is_member => allow(),
            Resource::Club(_) => deny("Only club members can propose events"),
            _ => deny("Operation does not apply to this resource"),
        },

        RegisterForEvent | ViewStudentDashboard => {
            if role == Role::Student {
                allow()
            } else {
                deny("Only students can do this")
            }
        }
    }
}
