//! Membership command handlers.

mod change_member_role;
mod create_custom_role;
mod delete_custom_role;
mod remove_member;
mod request_join;
mod respond_to_join_request;

pub use change_member_role::{
    ChangeMemberRoleCommand, ChangeMemberRoleHandler, ChangeMemberRoleResult,
};
pub use create_custom_role::{
    CreateCustomRoleCommand, CreateCustomRoleHandler, CreateCustomRoleResult,
};
pub use delete_custom_role::{DeleteCustomRoleCommand, DeleteCustomRoleHandler};
pub use remove_member::{RemoveMemberCommand, RemoveMemberHandler};
pub use request_join::{RequestJoinCommand, RequestJoinHandler, RequestJoinResult};
pub use respond_to_join_request::{
    RespondToJoinRequestCommand, RespondToJoinRequestHandler, RespondToJoinRequestResult,
};
