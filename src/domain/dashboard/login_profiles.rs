//! Profiles shown on the sign-in screen.

use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::store::Document;
use crate::domain::user::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: Option<String>,
}

/// Every account, in document order.
pub fn login_profiles(doc: &Document) -> Vec<LoginProfile> {
    doc.users
        .iter()
        .map(|u| LoginProfile {
            id: u.id.clone(),
            name: u.name.clone(),
            email: u.email.clone(),
            role: u.role,
            avatar: u.avatar.clone(),
        })
        .collect()
}
