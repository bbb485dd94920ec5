//! Repairs applied to every document before it is saved.
//!
//! Older documents store custom roles by name and key PINs by email. Both
//! are rewritten into the current shape here; anything that cannot be
//! resolved is reported so the storage adapter can log it.

use std::collections::{BTreeMap, HashSet};

use crate::domain::club::{CustomRole, MemberRole};
use crate::domain::foundation::ClubId;

use super::Document;

/// What `Document::normalize` changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationReport {
    pub resolved_roles: usize,
    pub migrated_pins: usize,
    pub dropped_pins: usize,
    pub duplicate_memberships: usize,
    pub duplicate_registrations: usize,
    /// Human-readable notes for anything that fell back to a default.
    pub warnings: Vec<String>,
}

impl NormalizationReport {
    /// True when the document was already in canonical shape.
    pub fn is_clean(&self) -> bool {
        self.resolved_roles == 0
            && self.migrated_pins == 0
            && self.dropped_pins == 0
            && self.duplicate_memberships == 0
            && self.duplicate_registrations == 0
            && self.warnings.is_empty()
    }
}

impl Document {
    /// Brings a loaded or about-to-be-saved document into canonical shape.
    pub fn normalize(&mut self) -> NormalizationReport {
        let mut report = NormalizationReport::default();

        for membership in &mut self.club_memberships {
            let role = std::mem::take(&mut membership.role);
            membership.role = resolve_role(&self.custom_roles, &membership.club_id, role, &mut report);
        }

        // Answered requests are history: only legacy names are rewritten, a
        // custom role deleted since approval stays recorded by id.
        for request in &mut self.join_requests {
            if let Some(role) = request.assigned_role.as_mut().filter(|r| r.is_legacy()) {
                let legacy = std::mem::take(role);
                *role = resolve_role(&self.custom_roles, &request.club_id, legacy, &mut report);
            }
        }

        let mut seen = HashSet::new();
        let before = self.club_memberships.len();
        self.club_memberships
            .retain(|m| seen.insert((m.user_id.clone(), m.club_id.clone())));
        report.duplicate_memberships = before - self.club_memberships.len();

        for event in &mut self.events {
            let mut seen = HashSet::new();
            let before = event.registered_users.len();
            event.registered_users.retain(|u| seen.insert(u.clone()));
            report.duplicate_registrations += before - event.registered_users.len();
        }

        self.migrate_pins(&mut report);
        report
    }

    fn migrate_pins(&mut self, report: &mut NormalizationReport) {
        let ids: HashSet<&str> = self.users.iter().map(|u| u.id.as_str()).collect();
        let mut pins = BTreeMap::new();
        let mut legacy = Vec::new();

        for (key, pin) in std::mem::take(&mut self.pins) {
            if ids.contains(key.as_str()) {
                pins.insert(key, pin);
            } else {
                legacy.push((key, pin));
            }
        }

        for (key, pin) in legacy {
            match self.user_by_email(&key) {
                Some(user) => {
                    report.migrated_pins += 1;
                    pins.entry(user.id.to_string()).or_insert(pin);
                }
                None => {
                    report.dropped_pins += 1;
                    report
                        .warnings
                        .push(format!("dropped PIN entry '{}' matching no user", key));
                }
            }
        }

        self.pins = pins;
    }
}

fn resolve_role(
    custom_roles: &[CustomRole],
    club_id: &ClubId,
    role: MemberRole,
    report: &mut NormalizationReport,
) -> MemberRole {
    match role {
        MemberRole::Base(_) => role,
        MemberRole::Custom(ref id) => {
            if custom_roles.iter().any(|r| &r.id == id && &r.club_id == club_id) {
                role
            } else {
                report.warnings.push(format!(
                    "custom role {} is not defined for club {}; using member",
                    id, club_id
                ));
                MemberRole::member()
            }
        }
        MemberRole::Legacy(name) => {
            match custom_roles
                .iter()
                .find(|r| &r.club_id == club_id && r.has_name(&name))
            {
                Some(found) => {
                    report.resolved_roles += 1;
                    MemberRole::Custom(found.id.clone())
                }
                None => {
                    report.warnings.push(format!(
                        "unknown role '{}' in club {}; using member",
                        name, club_id
                    ));
                    MemberRole::member()
                }
            }
        }
    }
}
