//! Dataset export for administrators.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::club::{Club, ClubMembership};
use crate::domain::club_event::ClubEvent;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::membership::JoinRequest;
use crate::domain::store::Document;
use crate::domain::user::User;

/// The exported subset of the document. PINs and custom roles stay out.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetExport {
    pub users: Vec<User>,
    pub clubs: Vec<Club>,
    pub events: Vec<ClubEvent>,
    pub club_memberships: Vec<ClubMembership>,
    pub join_requests: Vec<JoinRequest>,
}

/// A rendered export ready to write to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl DatasetExport {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            users: doc.users.clone(),
            clubs: doc.clubs.clone(),
            events: doc.events.clone(),
            club_memberships: doc.club_memberships.clone(),
            join_requests: doc.join_requests.clone(),
        }
    }

    /// `campus_life_export_<YYYY-MM-DD>.json`
    pub fn file_name(on: NaiveDate) -> String {
        format!("campus_life_export_{}.json", on.format("%Y-%m-%d"))
    }

    /// Pretty-printed JSON named for `on`.
    pub fn render(&self, on: NaiveDate) -> Result<ExportFile, DomainError> {
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DomainError::new(ErrorCode::SerializationError, format!("Failed to render export: {}", e))
        })?;
        Ok(ExportFile {
            file_name: Self::file_name(on),
            contents,
        })
    }
}
