//! Club event aggregate.
//!
//! An event is proposed by a club member, decided once by the club's
//! coordinator, and once approved collects student registrations.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ClubEventId, ClubId, StateMachine, Timestamp, UserId, ValidationError,
};

use super::EventStatus;

/// A named external link shown with an event (tickets, slides, forms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLink {
    pub name: String,
    pub url: String,
}

/// Proposal input as entered by the proposer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDetails {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub location: String,
    pub image: Option<String>,
    pub links: Vec<EventLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubEvent {
    pub id: ClubEventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub location: String,
    #[serde(default)]
    pub image: String,
    pub club_id: ClubId,
    #[serde(default)]
    pub registered_users: Vec<UserId>,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_by: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<EventLink>,
}

impl ClubEvent {
    /// Creates a proposed event with no registrations.
    pub fn propose(
        id: ClubEventId,
        club_id: ClubId,
        proposer: UserId,
        details: EventDetails,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = required("title", &details.title)?;
        let location = required("location", &details.location)?;
        let date = parse_date(&required("date", &details.date)?)?;
        let time = parse_time(&required("time", &details.time)?)?;

        let links = details
            .links
            .into_iter()
            .map(|l| EventLink {
                name: l.name.trim().to_string(),
                url: l.url.trim().to_string(),
            })
            .filter(|l| !l.url.is_empty())
            .collect();

        Ok(Self {
            id,
            title,
            description: details.description.trim().to_string(),
            date,
            time,
            location,
            image: details.image.map(|i| i.trim().to_string()).unwrap_or_default(),
            club_id,
            registered_users: Vec::new(),
            status: EventStatus::Proposed,
            proposed_by: Some(proposer),
            proposed_at: Some(now),
            approved_at: None,
            rejected_at: None,
            links,
        })
    }

    pub fn approve(&mut self, now: Timestamp) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(EventStatus::Approved)?;
        self.approved_at = Some(now);
        Ok(())
    }

    pub fn reject(&mut self, now: Timestamp) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(EventStatus::Rejected)?;
        self.rejected_at = Some(now);
        Ok(())
    }

    pub fn is_registered(&self, user_id: &UserId) -> bool {
        self.registered_users.contains(user_id)
    }

    /// Appends the user. Returns false if already registered.
    pub fn register(&mut self, user_id: UserId) -> bool {
        if self.is_registered(&user_id) {
            return false;
        }
        self.registered_users.push(user_id);
        true
    }

    /// Removes the user. Returns false if they were not registered.
    pub fn withdraw(&mut self, user_id: &UserId) -> bool {
        let before = self.registered_users.len();
        self.registered_users.retain(|u| u != user_id);
        before != self.registered_users.len()
    }

    /// On or after `today`.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::invalid_format("date", "expected YYYY-MM-DD"))
}

fn parse_time(raw: &str) -> Result<NaiveTime, ValidationError> {
    hh_mm::parse(raw).ok_or_else(|| ValidationError::invalid_format("time", "expected HH:MM"))
}

/// `HH:MM` wire format. Reads `HH:MM:SS` too.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn parse(raw: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .ok()
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(raw.trim()).ok_or_else(|| de::Error::custom(format!("invalid time '{}'", raw)))
    }
}
