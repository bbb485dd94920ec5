//! Dashboard module - read models computed from one document snapshot.
//!
//! - `student` - the student's clubs, browse list and events
//! - `coordinator` - the coordinator's club, members, events and requests
//! - `admin` - accounts and clubs overview
//! - `export` - dataset export
//! - `login_profiles` - the sign-in profile picker

mod admin;
mod coordinator;
mod export;
mod login_profiles;
mod student;

pub use admin::{AdminOverview, ClubRow};
pub use coordinator::{CoordinatorDashboard, MemberRow, PendingRequestRow};
pub use export::{DatasetExport, ExportFile};
pub use login_profiles::{login_profiles, LoginProfile};
pub use student::{ClubListing, MyClub, StudentDashboard};
