//! Dashboard query handlers.

mod get_admin_overview;
mod get_coordinator_dashboard;
mod get_student_dashboard;

pub use get_admin_overview::GetAdminOverviewHandler;
pub use get_coordinator_dashboard::GetCoordinatorDashboardHandler;
pub use get_student_dashboard::{GetStudentDashboardHandler, GetStudentDashboardQuery};
