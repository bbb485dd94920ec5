//! Admin command and query handlers.

mod create_club;
mod create_user;
mod delete_club;
mod delete_user;
mod export_dataset;

pub use create_club::{CreateClubCommand, CreateClubHandler, CreateClubResult};
pub use create_user::{CreateUserCommand, CreateUserHandler, CreateUserResult};
pub use delete_club::{DeleteClubCommand, DeleteClubHandler};
pub use delete_user::{DeleteUserCommand, DeleteUserHandler, DeleteUserResult};
pub use export_dataset::{ExportDatasetHandler, ExportDatasetQuery};
