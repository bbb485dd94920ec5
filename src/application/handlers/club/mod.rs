//! Club command handlers.

mod update_club_image;

pub use update_club_image::{
    UpdateClubImageCommand, UpdateClubImageHandler, UpdateClubImageResult,
};
