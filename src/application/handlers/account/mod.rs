//! Account handlers: sign-in, sign-up, PIN and profile changes.

mod change_pin;
mod list_login_profiles;
mod login;
mod sign_up;
mod update_profile;

pub use change_pin::{ChangePinCommand, ChangePinHandler};
pub use list_login_profiles::ListLoginProfilesHandler;
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use sign_up::{SignUpCommand, SignUpHandler, SignUpResult};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler, UpdateProfileResult};
