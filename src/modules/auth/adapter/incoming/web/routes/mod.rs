mod change_password;
mod current_session;
mod login_user;
mod logout_user;
mod register_user;
mod update_profile;

pub use change_password::{change_password_handler, ChangePasswordRequest};
pub use current_session::{current_session_handler, CurrentSessionResponse};
pub use login_user::{login_user_handler, LoginRequestDto};
pub use logout_user::logout_user_handler;
pub use register_user::{register_user_handler, RegisterUserRequest};
pub use update_profile::{update_user_profile_handler, UpdateUserRequest};
pub use change_password::__path_change_password_handler;
pub use current_session::__path_current_session_handler;
pub use login_user::__path_login_user_handler;
pub use logout_user::__path_logout_user_handler;
pub use register_user::__path_register_user_handler;
pub use update_profile::__path_update_user_profile_handler;
