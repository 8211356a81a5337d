mod list_submissions;
mod submit_contact;

pub use list_submissions::list_submissions_handler;
pub use submit_contact::{submit_contact_handler, SubmitContactRequest};
pub use list_submissions::__path_list_submissions_handler;
pub use submit_contact::__path_submit_contact_handler;
