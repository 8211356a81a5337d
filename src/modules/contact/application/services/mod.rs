mod list_submissions_service;
mod submit_contact_service;

pub use list_submissions_service::ListSubmissionsService;
pub use submit_contact_service::SubmitContactService;
