mod list_submissions_use_case;
mod submit_contact_use_case;

pub use list_submissions_use_case::{ListSubmissionsError, ListSubmissionsUseCase};
pub use submit_contact_use_case::{
    SubmitContactCommand, SubmitContactCommandError, SubmitContactError, SubmitContactUseCase,
};
