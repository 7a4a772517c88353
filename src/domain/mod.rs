mod honeypot;
mod signup_form;
mod waitlist_email;

pub use honeypot::Honeypot;
pub use signup_form::{SignupForm, SignupRejection};
pub use waitlist_email::WaitlistEmail;
