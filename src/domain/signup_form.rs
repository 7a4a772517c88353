use super::{Honeypot, WaitlistEmail};

/// Raw waitlist form fields, as posted by the landing page.
#[derive(Debug, Default)]
pub struct SignupForm {
    pub email: Option<String>,
    pub is_bot: Option<String>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SignupRejection {
    #[error("No bots allowed")]
    Bot,
    #[error("Email is required")]
    MissingEmail,
}

/// Collects decoded form pairs. A repeated field keeps its first value and
/// unknown fields are ignored.
impl FromIterator<(String, String)> for SignupForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(fields: I) -> Self {
        let mut form = SignupForm::default();

        for (name, value) in fields {
            let slot = match name.as_str() {
                "email" => &mut form.email,
                "is_bot" => &mut form.is_bot,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        form
    }
}

impl SignupForm {
    /// The honeypot is checked before the email, so bots never learn which
    /// fields are required.
    pub fn validate(self) -> Result<WaitlistEmail, SignupRejection> {
        if Honeypot::from(self.is_bot.as_deref()).is_tripped() {
            return Err(SignupRejection::Bot);
        }

        self.email
            .ok_or(SignupRejection::MissingEmail)
            .and_then(|email| {
                WaitlistEmail::parse(email).map_err(|_| SignupRejection::MissingEmail)
            })
    }
}
