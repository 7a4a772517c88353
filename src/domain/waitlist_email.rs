use std::fmt::{self, Display};

/// Email address submitted to the waitlist.
///
/// Only presence is checked here. Format validation is left to the browser's
/// `type="email"` input and to the mailing list provider.
#[derive(Clone, Debug, PartialEq)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(s: String) -> Result<WaitlistEmail, String> {
        if s.is_empty() {
            Err("Email is empty".into())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for WaitlistEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
