use crate::domain::WaitlistEmail;
use async_trait::async_trait;

/// The service of record for waitlist signups.
#[async_trait]
pub trait MailingList: Send + Sync {
    /// Adds `email` to the list. Providers are expected to treat repeated
    /// calls for the same address as an upsert.
    async fn create_contact(&self, email: &WaitlistEmail) -> Result<(), MailingListError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MailingListError {
    /// The provider answered and refused the contact.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}
